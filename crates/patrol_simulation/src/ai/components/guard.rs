//! PatrolGuard — ECS носитель PatrolCombatController

use bevy::prelude::*;

use super::fsm::{ControllerState, PatrolConfig, PatrolRoute};
use crate::ai::controller::PatrolCombatController;
use crate::components::AnimationState;

/// Патрульный NPC: контроллер с handle'ами = Entity (index + generation)
///
/// Активируется системой activate_patrol_guards при добавлении.
#[derive(Component, Debug, Clone)]
#[require(AnimationState, Transform)]
pub struct PatrolGuard {
    pub controller: PatrolCombatController<Entity>,
}

impl PatrolGuard {
    pub fn new(config: PatrolConfig, route: PatrolRoute) -> Self {
        Self {
            controller: PatrolCombatController::new(config, route),
        }
    }

    pub fn state(&self) -> ControllerState<Entity> {
        self.controller.state()
    }
}
