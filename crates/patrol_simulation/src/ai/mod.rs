//! AI decision-making module
//!
//! Patrol/combat FSM для охраны: патруль по замкнутому маршруту,
//! бой с ближайшим врагом в detection_radius, возврат к патрулю.
//!
//! Слои:
//! - controller — чистый автомат (не знает про ECS), host через ports
//! - systems — ECS адаптер (EcsHost) + dispatcher команд

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod controller;
pub mod events;
pub mod ports;
pub mod systems;
pub mod targeting;


// Re-export основных типов
pub use components::*;
pub use config::{ConfigError, PatrolSetup};
pub use controller::PatrolCombatController;
pub use events::{CommandIntent, CommandKind, PatrolCommandEvent};
pub use ports::ControllerHost;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. activate_patrol_guards — старт патруля у новых PatrolGuard
/// 2. tick_patrol_guards — сенсор + переходы FSM + движение
/// 3. dispatch_command_intents — intent'ы → CommandRequest / PatrolResumeData
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PatrolCommandEvent>();

        app.add_systems(
            FixedUpdate,
            (
                systems::activate_patrol_guards,
                systems::tick_patrol_guards,
                systems::dispatch_command_intents,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}
