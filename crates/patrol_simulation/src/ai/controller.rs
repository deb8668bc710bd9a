//! PatrolCombatController — patrol/combat автомат NPC
//!
//! Состояния: Idle → Patrolling (moving / waiting) ⇄ Combat
//!
//! Один tick:
//! 1. Patrolling: сенсор в detection_radius → есть валидный враг → Combat (без движения в этот tick)
//! 2. Combat: цель невалидна → ретаргет на ближайшего или конец боя + патруль с точки 0
//! 3. Patrolling: движение к точке / ожидание на точке
//!
//! Контроллер не знает про движок: host реализует ports::ControllerHost.

use bevy::prelude::*;

use super::components::{ControllerState, PatrolConfig, PatrolRoute};
use super::events::{CommandIntent, CommandKind};
use super::ports::{ControllerHost, EntityRegistry, TargetHandle};
use super::targeting::select_nearest;
use crate::components::AnimationStateId;

#[derive(Debug, Clone)]
pub struct PatrolCombatController<H> {
    config: PatrolConfig,
    route: PatrolRoute,
    state: ControllerState<H>,
}

impl<H: TargetHandle> PatrolCombatController<H> {
    /// Контроллер создаётся в Idle, патруль стартует в `activate`
    pub fn new(config: PatrolConfig, route: PatrolRoute) -> Self {
        Self {
            config,
            route,
            state: ControllerState::Idle,
        }
    }

    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn state(&self) -> ControllerState<H> {
        self.state
    }

    pub fn current_target(&self) -> Option<H> {
        match self.state {
            ControllerState::Combat { target } => Some(target),
            _ => None,
        }
    }

    pub fn waypoint_index(&self) -> Option<usize> {
        match self.state {
            ControllerState::Patrolling { waypoint_index, .. } => Some(waypoint_index),
            _ => None,
        }
    }

    /// Активация (аналог Start): пустой маршрут → warning и вечный Idle
    pub fn activate<C: ControllerHost<H>>(&mut self, host: &mut C) {
        if self.route.is_empty() {
            crate::log_warning("PatrolCombatController: patrol route is empty, controller stays idle");
            self.state = ControllerState::Idle;
            return;
        }

        self.start_patrolling(host);
    }

    /// Один simulation tick
    pub fn tick<C: ControllerHost<H>>(&mut self, delta: f32, host: &mut C) {
        // Фаза 1: обнаружение (и в движении, и на точке)
        if self.state.is_patrolling() {
            let candidates = self.scan(&*host);
            if let Some(nearest) = select_nearest(host.position(), &candidates, &*host) {
                crate::log(&format!("⚔️ Patrol → Combat (target {:?}, {} candidates)", nearest, candidates.len()));
                self.stop_patrol(host);
                self.engage(nearest, host);
                return;
            }
        }

        // Фаза 2: валидация цели
        if let ControllerState::Combat { target } = self.state {
            if !self.is_valid_target(&*host, target) {
                crate::log(&format!("❌ Combat: target {:?} invalid", target));
                self.clear_target(host);

                let candidates = self.scan(&*host);
                if let Some(nearest) = select_nearest(host.position(), &candidates, &*host) {
                    crate::log(&format!("🔄 Combat: retarget {:?} → {:?}", target, nearest));
                    self.engage(nearest, host);
                } else {
                    crate::log("🚶 Combat → Patrol (no targets in range)");
                    self.end_combat(host);
                    self.start_patrolling(host);
                }
            }
            // Цель валидна — бой ведёт executor команды
            return;
        }

        // Фаза 3: патруль
        if self.state.is_patrolling() {
            self.patrol_movement(delta, host);
        }
    }

    /// Патруль с точки 0, без ожидания; снимает resume-данные
    pub fn start_patrolling<C: ControllerHost<H>>(&mut self, host: &mut C) {
        host.set_state(AnimationStateId::Idle);

        if self.route.is_empty() {
            self.state = ControllerState::Idle;
            return;
        }

        if self.state.is_in_combat() {
            host.clear(CommandKind::AttackTarget);
        }

        self.state = ControllerState::patrol_start();
        host.clear(CommandKind::PatrolResume);
    }

    /// Остановить движение патруля, цель не трогаем
    pub fn stop_patrol<C: ControllerHost<H>>(&mut self, host: &mut C) {
        host.set_state(AnimationStateId::Idle);

        // waiting флаг и таймер живут внутри Patrolling — уходят вместе с ним
        if self.state.is_patrolling() {
            self.state = ControllerState::Idle;
        }
    }

    pub fn is_valid_target<R: EntityRegistry<H> + ?Sized>(&self, registry: &R, handle: H) -> bool {
        registry.is_active(handle)
    }

    /// (index + 1) mod route.len(), только в Patrolling
    pub fn move_to_next_point(&mut self) {
        if let ControllerState::Patrolling { waypoint_index, .. } = &mut self.state {
            *waypoint_index = self.route.next_index(*waypoint_index);
        }
    }

    fn scan<C: ControllerHost<H>>(&self, host: &C) -> Vec<H> {
        host.find_within_radius(host.position(), self.config.detection_radius, &self.config.enemy_filter)
    }

    fn engage<C: ControllerHost<H>>(&mut self, target: H, host: &mut C) {
        self.state = ControllerState::Combat { target };

        let commanded = host.owner(target).unwrap_or(target);
        host.publish(CommandIntent::AttackTarget { target: commanded });
        host.set_state(AnimationStateId::Attack);
    }

    fn clear_target<C: ControllerHost<H>>(&mut self, host: &mut C) {
        host.clear(CommandKind::AttackTarget);
    }

    fn end_combat<C: ControllerHost<H>>(&mut self, host: &mut C) {
        self.state = ControllerState::Idle;
        host.set_state(AnimationStateId::Idle);
    }

    fn patrol_movement<C: ControllerHost<H>>(&mut self, delta: f32, host: &mut C) {
        let ControllerState::Patrolling { waypoint_index, is_waiting, wait_elapsed } = self.state else {
            return;
        };
        let Some(waypoint) = self.route.waypoint(waypoint_index) else {
            return;
        };

        if is_waiting {
            let elapsed = wait_elapsed + delta;
            if elapsed >= self.config.patrol_wait_time {
                self.state = ControllerState::Patrolling { waypoint_index, is_waiting: false, wait_elapsed: 0.0 };
                self.move_to_next_point();
            } else {
                self.state = ControllerState::Patrolling { waypoint_index, is_waiting: true, wait_elapsed: elapsed };
            }
            host.set_state(AnimationStateId::Idle);
            return;
        }

        let position = host.position();
        let mut rotation = host.rotation();

        if let Some(direction) = (waypoint - position).try_normalize() {
            let look = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
            let factor = (self.config.turn_rate * delta).clamp(0.0, 1.0);
            rotation = rotation.slerp(look, factor);
        }

        let new_position = move_towards(position, waypoint, self.config.move_speed * delta);
        host.apply(new_position, rotation);
        host.set_state(AnimationStateId::Walk);

        if new_position.distance(waypoint) < self.config.arrival_epsilon {
            self.state = ControllerState::Patrolling { waypoint_index, is_waiting: true, wait_elapsed: 0.0 };
        }
    }
}

/// Шаг к target не больше max_delta, без перелёта
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();

    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + to_target / distance * max_delta
    }
}
