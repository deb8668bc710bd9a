//! Command компоненты: "data store" актора для других подсистем
//!
//! Пишет только dispatcher (ai::systems::dispatch_command_intents),
//! AI контроллер публикует намерения через события.

use bevy::prelude::*;

/// Тип команды в CommandRequest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum CommandType {
    AttackTarget,
}

/// Статус выполнения команды (двигает executor боя)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum CommandStatus {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Текущая команда актора (executor атаки читает её)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CommandRequest {
    pub command: CommandType,
    pub target: Entity,
    pub status: CommandStatus,
}

/// Данные для возобновления патруля, которые оставил внешний код
///
/// start_patrolling всегда их сбрасывает (патруль начинается с точки 0).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolResumeData {
    pub waypoint_index: usize,
}
