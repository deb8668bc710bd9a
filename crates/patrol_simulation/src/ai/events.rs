//! AI Events — намерения патрульного контроллера
//!
//! Контроллер не выполняет атаку сам: он публикует CommandIntent,
//! а dispatcher (ai::systems::dispatch) применяет его к data store актора.

use bevy::prelude::*;

/// Какую команду снять
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Текущая команда атаки (CommandRequest)
    AttackTarget,
    /// Данные возобновления патруля (PatrolResumeData)
    PatrolResume,
}

/// Декларативный запрос к внешнему executor'у
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandIntent<H> {
    /// Атаковать цель
    AttackTarget { target: H },
    /// Снять команду данного типа
    Clear(CommandKind),
}

/// ECS событие: intent от конкретного патрульного
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PatrolCommandEvent {
    /// Entity патрульного (кто публикует)
    pub actor: Entity,
    pub intent: CommandIntent<Entity>,
}
