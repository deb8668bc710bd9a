//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: marker Actor, health, sensor layers, Inactive
//! - animation: integer state для animator'а (AnimationState)
//! - command: data store команд (CommandRequest, PatrolResumeData)
//! - ai: патрульный AI (PatrolGuard, ControllerState, PatrolConfig)

pub mod actor;
pub mod animation;
pub mod command;
pub mod ai;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use command::*;
pub use ai::*;
