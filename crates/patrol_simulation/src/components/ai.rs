//! AI компоненты: state machine, config, route

// NOTE: типы живут в crate::ai module, здесь только re-export для единообразия

pub use crate::ai::{ControllerState, EnemyFilter, PatrolConfig, PatrolGuard, PatrolRoute};
