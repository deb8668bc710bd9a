//! AI systems (ECS adapter для PatrolCombatController)

pub mod dispatch;
pub mod guard;

// Re-export all systems
pub use dispatch::*;
pub use guard::*;
