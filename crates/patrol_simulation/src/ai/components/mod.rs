//! AI components

pub mod fsm;
pub mod guard;


// Re-export all components
pub use fsm::*;
pub use guard::*;
