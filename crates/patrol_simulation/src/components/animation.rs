//! Animation компоненты: integer state для animator'а

use bevy::prelude::*;

/// Код состояния анимации
///
/// Значения зафиксированы animation asset'ом (параметр "State"),
/// другие коды не используются.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
#[repr(i32)]
pub enum AnimationStateId {
    Idle = 0,
    Walk = 1,
    Attack = 3,
}

impl AnimationStateId {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Текущее состояние animator'а (читает визуальный слой)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AnimationState {
    pub state: AnimationStateId,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self { state: AnimationStateId::Idle }
    }
}

impl AnimationState {
    pub fn code(&self) -> i32 {
        self.state.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_codes_fixed() {
        assert_eq!(AnimationStateId::Idle.code(), 0);
        assert_eq!(AnimationStateId::Walk.code(), 1);
        assert_eq!(AnimationStateId::Attack.code(), 3);
        assert_eq!(AnimationState::default().code(), 0);
    }
}
