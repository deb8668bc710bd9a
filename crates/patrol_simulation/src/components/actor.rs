//! Базовые компоненты акторов: Actor, Health, SensorLayers, Inactive

use bevy::prelude::*;

// ============================================================================
// Sensor Layers (битовые маски, на каком слое актор виден сенсорам)
// ============================================================================

/// Layer 1: Reserved
pub const LAYER_DEFAULT: u32 = 0b1;

/// Layer 2: Friendly actors (охрана, мирные NPC)
pub const LAYER_FRIENDLY: u32 = 0b10;

/// Layer 3: Hostile actors (нарушители, монстры)
pub const LAYER_HOSTILE: u32 = 0b100;

/// Актор (NPC, игрок, враг) — базовый компонент для живых существ
///
/// Автоматически добавляет Health, SensorLayers, Transform через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Health, SensorLayers, Transform)]
pub struct Actor;

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// На каких слоях актор виден сенсорам (сравнивается с EnemyFilter.mask)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SensorLayers(pub u32);

impl Default for SensorLayers {
    fn default() -> Self {
        Self(LAYER_DEFAULT)
    }
}

/// Marker: актор выключен (спрятан / в пуле), для AI не существует
///
/// Entity жив в ECS, но не может быть целью.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Inactive;

/// Живой и активный: есть Health > 0 и нет Inactive
pub fn is_actor_active(health: Option<&Health>, inactive: bool) -> bool {
    !inactive && health.map(|h| h.is_alive()).unwrap_or(false)
}
