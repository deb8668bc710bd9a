//! FSM компоненты патрульного AI (state, route, config, enemy filter).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Состояние patrol/combat автомата
///
/// Ровно одно состояние в каждый момент. `H` — слабый handle цели
/// (для ECS это `Entity`: index + generation), контроллер им не владеет.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState<H> {
    /// Idle — не патрулируем и не деремся (пустой маршрут / до активации)
    Idle,

    /// Patrolling — идём по маршруту или стоим на точке
    Patrolling {
        /// Индекс текущей точки маршрута (всегда < route.len())
        waypoint_index: usize,
        /// Стоим на точке и ждём
        is_waiting: bool,
        /// Сколько уже ждём (секунды)
        wait_elapsed: f32,
    },

    /// Combat — атакуем цель
    Combat {
        target: H,
    },
}

impl<H> Default for ControllerState<H> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<H> ControllerState<H> {
    /// Начальное состояние патруля: точка 0, не ждём
    pub fn patrol_start() -> Self {
        Self::Patrolling {
            waypoint_index: 0,
            is_waiting: false,
            wait_elapsed: 0.0,
        }
    }

    pub fn is_patrolling(&self) -> bool {
        matches!(self, Self::Patrolling { .. })
    }

    pub fn is_in_combat(&self) -> bool {
        matches!(self, Self::Combat { .. })
    }
}

/// Маршрут патруля: упорядоченные точки, замкнутый (последняя → первая)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Точка по индексу (индекс заворачивается по модулю)
    pub fn waypoint(&self, index: usize) -> Option<Vec3> {
        if self.waypoints.is_empty() {
            return None;
        }
        Some(self.waypoints[index % self.waypoints.len()])
    }

    /// Следующий индекс по кругу: (index + 1) mod len
    pub fn next_index(&self, index: usize) -> usize {
        if self.waypoints.is_empty() {
            0
        } else {
            (index + 1) % self.waypoints.len()
        }
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }
}

/// Фильтр врагов: битовая маска слоёв (аналог collision mask)
///
/// Кандидат проходит, если хотя бы один его слой есть в маске.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyFilter {
    pub mask: u32,
}

impl EnemyFilter {
    pub const NONE: Self = Self { mask: 0 };

    pub fn new(mask: u32) -> Self {
        Self { mask }
    }

    pub fn matches(&self, layers: u32) -> bool {
        self.mask & layers != 0
    }
}

impl Default for EnemyFilter {
    fn default() -> Self {
        Self { mask: crate::components::LAYER_HOSTILE }
    }
}

/// Параметры патруля (задаются при создании контроллера)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    /// Радиус обнаружения врагов (метры, > 0)
    pub detection_radius: f32,
    /// Какие слои считаются врагами
    pub enemy_filter: EnemyFilter,
    /// Время ожидания на каждой точке (секунды, ≥ 0)
    pub patrol_wait_time: f32,
    /// Скорость движения (м/с, > 0)
    pub move_speed: f32,
    /// Коэффициент поворота: slerp factor = turn_rate * dt
    pub turn_rate: f32,
    /// Дистанция "дошли до точки"
    pub arrival_epsilon: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            detection_radius: 10.0,
            enemy_filter: EnemyFilter::default(),
            patrol_wait_time: 2.0,
            move_speed: 5.0,
            turn_rate: 5.0,
            arrival_epsilon: 0.1,
        }
    }
}
