//! Загрузка и валидация конфигурации патруля (RON)
//!
//! Формат:
//! ```ron
//! (
//!     config: (
//!         detection_radius: 10.0,
//!         enemy_filter: (mask: 4),
//!         patrol_wait_time: 2.0,
//!         move_speed: 5.0,
//!     ),
//!     route: [(0.0, 0.0, 0.0), (10.0, 0.0, 0.0)],
//! )
//! ```
//! Пустой маршрут — не ошибка: контроллер при активации выдаст warning и останется Idle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::components::{PatrolConfig, PatrolRoute};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse patrol config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("detection_radius must be finite and > 0, got {0}")]
    InvalidDetectionRadius(f32),

    #[error("move_speed must be finite and > 0, got {0}")]
    InvalidMoveSpeed(f32),

    #[error("patrol_wait_time must be finite and >= 0, got {0}")]
    InvalidWaitTime(f32),

    #[error("turn_rate must be finite and >= 0, got {0}")]
    InvalidTurnRate(f32),

    #[error("arrival_epsilon must be finite and > 0, got {0}")]
    InvalidArrivalEpsilon(f32),
}

impl PatrolConfig {
    /// Проверка диапазонов (NaN/inf тоже отклоняются)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.detection_radius.is_finite() || self.detection_radius <= 0.0 {
            return Err(ConfigError::InvalidDetectionRadius(self.detection_radius));
        }
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(ConfigError::InvalidMoveSpeed(self.move_speed));
        }
        if !self.patrol_wait_time.is_finite() || self.patrol_wait_time < 0.0 {
            return Err(ConfigError::InvalidWaitTime(self.patrol_wait_time));
        }
        if !self.turn_rate.is_finite() || self.turn_rate < 0.0 {
            return Err(ConfigError::InvalidTurnRate(self.turn_rate));
        }
        if !self.arrival_epsilon.is_finite() || self.arrival_epsilon <= 0.0 {
            return Err(ConfigError::InvalidArrivalEpsilon(self.arrival_epsilon));
        }
        Ok(())
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Конфиг + маршрут одного патрульного
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatrolSetup {
    #[serde(default)]
    pub config: PatrolConfig,
    #[serde(default)]
    pub route: PatrolRoute,
}

impl PatrolSetup {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let setup: Self = ron::from_str(text)?;
        setup.config.validate()?;

        if setup.route.is_empty() {
            crate::log_info("PatrolSetup: loaded with empty route (patrol will be disabled)");
        }

        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PatrolConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let bad_radius = PatrolConfig { detection_radius: 0.0, ..Default::default() };
        assert!(matches!(bad_radius.validate(), Err(ConfigError::InvalidDetectionRadius(_))));

        let bad_speed = PatrolConfig { move_speed: -1.0, ..Default::default() };
        assert!(matches!(bad_speed.validate(), Err(ConfigError::InvalidMoveSpeed(_))));

        let bad_wait = PatrolConfig { patrol_wait_time: f32::NAN, ..Default::default() };
        assert!(matches!(bad_wait.validate(), Err(ConfigError::InvalidWaitTime(_))));

        let zero_wait = PatrolConfig { patrol_wait_time: 0.0, ..Default::default() };
        assert!(zero_wait.validate().is_ok());
    }

    #[test]
    fn test_validate_turn_rate_and_arrival_epsilon() {
        let negative_turn = PatrolConfig { turn_rate: -1.0, ..Default::default() };
        assert!(matches!(negative_turn.validate(), Err(ConfigError::InvalidTurnRate(_))));

        let infinite_turn = PatrolConfig { turn_rate: f32::INFINITY, ..Default::default() };
        assert!(matches!(infinite_turn.validate(), Err(ConfigError::InvalidTurnRate(_))));

        let zero_epsilon = PatrolConfig { arrival_epsilon: 0.0, ..Default::default() };
        assert!(matches!(zero_epsilon.validate(), Err(ConfigError::InvalidArrivalEpsilon(_))));

        let nan_epsilon = PatrolConfig { arrival_epsilon: f32::NAN, ..Default::default() };
        assert!(matches!(nan_epsilon.validate(), Err(ConfigError::InvalidArrivalEpsilon(_))));

        // 0 = не поворачиваемся, это допустимо
        let no_turn = PatrolConfig { turn_rate: 0.0, ..Default::default() };
        assert!(no_turn.validate().is_ok());
    }

    #[test]
    fn test_parse_setup_with_partial_config() {
        let text = r#"(
            config: (
                detection_radius: 6.5,
                enemy_filter: (mask: 12),
            ),
            route: [(0.0, 0.0, 0.0), (4.0, 0.0, 2.0)],
        )"#;

        let setup = PatrolSetup::from_ron_str(text).expect("valid setup");

        assert_eq!(setup.config.detection_radius, 6.5);
        assert_eq!(setup.config.enemy_filter.mask, 12);
        assert_eq!(setup.config.move_speed, 5.0); // default
        assert_eq!(setup.route.waypoints(), &[Vec3::ZERO, Vec3::new(4.0, 0.0, 2.0)]);
    }

    #[test]
    fn test_parse_empty_route_is_accepted() {
        let setup = PatrolSetup::from_ron_str("(route: [])").expect("empty route is not an error");
        assert!(setup.route.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(PatrolConfig::from_ron_str("(detection_radius: "), Err(ConfigError::Parse(_))));
        assert!(matches!(
            PatrolConfig::from_ron_str("(move_speed: 0.0)"),
            Err(ConfigError::InvalidMoveSpeed(_))
        ));
    }
}
