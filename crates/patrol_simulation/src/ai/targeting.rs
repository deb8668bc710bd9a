//! Nearest-enemy targeting
//!
//! Выбор ближайшего валидного кандидата из SensorResult.
//! При равной дистанции побеждает тот, кто раньше в результате запроса.

use bevy::math::Vec3;

use super::ports::{EntityRegistry, TargetHandle};

/// Ближайший валидный кандидат (Euclidean distance)
///
/// Кандидаты без позиции пропускаются.
pub fn select_nearest<H, R>(origin: Vec3, candidates: &[H], registry: &R) -> Option<H>
where
    H: TargetHandle,
    R: EntityRegistry<H> + ?Sized,
{
    let mut nearest: Option<(H, f32)> = None;

    for &candidate in candidates {
        if !registry.is_active(candidate) {
            continue;
        }

        let Some(position) = registry.position_of(candidate) else {
            continue;
        };

        let distance = origin.distance(position);

        // Строго меньше: при равенстве остаётся первый
        match nearest {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => nearest = Some((candidate, distance)),
        }
    }

    nearest.map(|(handle, _)| handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Registry {
        positions: HashMap<u32, Vec3>,
        dead: Vec<u32>,
    }

    impl EntityRegistry<u32> for Registry {
        fn is_active(&self, handle: u32) -> bool {
            self.positions.contains_key(&handle) && !self.dead.contains(&handle)
        }

        fn position_of(&self, handle: u32) -> Option<Vec3> {
            self.positions.get(&handle).copied()
        }
    }

    fn registry(entries: &[(u32, Vec3)]) -> Registry {
        Registry {
            positions: entries.iter().copied().collect(),
            dead: Vec::new(),
        }
    }

    #[test]
    fn test_select_nearest_picks_minimum() {
        let reg = registry(&[
            (1, Vec3::new(5.0, 0.0, 0.0)),
            (2, Vec3::new(3.0, 0.0, 0.0)), // ближе
            (3, Vec3::new(8.0, 0.0, 0.0)),
        ]);

        assert_eq!(select_nearest(Vec3::ZERO, &[1, 2, 3], &reg), Some(2));
    }

    #[test]
    fn test_select_nearest_tie_keeps_query_order() {
        let reg = registry(&[
            (7, Vec3::new(0.0, 0.0, 4.0)),
            (4, Vec3::new(4.0, 0.0, 0.0)),
        ]);

        assert_eq!(select_nearest(Vec3::ZERO, &[7, 4], &reg), Some(7));
        assert_eq!(select_nearest(Vec3::ZERO, &[4, 7], &reg), Some(4));
    }

    #[test]
    fn test_select_nearest_skips_invalid() {
        let mut reg = registry(&[
            (1, Vec3::new(1.0, 0.0, 0.0)),
            (2, Vec3::new(6.0, 0.0, 0.0)),
        ]);
        reg.dead.push(1);

        assert_eq!(select_nearest(Vec3::ZERO, &[1, 2, 99], &reg), Some(2));
        assert_eq!(select_nearest(Vec3::ZERO, &[1, 99], &reg), None);
    }
}
