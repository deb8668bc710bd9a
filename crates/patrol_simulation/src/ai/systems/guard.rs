//! Patrol guard systems (activation, tick).
//!
//! ECS реализация ports: EcsHost собирает snapshot акторов (позиции, слои, liveness)
//! и даёт контроллеру Transform/AnimationState самого патрульного.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::ai::components::{EnemyFilter, PatrolGuard};
use crate::ai::events::{CommandIntent, PatrolCommandEvent};
use crate::ai::ports::{AnimationSignal, CommandSink, EntityRegistry, MotionIntegrator, SpatialQuery};
use crate::components::{is_actor_active, Actor, AnimationState, AnimationStateId, Health, Inactive, SensorLayers};

/// Snapshot одного актора на момент tick'а
#[derive(Debug, Clone, Copy)]
pub struct SensorEntry {
    pub entity: Entity,
    pub position: Vec3,
    pub layers: u32,
    pub active: bool,
}

/// Snapshot всех акторов за tick: порядок запроса + индекс по Entity
///
/// Порядок `entries` решает tie-break при равной дистанции.
#[derive(Debug, Default)]
pub struct SensorSnapshot {
    entries: Vec<SensorEntry>,
    by_entity: HashMap<Entity, usize>,
}

impl SensorSnapshot {
    pub fn new(entries: Vec<SensorEntry>) -> Self {
        let by_entity = entries.iter().enumerate().map(|(i, e)| (e.entity, i)).collect();
        Self { entries, by_entity }
    }

    pub fn entries(&self) -> &[SensorEntry] {
        &self.entries
    }

    pub fn get(&self, entity: Entity) -> Option<&SensorEntry> {
        self.by_entity.get(&entity).and_then(|&i| self.entries.get(i))
    }
}

/// Host для одного патрульного
pub struct EcsHost<'a> {
    pub actor: Entity,
    pub sensors: &'a SensorSnapshot,
    pub transform: Mut<'a, Transform>,
    pub animation: Mut<'a, AnimationState>,
    pub intents: Vec<CommandIntent<Entity>>,
}

impl EcsHost<'_> {
    fn entry(&self, handle: Entity) -> Option<&SensorEntry> {
        self.sensors.get(handle)
    }
}

impl SpatialQuery<Entity> for EcsHost<'_> {
    fn find_within_radius(&self, center: Vec3, radius: f32, filter: &EnemyFilter) -> Vec<Entity> {
        self.sensors
            .entries()
            .iter()
            .filter(|e| e.entity != self.actor) // Себя не видим
            .filter(|e| filter.matches(e.layers))
            .filter(|e| center.distance(e.position) <= radius)
            .map(|e| e.entity)
            .collect()
    }
}

impl EntityRegistry<Entity> for EcsHost<'_> {
    fn is_active(&self, handle: Entity) -> bool {
        // Despawned entity в snapshot не попадает → false
        self.entry(handle).map(|e| e.active).unwrap_or(false)
    }

    fn position_of(&self, handle: Entity) -> Option<Vec3> {
        self.entry(handle).map(|e| e.position)
    }
}

impl CommandSink<Entity> for EcsHost<'_> {
    fn publish(&mut self, intent: CommandIntent<Entity>) {
        self.intents.push(intent);
    }
}

impl AnimationSignal for EcsHost<'_> {
    fn set_state(&mut self, state: AnimationStateId) {
        // Не трогаем компонент без изменения — иначе Changed<AnimationState> спамит
        if self.animation.state != state {
            self.animation.state = state;
        }
    }
}

impl MotionIntegrator for EcsHost<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    fn apply(&mut self, position: Vec3, rotation: Quat) {
        self.transform.translation = position;
        self.transform.rotation = rotation;
    }
}

/// Система: активация новых патрульных (аналог Start)
pub fn activate_patrol_guards(
    mut guards: Query<(Entity, &mut PatrolGuard, &mut Transform, &mut AnimationState), Added<PatrolGuard>>,
    mut command_events: EventWriter<PatrolCommandEvent>,
) {
    // Активация не сканирует — сенсоры не нужны
    let no_sensors = SensorSnapshot::default();

    for (entity, mut guard, transform, animation) in guards.iter_mut() {
        let mut host = EcsHost {
            actor: entity,
            sensors: &no_sensors,
            transform,
            animation,
            intents: Vec::new(),
        };

        guard.controller.activate(&mut host);
        crate::log(&format!("AI: {:?} activated → {:?}", entity, guard.state()));

        for intent in host.intents {
            command_events.write(PatrolCommandEvent { actor: entity, intent });
        }
    }
}

/// Система: tick всех патрульных
///
/// ParamSet: snapshot читает Transform всех акторов, tick пишет Transform патрульных.
pub fn tick_patrol_guards(
    mut set: ParamSet<(
        Query<(Entity, &Transform, &SensorLayers, Option<&Health>, Has<Inactive>), With<Actor>>,
        Query<(Entity, &mut PatrolGuard, &mut Transform, &mut AnimationState)>,
    )>,
    mut command_events: EventWriter<PatrolCommandEvent>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    let sensors = SensorSnapshot::new(
        set.p0()
            .iter()
            .map(|(entity, transform, layers, health, inactive)| SensorEntry {
                entity,
                position: transform.translation,
                layers: layers.0,
                active: is_actor_active(health, inactive),
            })
            .collect(),
    );

    let mut guards = set.p1();
    for (entity, mut guard, transform, animation) in guards.iter_mut() {
        let before = guard.state();

        let mut host = EcsHost {
            actor: entity,
            sensors: &sensors,
            transform,
            animation,
            intents: Vec::new(),
        };
        guard.controller.tick(delta, &mut host);

        let after = guard.state();
        if before.is_in_combat() != after.is_in_combat() {
            crate::log_info(&format!("AI: {:?} {:?} → {:?}", entity, before, after));
        }

        for intent in host.intents {
            command_events.write(PatrolCommandEvent { actor: entity, intent });
        }
    }
}
