//! Ports — что контроллер требует от host'а (движка)
//!
//! Контроллер не знает про ECS/физику/animator: всё через эти trait'ы.
//! ECS реализация: ai::systems::guard::EcsHost.

use std::fmt::Debug;

use bevy::math::{Quat, Vec3};

use super::components::EnemyFilter;
use super::events::{CommandIntent, CommandKind};
use crate::components::AnimationStateId;

/// Handle сущности: копируемый, сравнимый, без владения
pub trait TargetHandle: Copy + Eq + Debug {}

impl<T: Copy + Eq + Debug> TargetHandle for T {}

/// Сферический запрос: кто в радиусе и проходит фильтр
pub trait SpatialQuery<H: TargetHandle> {
    /// Порядок результата = порядок запроса (важен для tie-break)
    fn find_within_radius(&self, center: Vec3, radius: f32, filter: &EnemyFilter) -> Vec<H>;
}

/// Реестр сущностей: liveness + позиции
pub trait EntityRegistry<H: TargetHandle> {
    /// Handle указывает на живую активную сущность
    fn is_active(&self, handle: H) -> bool;

    fn position_of(&self, handle: H) -> Option<Vec3>;

    /// Collider → владелец (актор). По умолчанию handle и есть актор.
    fn owner(&self, handle: H) -> Option<H> {
        Some(handle)
    }
}

/// Куда публикуются команды
pub trait CommandSink<H: TargetHandle> {
    fn publish(&mut self, intent: CommandIntent<H>);

    fn clear(&mut self, kind: CommandKind) {
        self.publish(CommandIntent::Clear(kind));
    }
}

/// Integer state animator'а
pub trait AnimationSignal {
    fn set_state(&mut self, state: AnimationStateId);
}

/// Позиция/поворот носителя контроллера
pub trait MotionIntegrator {
    fn position(&self) -> Vec3;

    fn rotation(&self) -> Quat;

    fn apply(&mut self, position: Vec3, rotation: Quat);
}

/// Всё вместе — то, что нужно PatrolCombatController::tick
pub trait ControllerHost<H: TargetHandle>:
    SpatialQuery<H> + EntityRegistry<H> + CommandSink<H> + AnimationSignal + MotionIntegrator
{
}

impl<H, T> ControllerHost<H> for T
where
    H: TargetHandle,
    T: SpatialQuery<H> + EntityRegistry<H> + CommandSink<H> + AnimationSignal + MotionIntegrator,
{
}
