//! Headless симуляция патруля
//!
//! Охранник ходит по маршруту, нарушители появляются (снимается Inactive),
//! охранник переключается в бой, простой executor CommandRequest наносит урон,
//! после гибели всех нарушителей охранник возвращается к патрулю.
//!
//! Usage: patrol_simulation [setup.ron]

use bevy::prelude::*;
use rand::Rng;

use patrol_simulation::ai::PatrolSetup;
use patrol_simulation::{
    create_headless_app, Actor, AnimationState, CommandRequest, CommandStatus, DeterministicRng, Health, Inactive,
    PatrolGuard, SensorLayers, SimulationPlugin, LAYER_FRIENDLY, LAYER_HOSTILE,
};

const DEFAULT_SETUP: &str = r#"(
    config: (
        detection_radius: 10.0,
        enemy_filter: (mask: 4),
        patrol_wait_time: 2.0,
        move_speed: 5.0,
    ),
    route: [(0.0, 0.0, 0.0), (20.0, 0.0, 0.0), (20.0, 0.0, 20.0), (0.0, 0.0, 20.0)],
)"#;

const TICKS: u32 = 3000;
const INTRUDER_COUNT: usize = 3;

/// Урон executor'а атаки за tick
const DAMAGE_PER_TICK: u32 = 2;

/// Нарушитель: появится на указанном tick'е
#[derive(Component)]
struct Intruder {
    appear_at_tick: u32,
}

#[derive(Resource, Default)]
struct TickCounter(u32);

fn main() {
    let setup = match load_setup() {
        Ok(setup) => setup,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let seed = 42;
    println!("Starting patrol headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .init_resource::<TickCounter>()
        .add_systems(FixedUpdate, (reveal_intruders, resolve_attack_commands).chain());

    let guard = app
        .world_mut()
        .spawn((
            Actor,
            SensorLayers(LAYER_FRIENDLY),
            Transform::from_translation(Vec3::ZERO),
            PatrolGuard::new(setup.config.clone(), setup.route.clone()),
        ))
        .id();

    spawn_intruders(app.world_mut(), &setup);

    for tick in 0..TICKS {
        app.update();

        if tick % 300 == 0 {
            let world = app.world();
            let state = world.get::<PatrolGuard>(guard).map(|g| g.state());
            let position = world.get::<Transform>(guard).map(|t| t.translation);
            let animation = world.get::<AnimationState>(guard).map(|a| a.code());
            println!("Tick {}: state={:?} pos={:?} anim={:?}", tick, state, position, animation);
        }
    }

    println!("Simulation complete!");
}

fn load_setup() -> Result<PatrolSetup, String> {
    let Some(path) = std::env::args().nth(1) else {
        return PatrolSetup::from_ron_str(DEFAULT_SETUP).map_err(|e| e.to_string());
    };

    let text = std::fs::read_to_string(&path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    PatrolSetup::from_ron_str(&text).map_err(|e| format!("{}: {}", path, e))
}

/// Нарушители рядом с маршрутом (детерминированно по seed)
fn spawn_intruders(world: &mut World, setup: &PatrolSetup) {
    let waypoints = setup.route.waypoints().to_vec();
    if waypoints.is_empty() {
        return;
    }

    let mut placements = Vec::new();
    {
        let mut rng = world.resource_mut::<DeterministicRng>();
        for i in 0..INTRUDER_COUNT {
            let anchor = waypoints[rng.rng.gen_range(0..waypoints.len())];
            let offset = Vec3::new(rng.rng.gen_range(-4.0..4.0), 0.0, rng.rng.gen_range(-4.0..4.0));
            let appear_at_tick = 300 + i as u32 * 600;
            placements.push((anchor + offset, appear_at_tick));
        }
    }

    for (position, appear_at_tick) in placements {
        world.spawn((
            Actor,
            SensorLayers(LAYER_HOSTILE),
            Health::new(100),
            Transform::from_translation(position),
            Inactive,
            Intruder { appear_at_tick },
        ));
    }
}

/// Система: нарушители появляются по расписанию
fn reveal_intruders(
    mut commands: Commands,
    mut counter: ResMut<TickCounter>,
    intruders: Query<(Entity, &Intruder), With<Inactive>>,
) {
    counter.0 += 1;

    for (entity, intruder) in intruders.iter() {
        if counter.0 >= intruder.appear_at_tick {
            commands.entity(entity).remove::<Inactive>();
            patrol_simulation::log_info(&format!("Intruder {:?} appeared at tick {}", entity, counter.0));
        }
    }
}

/// Система: простейший executor CommandRequest (урон каждый tick)
fn resolve_attack_commands(
    mut commands: Commands,
    mut attackers: Query<(Entity, &mut CommandRequest)>,
    mut targets: Query<&mut Health>,
) {
    for (attacker, mut request) in attackers.iter_mut() {
        if request.status == CommandStatus::Finished {
            continue;
        }

        let Ok(mut health) = targets.get_mut(request.target) else {
            request.status = CommandStatus::Finished;
            continue;
        };

        health.take_damage(DAMAGE_PER_TICK);
        request.status = CommandStatus::Running;

        if !health.is_alive() {
            request.status = CommandStatus::Finished;
            patrol_simulation::log_info(&format!("{:?} defeated {:?}", attacker, request.target));
            commands.entity(request.target).despawn();
        }
    }
}
