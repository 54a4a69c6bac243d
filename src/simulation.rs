//! Simulation plugin and systems for Bevy ECS
//!
//! ## Frame pipeline
//!
//! | Schedule      | System                     | Purpose                                   |
//! |---------------|----------------------------|-------------------------------------------|
//! | `Startup`     | `load_sim_config`          | Apply `assets/physics.toml`               |
//! | `Startup`     | `spawn_initial_particles`  | Random initial batch                      |
//! | `Update`      | `track_cursor_system`      | Cursor → box space                        |
//! | `Update`      | `read_input_system`        | Mouse/keyboard → `SimCommand`             |
//! | `Update`      | `apply_commands_system`    | Spawn / select / launch / remove / quit   |
//! | `FixedUpdate` | `physics_step_system`      | Collide all → integrate all → walls all   |
//! | `Update`      | `refresh_colour_system`    | Speed → colour                            |
//! | `Update`      | `particle_rendering_system`, `boundary_rendering_system` | Gizmos |
//!
//! `FixedUpdate` runs at `SimConfig::target_fps`, so one physics step is one
//! frame of simulated time.

use crate::boundary::Boundary;
use crate::collision::resolve_pair;
use crate::config::{load_sim_config, SimConfig};
use crate::error::SimResult;
use crate::graphics::configure_gizmos;
use crate::input::{
    apply_commands_system, read_input_system, track_cursor_system, CursorPosition, SimCommand,
};
use crate::particle::{spawn_particle, Particle, ParticleIdCounter};
use crate::presentation::refresh_colour_system;
use crate::rendering::{boundary_rendering_system, particle_rendering_system};
use bevy::prelude::*;
use rand::Rng;
use std::ops::DerefMut;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimConfig>()
            .init_resource::<Boundary>()
            .init_resource::<ParticleIdCounter>()
            .init_resource::<CursorPosition>()
            .insert_resource(Time::<Fixed>::from_hz(SimConfig::default().target_fps))
            .add_message::<SimCommand>()
            .add_systems(
                Startup,
                (
                    // Load config first so every other startup system sees the final values.
                    load_sim_config,
                    spawn_initial_particles.after(load_sim_config),
                    configure_gizmos.after(load_sim_config),
                ),
            )
            .add_systems(
                Update,
                (
                    track_cursor_system,
                    read_input_system,
                    apply_commands_system,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, physics_step_system)
            .add_systems(
                Update,
                (
                    refresh_colour_system,
                    particle_rendering_system,
                    boundary_rendering_system,
                )
                    .chain()
                    .after(apply_commands_system),
            );
    }
}

/// Advance every particle by one frame.
///
/// Three phases, each over the whole slice before the next begins:
/// 1. every unordered pair is collision-resolved once (slice order),
/// 2. every particle integrates,
/// 3. every particle is resolved against the walls.
///
/// Returns the number of colliding pairs.
pub fn step_all<P: DerefMut<Target = Particle>>(bodies: &mut [P], boundary: &Boundary) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                contacts += 1;
            }
        }
    }

    for body in bodies.iter_mut() {
        body.integrate();
    }

    for body in bodies.iter_mut() {
        boundary.resolve(body);
    }

    contacts
}

/// One physics frame over all particle entities, in id (creation) order.
pub fn physics_step_system(mut query: Query<&mut Particle>, boundary: Res<Boundary>) {
    let mut bodies: Vec<Mut<Particle>> = query.iter_mut().collect();
    bodies.sort_by_key(|p| p.id());
    let contacts = step_all(&mut bodies, &boundary);
    if contacts > 0 {
        debug!("Resolved {contacts} particle contacts");
    }
}

/// Build the startup batch: `initial_particle_count` particles at random integer
/// positions inside the box lines, with random integer velocities.
///
/// The config is validated first, so a bad value is reported instead of
/// reaching the random ranges.
pub fn initial_particles<R: Rng>(
    rng: &mut R,
    config: &SimConfig,
    boundary: &Boundary,
    counter: &mut ParticleIdCounter,
) -> SimResult<Vec<Particle>> {
    config.validate()?;
    let span = config.initial_speed_range;
    let (min, max) = (boundary.min.as_ivec2(), boundary.max.as_ivec2());

    (0..config.initial_particle_count)
        .map(|_| {
            let id = counter.next_id();
            let velocity = Vec2::new(
                rng.gen_range(-span..=span) as f32,
                rng.gen_range(-span..=span) as f32,
            );
            let position = Vec2::new(
                rng.gen_range(min.x..=max.x) as f32,
                rng.gen_range(min.y..=max.y) as f32,
            );
            Particle::new(id, position, velocity, config.initial_radius, config.friction)
        })
        .collect()
}

/// Startup system: spawn the random initial batch.
pub fn spawn_initial_particles(
    mut commands: Commands,
    config: Res<SimConfig>,
    boundary: Res<Boundary>,
    mut counter: ResMut<ParticleIdCounter>,
) {
    let mut rng = rand::thread_rng();
    match initial_particles(&mut rng, &config, &boundary, &mut counter) {
        Ok(particles) => {
            for particle in particles {
                spawn_particle(&mut commands, particle, config.colour_speed_scale);
            }
            info!("Spawned {} initial particles", config.initial_particle_count);
        }
        Err(e) => error!("Initial particles not spawned: {e}"),
    }
}
