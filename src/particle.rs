//! Particle physics record, per-frame integrator, and spawn helper.
//!
//! [`Particle`] holds only physical state.  Display state (colour, selection)
//! lives in separate components from [`crate::presentation`] so the physics
//! core never depends on rendering.

use crate::constants::MASS_PER_RADIUS;
use crate::error::{ensure_positive, SimResult};
use crate::presentation::{speed_color, ParticleColor, Selected};
use bevy::prelude::*;

/// Physical state of one circular particle.
///
/// Positions are in box space (origin at the window's top-left, y grows
/// downward).  Radius is private so that mass, derived from it, can never drift.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Recomputed from velocity on every [`Particle::integrate`] call.
    pub acceleration: Vec2,
    radius: f32,
    pub friction: f32,
}

impl Particle {
    /// Build a particle, rejecting a non-positive or non-finite radius.
    pub fn new(
        id: u32,
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        friction: f32,
    ) -> SimResult<Self> {
        ensure_positive("radius", radius)?;
        Ok(Self {
            id,
            position,
            velocity,
            acceleration: Vec2::ZERO,
            radius,
            friction,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Mass is always `radius × MASS_PER_RADIUS`.
    pub fn mass(&self) -> f32 {
        self.radius * MASS_PER_RADIUS
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// One semi-implicit Euler step with linear drag.
    ///
    /// Acceleration is `-velocity × friction`; velocity integrates first, then
    /// position integrates with the new velocity.  One call = one frame.
    pub fn integrate(&mut self) {
        self.acceleration = -self.velocity * self.friction;
        self.velocity += self.acceleration;
        self.position += self.velocity;
    }

    /// Fling the particle away from `target`: velocity becomes
    /// `(position − target) / divisor`.
    pub fn launch(&mut self, target: Vec2, divisor: f32) {
        self.velocity = (self.position - target) / divisor;
    }

    /// Axis-aligned bounding square of the drawn circle, used for click tests.
    pub fn hit_region(&self) -> Rect {
        Rect::from_center_half_size(self.position, Vec2::splat(self.radius))
    }
}

/// Monotonic particle id source.  Incremented before each assignment, so the
/// first particle gets id 1.  Ids are never reused, even after removal.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParticleIdCounter(pub u32);

impl ParticleIdCounter {
    pub fn next_id(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// Spawn a particle entity together with its presentation components.
///
/// The initial colour uses `colour_scale`, which should be the configured
/// `SimConfig::colour_speed_scale` so the first frame matches later refreshes.
pub fn spawn_particle(commands: &mut Commands, particle: Particle, colour_scale: f32) -> Entity {
    commands
        .spawn((
            particle,
            ParticleColor(speed_color(particle.speed(), colour_scale)),
            Selected(false),
        ))
        .id()
}
