//! Display-only particle state, derived from the physics record each frame.
//!
//! Nothing here feeds back into physics.

use crate::config::SimConfig;
use crate::particle::Particle;
use bevy::color::Mix;
use bevy::prelude::*;

/// Colour of a particle at rest.
pub const SLOW_COLOUR: Srgba = Srgba::rgb(0.0, 0.0, 1.0);

/// Colour of a particle at or above the colour speed scale.
pub const FAST_COLOUR: Srgba = Srgba::rgb(1.0, 0.0, 0.0);

/// Speed-derived draw colour.  Recomputed every frame, never authoritative.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ParticleColor(pub Color);

/// Set by a left click on the particle, cleared by launch or deselect.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selected(pub bool);

/// Clamp with an open-interval pass-through.
///
/// Values strictly between `min` and `max` are returned unchanged, values
/// `>= max` map to `max`, and everything else (including `n == min` and NaN)
/// maps to `min`.
pub fn clamp(n: f32, min: f32, max: f32) -> f32 {
    if min < n && n < max {
        n
    } else if n >= max {
        max
    } else {
        min
    }
}

/// Blend from [`SLOW_COLOUR`] to [`FAST_COLOUR`] component-wise by
/// `clamp(speed / scale, 0, 1)`.
pub fn speed_color(speed: f32, scale: f32) -> Color {
    let factor = clamp(speed / scale, 0.0, 1.0);
    Color::Srgba(SLOW_COLOUR.mix(&FAST_COLOUR, factor))
}

/// Refresh every particle's colour from its current speed.
pub fn refresh_colour_system(
    mut query: Query<(&Particle, &mut ParticleColor)>,
    config: Res<SimConfig>,
) {
    for (particle, mut colour) in query.iter_mut() {
        colour.0 = speed_color(particle.speed(), config.colour_speed_scale);
    }
}
