//! Immediate-mode gizmo drawing of particles and the box.
//!
//! Gizmos are immediate-mode: every shape is re-issued each frame, so nothing
//! here owns entities.  All positions arrive in box space and are mapped to
//! world space through [`BoxSpace`].

use crate::boundary::Boundary;
use crate::config::SimConfig;
use crate::graphics::BoxSpace;
use crate::input::CursorPosition;
use crate::particle::Particle;
use crate::presentation::{ParticleColor, Selected};
use bevy::prelude::*;

/// Colour of the aim line from a selected particle to the cursor.
const AIM_LINE_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Colour of the box walls.
const WALL_COLOUR: Color = Color::WHITE;

/// Draw every particle as a circle outline in its speed colour, plus an aim
/// line to the cursor for each selected particle.
pub fn particle_rendering_system(
    mut gizmos: Gizmos,
    query: Query<(&Particle, &ParticleColor, &Selected)>,
    cursor: Res<CursorPosition>,
    config: Res<SimConfig>,
) {
    let space = BoxSpace::from_config(&config);
    for (particle, colour, selected) in query.iter() {
        let centre = space.to_world(particle.position);
        gizmos.circle_2d(centre, particle.radius(), colour.0);

        if let (true, Some(target)) = (selected.0, cursor.0) {
            gizmos.line_2d(centre, space.to_world(target), AIM_LINE_COLOUR);
        }
    }
}

/// Draw the four box walls.
pub fn boundary_rendering_system(
    mut gizmos: Gizmos,
    boundary: Res<Boundary>,
    config: Res<SimConfig>,
) {
    let space = BoxSpace::from_config(&config);
    for (start, end) in boundary.segments() {
        gizmos.line_2d(space.to_world(start), space.to_world(end), WALL_COLOUR);
    }
}
