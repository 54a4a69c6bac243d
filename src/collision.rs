//! Pairwise circle–circle collision: positional correction followed by a 2-D
//! elastic impulse exchange along the line of centres.

use crate::constants::OVERLAP_SHARE;
use crate::particle::Particle;
use bevy::prelude::*;

/// Centres closer than this are treated as coincident.
const COINCIDENT_EPSILON: f32 = 1e-6;

/// Resolve a possible collision between `a` and `b`.
///
/// Returns `true` when the pair was touching or overlapping (`d <= r_a + r_b`)
/// and was resolved.  Both particles are pushed apart by the same distance so
/// they end up exactly touching, then the normal velocity components are
/// exchanged with the 1-D elastic formula while tangential components are kept.
///
/// Coincident centres have no line of centres; the pair is then separated
/// along +x (`a` moves toward +x, `b` toward −x).
pub fn resolve_pair(a: &mut Particle, b: &mut Particle) -> bool {
    let delta = a.position - b.position;
    let distance = delta.length();
    let reach = a.radius() + b.radius();
    if distance > reach {
        return false;
    }

    // Unit vector from b toward a.
    let separation = if distance > COINCIDENT_EPSILON {
        delta / distance
    } else {
        Vec2::X
    };

    // Negative while overlapping.
    let overlap = (distance - reach) * OVERLAP_SHARE;
    a.position -= separation * overlap;
    b.position += separation * overlap;

    // Unit normal from a toward b, and its left-hand tangent.
    let normal = (b.position - a.position).normalize_or(-separation);
    let tangent = normal.perp();

    let tangent_a = a.velocity.dot(tangent);
    let tangent_b = b.velocity.dot(tangent);
    let normal_a = a.velocity.dot(normal);
    let normal_b = b.velocity.dot(normal);

    let (mass_a, mass_b) = (a.mass(), b.mass());
    let total = mass_a + mass_b;
    let new_normal_a = (normal_a * (mass_a - mass_b) + 2.0 * mass_b * normal_b) / total;
    let new_normal_b = (normal_b * (mass_b - mass_a) + 2.0 * mass_a * normal_a) / total;

    a.velocity = tangent * tangent_a + normal * new_normal_a;
    b.velocity = tangent * tangent_b + normal * new_normal_b;
    true
}
