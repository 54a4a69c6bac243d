//! Box walls: clamping, bouncing, resting on the floor, and gravity.
//!
//! The box is axis-aligned in box space (y grows downward, so `max.y` is the
//! floor).  Each wall's collision offset is half the drawn line thickness plus
//! the particle radius.

use crate::config::SimConfig;
use crate::particle::Particle;
use bevy::prelude::*;

/// The simulation box and its wall response parameters.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    /// Left (x) and top (y) wall lines.
    pub min: Vec2,
    /// Right (x) and floor (y) wall lines.
    pub max: Vec2,
    pub line_width: f32,
    pub elasticity: f32,
    pub rest_speed: f32,
    pub gravity: f32,
    /// Extra offset on the top-wall clamp only.
    pub top_clamp_nudge: f32,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl Boundary {
    pub fn from_config(config: &SimConfig) -> Self {
        let size = config.box_size();
        Self {
            min: Vec2::splat(config.border_margin),
            max: size - Vec2::splat(config.border_margin),
            line_width: config.line_width,
            elasticity: config.elasticity,
            rest_speed: config.rest_speed,
            gravity: config.gravity,
            top_clamp_nudge: config.top_clamp_nudge,
        }
    }

    /// Half the drawn wall thickness, rounded up to whole pixels for odd widths.
    pub fn half_width(&self) -> f32 {
        (self.line_width + 1.0) / 2.0
    }

    /// Apply wall response to one particle.
    ///
    /// The x and y axes are checked independently, so a corner hit bounces both.
    /// Within an axis the first matching wall wins.  Gravity is applied only when
    /// the particle touches neither the top wall nor the floor this call.
    pub fn resolve(&self, p: &mut Particle) {
        let inset = p.radius() + self.half_width();

        if p.position.x <= self.min.x + inset {
            p.position.x = self.min.x + inset;
            p.velocity.x *= -self.elasticity;
        } else if p.position.x >= self.max.x - inset {
            p.position.x = self.max.x - inset;
            p.velocity.x *= -self.elasticity;
        }

        if p.position.y <= self.min.y + inset {
            p.position.y = self.min.y + inset + self.top_clamp_nudge;
            p.velocity.y *= -self.elasticity;
        } else if p.position.y >= self.max.y - inset {
            p.position.y = self.max.y - inset;
            if p.speed() <= self.rest_speed {
                p.velocity = Vec2::ZERO;
            } else {
                p.velocity.y *= -self.elasticity;
            }
        } else {
            p.velocity.y += self.gravity;
        }
    }

    /// The four wall segments, in box space: top, floor, left, right.
    pub fn segments(&self) -> [(Vec2, Vec2); 4] {
        let (min, max) = (self.min, self.max);
        [
            (min, Vec2::new(max.x, min.y)),
            (Vec2::new(min.x, max.y), max),
            (min, Vec2::new(min.x, max.y)),
            (Vec2::new(max.x, min.y), max),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default box: walls at 40 / 1040 (x) and 40 / 680 (y), half width 3.
    fn boundary() -> Boundary {
        Boundary::default()
    }

    fn particle_at(position: Vec2, velocity: Vec2) -> Particle {
        Particle::new(1, position, velocity, 20.0, 0.01).unwrap()
    }

    #[test]
    fn default_walls_match_margin() {
        let b = boundary();
        assert_eq!(b.min, Vec2::new(40.0, 40.0));
        assert_eq!(b.max, Vec2::new(1040.0, 680.0));
        assert_eq!(b.half_width(), 3.0);
    }

    #[test]
    fn left_wall_bounce_reflects_and_clamps() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(63.0, 300.0), Vec2::new(-3.0, 0.0));
        b.resolve(&mut p);
        assert_eq!(p.velocity.x, 3.0);
        assert_eq!(p.position.x, 63.0);
    }

    #[test]
    fn past_right_wall_is_pulled_back() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(1030.0, 300.0), Vec2::new(4.0, 0.0));
        b.resolve(&mut p);
        assert_eq!(p.position.x, 1017.0);
        assert_eq!(p.velocity.x, -4.0);
    }

    #[test]
    fn elasticity_scales_the_bounce() {
        let mut b = boundary();
        b.elasticity = 0.5;
        let mut p = particle_at(Vec2::new(50.0, 300.0), Vec2::new(-4.0, 0.0));
        b.resolve(&mut p);
        assert_eq!(p.velocity.x, 2.0);
    }

    #[test]
    fn top_wall_clamp_carries_nudge() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(300.0, 50.0), Vec2::new(0.0, -6.0));
        b.resolve(&mut p);
        assert_eq!(p.position.y, 64.0);
        assert_eq!(p.velocity.y, 6.0);
    }

    #[test]
    fn slow_particle_on_floor_settles() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(300.0, 660.0), Vec2::new(0.6, 0.8));
        b.resolve(&mut p);
        assert_eq!(p.position.y, 657.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn fast_particle_on_floor_bounces() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(300.0, 660.0), Vec2::new(0.0, 4.0));
        b.resolve(&mut p);
        assert_eq!(p.position.y, 657.0);
        assert_eq!(p.velocity, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn airborne_particle_gains_gravity() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(300.0, 300.0), Vec2::new(1.0, 2.0));
        b.resolve(&mut p);
        assert_eq!(p.position, Vec2::new(300.0, 300.0));
        assert!((p.velocity.y - 2.1).abs() < 1e-6);
        assert_eq!(p.velocity.x, 1.0);
    }

    #[test]
    fn side_wall_contact_still_gets_gravity() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(50.0, 300.0), Vec2::new(-2.0, 0.0));
        b.resolve(&mut p);
        assert_eq!(p.velocity.x, 2.0);
        assert!((p.velocity.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn corner_bounces_both_axes_without_gravity() {
        let b = boundary();
        let mut p = particle_at(Vec2::new(1035.0, 675.0), Vec2::new(3.0, 5.0));
        b.resolve(&mut p);
        assert_eq!(p.position, Vec2::new(1017.0, 657.0));
        assert_eq!(p.velocity, Vec2::new(-3.0, -5.0));
    }

    #[test]
    fn segments_outline_the_box() {
        let segments = boundary().segments();
        assert_eq!(segments[0], (Vec2::new(40.0, 40.0), Vec2::new(1040.0, 40.0)));
        assert_eq!(segments[1], (Vec2::new(40.0, 680.0), Vec2::new(1040.0, 680.0)));
    }
}
