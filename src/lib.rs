//! Interactive 2D particle box.
//!
//! Circles with mass, velocity, and linear drag collide elastically with each
//! other and with the walls of a box under light gravity.  The physics core
//! ([`particle`], [`boundary`], [`collision`]) is plain Rust over `Vec2`; the
//! remaining modules wire it into Bevy for input, pacing, and drawing.

pub mod boundary;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod input;
pub mod particle;
pub mod presentation;
pub mod rendering;
pub mod simulation;
