//! Runtime physics configuration loaded from `assets/physics.toml`.
//!
//! [`SimConfig`] is a Bevy [`Resource`] that mirrors the constants in
//! [`crate::constants`].  At startup, [`load_sim_config`] reads
//! `assets/physics.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the constants you care about.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/physics.toml`.
//! 2. Restart the simulation: no recompilation required.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `SimConfig::default()`.
//!
//! The window size is not tunable here.  The window is built before any
//! startup system runs, so the box frame always uses
//! [`WINDOW_WIDTH`] × [`WINDOW_HEIGHT`].

use crate::boundary::Boundary;
use crate::constants::*;
use crate::error::{ensure_finite, ensure_in_range, ensure_positive, SimError, SimResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable physics and gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Box ──────────────────────────────────────────────────────────────────
    pub border_margin: f32,
    pub line_width: f32,

    // ── Physics: Walls ────────────────────────────────────────────────────────
    pub gravity: f32,
    pub elasticity: f32,
    pub rest_speed: f32,
    pub top_clamp_nudge: f32,

    // ── Physics: Particles ────────────────────────────────────────────────────
    pub friction: f32,

    // ── Spawning ──────────────────────────────────────────────────────────────
    pub initial_particle_count: usize,
    pub initial_radius: f32,
    pub initial_speed_range: i32,
    pub spawn_radius: f32,
    pub launch_divisor: f32,

    // ── Rendering ─────────────────────────────────────────────────────────────
    pub colour_speed_scale: f32,
    pub target_fps: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            border_margin: BORDER_MARGIN,
            line_width: BOX_LINE_WIDTH,
            gravity: GRAVITY,
            elasticity: WALL_ELASTICITY,
            rest_speed: REST_SPEED,
            top_clamp_nudge: TOP_CLAMP_NUDGE,
            friction: FRICTION,
            initial_particle_count: INITIAL_PARTICLE_COUNT,
            initial_radius: INITIAL_RADIUS,
            initial_speed_range: INITIAL_SPEED_RANGE,
            spawn_radius: SPAWN_RADIUS,
            launch_divisor: LAUNCH_DIVISOR,
            colour_speed_scale: COLOUR_SPEED_SCALE,
            target_fps: TARGET_FPS,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document (any subset of keys) and validate the result.
    pub fn from_toml_str(contents: &str) -> SimResult<Self> {
        let config: SimConfig = toml::from_str(contents).map_err(|e| SimError::ConfigParse {
            path: CONFIG_PATH.to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the physics core cannot work with.
    pub fn validate(&self) -> SimResult<()> {
        ensure_positive("initial_radius", self.initial_radius)?;
        ensure_positive("spawn_radius", self.spawn_radius)?;
        ensure_positive("colour_speed_scale", self.colour_speed_scale)?;
        ensure_positive("target_fps", self.target_fps as f32)?;
        ensure_in_range("friction", self.friction, 0.0, 1.0, false, "[0.0, 1.0)")?;
        ensure_in_range("elasticity", self.elasticity, 0.0, 1.0, true, "[0.0, 1.0]")?;
        ensure_in_range("rest_speed", self.rest_speed, 0.0, f32::MAX, true, "[0.0, ∞)")?;
        ensure_in_range("line_width", self.line_width, 0.0, f32::MAX, true, "[0.0, ∞)")?;
        ensure_finite("gravity", self.gravity)?;
        ensure_finite("top_clamp_nudge", self.top_clamp_nudge)?;
        if self.initial_speed_range < 0 {
            return Err(SimError::InvalidParameter {
                name: "initial_speed_range",
                value: self.initial_speed_range as f32,
                expected: "[0, ∞)",
            });
        }
        if self.launch_divisor == 0.0 || !self.launch_divisor.is_finite() {
            return Err(SimError::InvalidParameter {
                name: "launch_divisor",
                value: self.launch_divisor,
                expected: "finite and non-zero",
            });
        }
        // Interior must stay non-empty.
        let narrowest = WINDOW_WIDTH.min(WINDOW_HEIGHT) as f32;
        ensure_in_range(
            "border_margin",
            self.border_margin,
            0.0,
            narrowest / 2.0,
            false,
            "[0.0, half the smaller window dimension)",
        )
    }

    /// Size of the box-space frame (equal to the window size in pixels).
    pub fn box_size(&self) -> Vec2 {
        Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
    }
}

/// Startup system: attempt to load `assets/physics.toml` and overwrite the
/// `SimConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  Parse and validation errors are
/// logged but do not abort the simulation.  A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).  The derived
/// [`Boundary`] and the fixed timestep are refreshed from the final config.
pub fn load_sim_config(
    mut config: ResMut<SimConfig>,
    mut boundary: ResMut<Boundary>,
    mut fixed_time: ResMut<Time<Fixed>>,
) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match SimConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded physics config from {CONFIG_PATH}");
            }
            Err(e) => {
                error!("{e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }

    *boundary = Boundary::from_config(&config);
    fixed_time.set_timestep_hz(config.target_fps);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = SimConfig::from_toml_str("gravity = 0.25\nspawn_radius = 30.0\n")
            .expect("partial config should parse");
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.spawn_radius, 30.0);
        assert_eq!(config.friction, FRICTION);
        assert_eq!(config.top_clamp_nudge, TOP_CLAMP_NUDGE);
    }

    #[test]
    fn empty_toml_equals_default() {
        let config = SimConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = SimConfig::from_toml_str("gravity = [").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse { .. }));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = SimConfig::from_toml_str("spawn_radius = -4.0").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidParameter {
                name: "spawn_radius",
                ..
            }
        ));
    }

    #[test]
    fn friction_of_one_is_rejected() {
        assert!(SimConfig::from_toml_str("friction = 1.0").is_err());
    }

    #[test]
    fn margin_wider_than_window_is_rejected() {
        assert!(SimConfig::from_toml_str("border_margin = 400.0").is_err());
        assert!(SimConfig::from_toml_str("border_margin = -1.0").is_err());
    }

    #[test]
    fn nan_margin_is_rejected() {
        let err = SimConfig::from_toml_str("border_margin = nan").unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidParameter {
                name: "border_margin",
                ..
            }
        ));
    }

    #[test]
    fn non_finite_wall_parameters_are_rejected() {
        assert!(SimConfig::from_toml_str("gravity = nan").is_err());
        assert!(SimConfig::from_toml_str("gravity = inf").is_err());
        assert!(SimConfig::from_toml_str("top_clamp_nudge = -inf").is_err());
        // Negative gravity (pulling upward) is still a finite, valid setting.
        assert!(SimConfig::from_toml_str("gravity = -0.1").is_ok());
    }

    #[test]
    fn negative_speed_range_is_rejected() {
        assert!(SimConfig::from_toml_str("initial_speed_range = -1").is_err());
        assert!(SimConfig::from_toml_str("initial_speed_range = -2147483648").is_err());
        assert!(SimConfig::from_toml_str("initial_speed_range = 0").is_ok());
    }

    #[test]
    fn window_size_keys_are_not_part_of_the_config() {
        let config = SimConfig::from_toml_str("window_width = 400").unwrap();
        assert_eq!(config.box_size(), Vec2::new(1080.0, 720.0));
    }
}
