//! Centralised physics and gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  Most are mirrored by a field of
//! [`crate::config::SimConfig`] and can be overridden from
//! `assets/physics.toml`; the window size and [`MASS_PER_RADIUS`] are fixed.
//!
//! Time is measured in frames, not seconds: velocities are in pixels/frame and
//! accelerations in pixels/frame².

// ── Window / Box ──────────────────────────────────────────────────────────────

/// Width of the window and of the box-space coordinate frame (pixels).
pub const WINDOW_WIDTH: u32 = 1080;

/// Height of the window and of the box-space coordinate frame (pixels).
pub const WINDOW_HEIGHT: u32 = 720;

/// Distance from each window edge to the box wall line.
///
/// With the default window the walls sit at x = 40 / 1040 and y = 40 / 680.
pub const BORDER_MARGIN: f32 = 40.0;

/// Drawn thickness of the box walls.
///
/// The collision offset of each wall is `(BOX_LINE_WIDTH + 1) / 2`, so the
/// default 5 px line keeps particles 3 px inside the line centre.
pub const BOX_LINE_WIDTH: f32 = 5.0;

// ── Physics: Walls ────────────────────────────────────────────────────────────

/// Downward acceleration added to airborne particles each frame.
pub const GRAVITY: f32 = 0.1;

/// Fraction of velocity kept (sign-reversed) after a wall bounce.
/// 1.0 = perfectly elastic.
pub const WALL_ELASTICITY: f32 = 1.0;

/// Speed at or below which a particle touching the floor is frozen.
///
/// Prevents endless micro-bouncing once gravity and friction have drained
/// almost all energy.
pub const REST_SPEED: f32 = 1.5;

/// Extra offset applied when clamping a particle against the top wall.
///
/// The floor clamp has no such offset.  Set to 0.0 for symmetric walls.
pub const TOP_CLAMP_NUDGE: f32 = 1.0;

// ── Physics: Particles ────────────────────────────────────────────────────────

/// Linear drag coefficient: fraction of velocity removed every frame.
pub const FRICTION: f32 = 0.01;

/// Mass of a particle per unit of radius (`mass = radius × MASS_PER_RADIUS`).
///
/// Deliberately not configurable: mass is always derived from radius.
pub const MASS_PER_RADIUS: f32 = 10.0;

/// Fraction of the penetration depth each particle of a colliding pair is
/// pushed back along the line of centres.
pub const OVERLAP_SHARE: f32 = 0.5;

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Number of particles created at startup.
pub const INITIAL_PARTICLE_COUNT: usize = 3;

/// Radius of the startup particles.
pub const INITIAL_RADIUS: f32 = 20.0;

/// Startup velocity components are integers drawn from
/// `[-INITIAL_SPEED_RANGE, INITIAL_SPEED_RANGE]`.
pub const INITIAL_SPEED_RANGE: i32 = 5;

/// Radius of particles spawned with the middle mouse button.
pub const SPAWN_RADIUS: f32 = 40.0;

/// Launch velocity is `(position − cursor) / LAUNCH_DIVISOR`.
pub const LAUNCH_DIVISOR: f32 = 10.0;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Speed at which a particle is drawn fully in the "fast" colour.
pub const COLOUR_SPEED_SCALE: f32 = 10.0;

/// Physics steps (and intended rendered frames) per second.
pub const TARGET_FPS: f64 = 60.0;

/// Path of the optional runtime tuning file.
pub const CONFIG_PATH: &str = "assets/physics.toml";
