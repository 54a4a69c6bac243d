//! Simulation-specific error types.
//!
//! Systems propagate errors through these types rather than panicking, then log
//! them and carry on with the previous state (e.g. compiled-default config, or a
//! skipped spawn).
//!
//! ## Usage
//!
//! ```rust
//! use bouncebox::error::SimResult;
//! use bouncebox::particle::Particle;
//! use bevy::math::Vec2;
//!
//! fn make() -> SimResult<Particle> {
//!     let p = Particle::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, 20.0, 0.01)?;
//!     Ok(p)
//! }
//! # assert!(make().is_ok());
//! ```

use std::fmt;

/// Top-level error enum for the particle box.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A physical or configuration parameter is outside its valid range.
    InvalidParameter {
        /// Name of the parameter (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// The tuning file exists but could not be parsed.
    ConfigParse {
        /// Path of the offending file.
        path: String,
        /// Parser message.
        reason: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter {
                name,
                value,
                expected,
            } => write!(f, "parameter '{}' = {} is outside {}", name, value, expected),
            SimError::ConfigParse { path, reason } => {
                write!(f, "failed to parse {}: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

/// Returns an error unless `value` is finite (any sign).
pub fn ensure_finite(name: &'static str, value: f32) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            expected: "a finite number",
        })
    }
}

/// Returns an error unless `low <= value < high` (or `<= high` when `inclusive`).
pub fn ensure_in_range(
    name: &'static str,
    value: f32,
    low: f32,
    high: f32,
    inclusive: bool,
    expected: &'static str,
) -> SimResult<()> {
    let upper_ok = if inclusive { value <= high } else { value < high };
    if value >= low && upper_ok {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name,
            value,
            expected,
        })
    }
}
