//! Error types for galaxy construction and configuration.
//!
//! The per-tick step is total and never returns an error; everything that can
//! fail happens before the first `advance`: parsing a config, validating its
//! constants, and seeding stars around a reference black hole.

use std::fmt;

/// Top-level error enum for the galaxy engine.
#[derive(Debug)]
pub enum GalaxyError {
    /// The JSON config string could not be parsed.
    Config(serde_json::Error),

    /// A tuning constant is outside the range the step can work with.
    InvalidParameter {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// Stars were requested but there is no black hole to orbit.
    NoReferenceBlackHole {
        /// Number of stars that could not be placed.
        requested: usize,
    },
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalaxyError::Config(err) => write!(f, "invalid galaxy config: {}", err),
            GalaxyError::InvalidParameter { name, value, expected } => write!(
                f,
                "parameter '{}' = {} is out of range (expected {})",
                name, value, expected
            ),
            GalaxyError::NoReferenceBlackHole { requested } => write!(
                f,
                "cannot create {} stars: no black hole to seed orbital velocities from",
                requested
            ),
        }
    }
}

impl std::error::Error for GalaxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalaxyError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GalaxyError {
    fn from(err: serde_json::Error) -> Self {
        GalaxyError::Config(err)
    }
}
