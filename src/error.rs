//! Configuration-layer error types.
//!
//! The per-tick game loop is total — every reachable input has a defined
//! result, degenerate vector normalization included — so gameplay code never
//! returns errors.  What can fail is the ambient startup work: reading and
//! parsing `assets/game.toml` and validating the values it carries.  Those
//! paths report through [`ConfigError`] and the loader degrades to compiled
//! defaults instead of crashing.

use std::fmt;

/// Errors produced while loading the runtime configuration overlay.
#[derive(Debug)]
pub enum ConfigError {
    /// The TOML file exists but could not be parsed.
    Parse {
        /// Path that was being read.
        path: &'static str,
        /// Parser diagnostic.
        message: String,
    },

    /// A configured value is outside its safe operating range.
    OutOfRange {
        /// Name of the field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        accepted: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { path, message } => {
                write!(f, "failed to parse {path}: {message}")
            }
            ConfigError::OutOfRange {
                name,
                value,
                accepted,
            } => write!(f, "config field '{name}' = {value} is outside {accepted}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Convenience alias for config-loading results.
pub type ConfigResult<T> = Result<T, ConfigError>;
