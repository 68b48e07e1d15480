//! Configuration errors
//!
//! The simulation itself never fails; only loading and validating a
//! tuning file can.

/// Errors raised while loading or validating a [`crate::Tuning`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Tuning file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid playfield {width}x{height}: dimensions must be positive and at most {max}")]
    InvalidPlayfield { width: f32, height: f32, max: f32 },

    #[error("Invalid value for `{field}`: {value} (must be positive and finite)")]
    NonPositive { field: &'static str, value: f32 },

    #[error("Pickup spacing {value} is below the minimum of {min}")]
    SpacingTooSmall { value: f32, min: f32 },

    #[error("Pickup grid of {count} points exceeds the maximum of {max}")]
    TooManyPickups { count: usize, max: usize },

    #[error("Starting lives must be at least 1")]
    NoLives,

    #[error("No key bound to `{0}`")]
    MissingBinding(&'static str),
}
