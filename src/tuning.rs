//! Data-driven game balance
//!
//! Every number the simulation uses lives here, defaulting to `consts`.
//! Hosts may load overrides from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::input::KeyBindings;
use crate::sim::maze::grid_points;

/// Game tuning parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width (canvas width on the web)
    pub width: f32,
    /// Playfield height (canvas height on the web)
    pub height: f32,

    pub player_speed: f32,
    pub player_radius: f32,

    pub adversary_speed: f32,
    pub adversary_radius: f32,
    /// Chaser spawn point (x, y)
    pub adversary_start: (f32, f32),

    /// Pickup radius, also the collection distance
    pub pickup_radius: f32,
    pub pickup_spacing: f32,
    pub pickup_margin: f32,
    pub pickup_score: u64,

    pub wall_thickness: f32,
    pub starting_lives: u8,

    pub bindings: KeyBindings,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_radius: ENTITY_RADIUS,

            adversary_speed: ADVERSARY_SPEED,
            adversary_radius: ENTITY_RADIUS,
            adversary_start: ADVERSARY_START,

            pickup_radius: PICKUP_RADIUS,
            pickup_spacing: PICKUP_SPACING,
            pickup_margin: PICKUP_MARGIN,
            pickup_score: PICKUP_SCORE,

            wall_thickness: WALL_THICKNESS,
            starting_lives: STARTING_LIVES,

            bindings: KeyBindings::default(),
        }
    }
}

impl Tuning {
    /// Default tuning for a playfield of the given size
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning for {}x{} playfield", tuning.width, tuning.height);
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON (for writing a starter tuning file)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every dimension is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |side: f32| positive(side) && side <= MAX_PLAYFIELD_SIDE;
        if !(side_ok(self.width) && side_ok(self.height)) {
            return Err(ConfigError::InvalidPlayfield {
                width: self.width,
                height: self.height,
                max: MAX_PLAYFIELD_SIDE,
            });
        }

        let checks = [
            ("player_speed", self.player_speed),
            ("player_radius", self.player_radius),
            ("adversary_speed", self.adversary_speed),
            ("adversary_radius", self.adversary_radius),
            ("pickup_radius", self.pickup_radius),
            ("pickup_spacing", self.pickup_spacing),
            ("wall_thickness", self.wall_thickness),
        ];
        for (field, value) in checks {
            if !positive(value) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.pickup_spacing < MIN_PICKUP_SPACING {
            return Err(ConfigError::SpacingTooSmall {
                value: self.pickup_spacing,
                min: MIN_PICKUP_SPACING,
            });
        }
        let count = grid_points(self.width, self.pickup_margin, self.pickup_spacing)
            .saturating_mul(grid_points(self.height, self.pickup_margin, self.pickup_spacing));
        if count > MAX_PICKUPS {
            return Err(ConfigError::TooManyPickups {
                count,
                max: MAX_PICKUPS,
            });
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        self.bindings.validate()
    }

    /// Player spawn point: the playfield center
    pub fn player_start(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.width, 800.0);
        assert_eq!(tuning.height, 600.0);
        assert_eq!(tuning.player_speed, 5.0);
        assert_eq!(tuning.adversary_speed, 3.0);
        assert_eq!(tuning.player_radius, 20.0);
        assert_eq!(tuning.starting_lives, 3);
        assert_eq!(tuning.pickup_score, 10);
        assert_eq!(tuning.player_start(), (400.0, 300.0));
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "width": 1024, "adversary_speed": 2.5 }"#).unwrap();
        assert_eq!(tuning.width, 1024.0);
        assert_eq!(tuning.height, 600.0);
        assert_eq!(tuning.adversary_speed, 2.5);
        assert_eq!(tuning.bindings, KeyBindings::default());
    }

    #[test]
    fn test_rejects_bad_playfield() {
        let err = Tuning::from_json(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayfield { .. }));
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = Tuning::from_json(r#"{ "player_speed": -1 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "player_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = Tuning::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoLives));
        assert!(Tuning::from_json(r#"{ "starting_lives": 1 }"#).is_ok());
    }

    #[test]
    fn test_rejects_degenerate_spacing() {
        let err = Tuning::from_json(r#"{ "pickup_spacing": 1e-30 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::SpacingTooSmall { .. }));

        let err = Tuning::from_json(r#"{ "pickup_spacing": 0.001 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::SpacingTooSmall { .. }));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        // 16000 / 1 squared is far past the pickup cap
        let err = Tuning::from_json(
            r#"{ "width": 16000, "height": 16000, "pickup_spacing": 1 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::TooManyPickups { .. }));
    }

    #[test]
    fn test_rejects_huge_playfield() {
        let err = Tuning::from_json(r#"{ "width": 1e30 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlayfield { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::load("/nonexistent/maze-chase-tuning.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_bindings() {
        let mut tuning = Tuning::default();
        tuning.bindings.left.push("a".to_string());
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
