//! Maze Chase - A maze arcade game with a pursuing chaser
//!
//! Core modules:
//! - `sim`: Headless simulation (maze, movement, collisions, game state)
//! - `input`: Key-state mapping and per-frame input snapshots
//! - `renderer`: Drawing capability trait and frame snapshots
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors

pub mod error;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use input::{KeyBindings, KeyState};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Maze cell size; entity sizes derive from it
    pub const CELL_SIZE: f32 = 40.0;
    /// Player and chaser radius
    pub const ENTITY_RADIUS: f32 = CELL_SIZE / 2.0;

    /// Player speed (pixels per frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Chaser speed (pixels per frame)
    pub const ADVERSARY_SPEED: f32 = 3.0;
    /// Chaser spawn point
    pub const ADVERSARY_START: (f32, f32) = (100.0, 100.0);

    /// Pickup radius, also the collection distance
    pub const PICKUP_RADIUS: f32 = 8.0;
    /// Distance between neighbouring pickups
    pub const PICKUP_SPACING: f32 = 40.0;
    /// Distance from the playfield edge to the first pickup
    pub const PICKUP_MARGIN: f32 = 50.0;
    pub const PICKUP_SCORE: u64 = 10;

    pub const STARTING_LIVES: u8 = 3;

    /// Border wall thickness
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Smallest accepted pickup spacing
    pub const MIN_PICKUP_SPACING: f32 = 1.0;
    /// Largest pickup grid a tuning may produce
    pub const MAX_PICKUPS: usize = 100_000;

    /// Largest accepted playfield side
    pub const MAX_PLAYFIELD_SIDE: f32 = 16_384.0;
    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
}
