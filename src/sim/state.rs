//! Game state and core simulation types
//!
//! One aggregate owns the maze, both entities and the scoreboard. The
//! per-frame update lives in [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Adversary, Player};
use super::maze::{Pickup, Wall, build_pickups, build_walls};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every pickup collected
    Won,
    /// Out of lives
    Lost,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Something that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected { pos: Vec2, score: u64 },
    LifeLost { lives: u8 },
    Won { score: u64 },
    Lost { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub adversary: Adversary,
    /// Static maze walls
    pub walls: Vec<Wall>,
    /// Remaining pickups (only ever shrinks)
    pub pickups: Vec<Pickup>,
    pub score: u64,
    pub lives: u8,
    pub phase: GamePhase,
    /// Frames simulated while playing
    pub frame: u64,
    pub player_start: Vec2,
    pub adversary_start: Vec2,
    /// Balance values this game was built from
    pub tuning: Tuning,
}

impl GameState {
    /// Build a fresh game for the tuning's playfield
    pub fn new(tuning: &Tuning) -> Self {
        let walls = build_walls(tuning.width, tuning.height, tuning.wall_thickness);
        let pickups = build_pickups(
            tuning.width,
            tuning.height,
            &walls,
            tuning.pickup_spacing,
            tuning.pickup_margin,
        );
        let state = Self::with_layout(tuning, walls, pickups);

        log::info!(
            "New game: {}x{} playfield, {} walls, {} pickups",
            tuning.width,
            tuning.height,
            state.walls.len(),
            state.pickups.len()
        );

        state
    }

    /// Build a game over a custom maze (spawn points still come from the tuning)
    pub fn with_layout(tuning: &Tuning, walls: Vec<Wall>, pickups: Vec<Pickup>) -> Self {
        let (px, py) = tuning.player_start();
        let (ax, ay) = tuning.adversary_start;
        let player_start = Vec2::new(px, py);
        let adversary_start = Vec2::new(ax, ay);

        Self {
            player: Player::new(player_start, tuning.player_radius, tuning.player_speed),
            adversary: Adversary::new(
                adversary_start,
                tuning.adversary_radius,
                tuning.adversary_speed,
            ),
            walls,
            pickups,
            score: 0,
            lives: tuning.starting_lives,
            phase: GamePhase::Playing,
            frame: 0,
            player_start,
            adversary_start,
            tuning: tuning.clone(),
        }
    }

    /// True once the game is won or lost; never reverts
    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Won => Some(Outcome::Won),
            GamePhase::Lost => Some(Outcome::Lost),
        }
    }

    /// Return both entities to their spawn points (the maze is untouched)
    pub fn reset_positions(&mut self) {
        self.player.reset(self.player_start);
        self.adversary.reset(self.adversary_start);
    }

    pub fn width(&self) -> f32 {
        self.tuning.width
    }

    pub fn height(&self) -> f32 {
        self.tuning.height
    }
}
