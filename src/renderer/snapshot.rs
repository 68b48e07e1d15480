//! Read-only view of a frame for hosts that draw outside Rust

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GameState, Outcome, Pickup, Wall};

/// A circular entity as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot<'a> {
    pub width: f32,
    pub height: f32,
    pub walls: &'a [Wall],
    pub pickups: &'a [Pickup],
    pub pickup_radius: f32,
    pub player: EntityView,
    pub adversary: EntityView,
    pub score: u64,
    pub lives: u8,
    pub over: bool,
    pub outcome: Option<Outcome>,
}

impl<'a> FrameSnapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            width: state.width(),
            height: state.height(),
            walls: &state.walls,
            pickups: &state.pickups,
            pickup_radius: state.tuning.pickup_radius,
            player: EntityView {
                pos: state.player.pos,
                radius: state.player.radius,
            },
            adversary: EntityView {
                pos: state.adversary.pos,
                radius: state.adversary.radius,
            },
            score: state.score,
            lives: state.lives,
            over: state.is_over(),
            outcome: state.outcome(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
