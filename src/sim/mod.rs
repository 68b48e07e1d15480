//! Headless simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One `tick` per frame, driven only by an explicit `TickInput`
//! - No global input, no clocks
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod maze;
pub mod state;
pub mod tick;

pub use collision::{blocked, circles_touch, try_move, within};
pub use entity::{Adversary, Body, Player};
pub use maze::{Pickup, Wall, build_pickups, build_walls, grid_points};
pub use state::{GameEvent, GamePhase, GameState, Outcome};
pub use tick::{TickInput, tick};
