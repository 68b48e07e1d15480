//! Per-frame simulation tick
//!
//! Frame order: steer, move player, chase and move the chaser, collect
//! pickups, resolve chaser contact, then check for a cleared maze.

use super::collision::{circles_touch, within};
use super::entity::Body;
use super::state::{GameEvent, GamePhase, GameState};

/// Directions held this frame (frozen from the host's key state)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the game by one frame
///
/// A finished game is frozen: nothing moves and no events are produced.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    state.frame += 1;

    state.player.steer(input);
    state.player.step(&state.walls);

    state.adversary.chase(state.player.pos);
    state.adversary.step(&state.walls);

    collect_pickups(state, &mut events);
    resolve_contact(state, &mut events);

    if state.pickups.is_empty() && !state.is_over() {
        state.phase = GamePhase::Won;
        log::info!("Maze cleared with {} points", state.score);
        events.push(GameEvent::Won { score: state.score });
    }

    events
}

/// Remove every pickup the player is touching
fn collect_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let threshold = state.tuning.pickup_radius;
    // Reverse scan so removal doesn't shift unvisited indices
    for i in (0..state.pickups.len()).rev() {
        let pos = state.pickups[i].pos;
        if within(state.player.pos, pos, threshold) {
            state.pickups.remove(i);
            state.score += state.tuning.pickup_score;
            log::debug!("Pickup at {pos} collected, score {}", state.score);
            events.push(GameEvent::PickupCollected {
                pos,
                score: state.score,
            });
        }
    }
}

/// Chaser caught the player: lose a life, then respawn or end the game
fn resolve_contact(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let (player, adversary) = (&state.player, &state.adversary);
    if !circles_touch(player.pos(), player.radius(), adversary.pos(), adversary.radius()) {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost { lives: state.lives });

    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        log::info!("Caught with no lives left, final score {}", state.score);
        events.push(GameEvent::Lost { score: state.score });
    } else {
        log::info!("Caught! {} lives left", state.lives);
        state.reset_positions();
    }
}
