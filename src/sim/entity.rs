//! The player and the chaser
//!
//! Both move at a fixed speed and are stopped dead by walls (see
//! [`super::collision::try_move`]). The player follows input; the chaser
//! heads straight for the player every frame with no pathfinding.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::try_move;
use super::maze::Wall;
use super::tick::TickInput;

/// Anything with a circular body
pub trait Body {
    fn pos(&self) -> Vec2;
    fn radius(&self) -> f32;
}

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Unit direction, or zero before the first key press
    pub direction: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            direction: Vec2::ZERO,
            radius,
            speed,
        }
    }

    /// Pick a direction from input (left > right > up > down)
    ///
    /// With nothing pressed the previous direction is kept, so the player
    /// keeps going until a wall stops it.
    pub fn steer(&mut self, input: &TickInput) {
        if input.left {
            self.direction = Vec2::NEG_X;
        } else if input.right {
            self.direction = Vec2::X;
        } else if input.up {
            self.direction = Vec2::NEG_Y;
        } else if input.down {
            self.direction = Vec2::Y;
        }
    }

    /// Advance one frame; returns false if a wall blocked the move
    pub fn step(&mut self, walls: &[Wall]) -> bool {
        match try_move(self.pos, self.direction * self.speed, self.radius, walls) {
            Some(next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }

    /// Back to the spawn point; the direction is kept
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// The pursuing chaser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    pub pos: Vec2,
    /// Velocity per frame; its length equals `speed` once the chase starts
    pub direction: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Adversary {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            direction: Vec2::ZERO,
            radius,
            speed,
        }
    }

    /// Aim straight at `target`
    ///
    /// When already on top of the target the previous direction is kept.
    pub fn chase(&mut self, target: Vec2) {
        let delta = target - self.pos;
        let distance = delta.length();
        if distance > 0.0 {
            self.direction = delta / distance * self.speed;
        }
    }

    /// Advance one frame; returns false if a wall blocked the move
    pub fn step(&mut self, walls: &[Wall]) -> bool {
        match try_move(self.pos, self.direction, self.radius, walls) {
            Some(next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
    }
}

impl Body for Adversary {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(left: bool, right: bool, up: bool, down: bool) -> TickInput {
        TickInput {
            left,
            right,
            up,
            down,
        }
    }

    #[test]
    fn test_steer_priority() {
        let mut player = Player::new(Vec2::ZERO, 20.0, 5.0);

        player.steer(&input(true, true, true, true));
        assert_eq!(player.direction, Vec2::NEG_X);

        player.steer(&input(false, true, true, true));
        assert_eq!(player.direction, Vec2::X);

        player.steer(&input(false, false, true, true));
        assert_eq!(player.direction, Vec2::NEG_Y);

        player.steer(&input(false, false, false, true));
        assert_eq!(player.direction, Vec2::Y);
    }

    #[test]
    fn test_direction_persists_without_input() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 20.0, 5.0);
        player.steer(&input(false, true, false, false));
        player.steer(&TickInput::default());
        assert_eq!(player.direction, Vec2::X);

        assert!(player.step(&[]));
        assert!(player.step(&[]));
        assert_eq!(player.pos, Vec2::new(110.0, 100.0));
    }

    #[test]
    fn test_idle_player_stays_put() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 20.0, 5.0);
        player.steer(&TickInput::default());
        player.step(&[]);
        assert_eq!(player.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_player_blocked_by_wall() {
        let walls = [Wall::new(124.0, 0.0, 20.0, 200.0)];
        let mut player = Player::new(Vec2::new(100.0, 100.0), 20.0, 5.0);
        player.steer(&input(false, true, false, false));
        assert!(!player.step(&walls));
        assert_eq!(player.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_chase_toward_player() {
        let mut ghost = Adversary::new(Vec2::new(100.0, 100.0), 20.0, 3.0);
        ghost.chase(Vec2::new(400.0, 300.0));
        assert!(ghost.step(&[]));

        let theta = 200.0f32.atan2(300.0);
        let expected = Vec2::new(100.0 + 3.0 * theta.cos(), 100.0 + 3.0 * theta.sin());
        assert!(ghost.pos.distance(expected) < 1e-4);
    }

    #[test]
    fn test_chase_zero_distance_keeps_direction() {
        let mut ghost = Adversary::new(Vec2::new(50.0, 50.0), 20.0, 3.0);
        ghost.chase(Vec2::new(50.0, 60.0));
        let before = ghost.direction;

        ghost.chase(Vec2::new(50.0, 50.0));
        assert_eq!(ghost.direction, before);
        assert!(ghost.direction.is_finite());
    }

    #[test]
    fn test_chase_from_rest_at_target_does_not_move() {
        let mut ghost = Adversary::new(Vec2::new(50.0, 50.0), 20.0, 3.0);
        ghost.chase(Vec2::new(50.0, 50.0));
        ghost.step(&[]);
        assert_eq!(ghost.pos, Vec2::new(50.0, 50.0));
    }

    proptest! {
        #[test]
        fn prop_chase_speed_is_constant(
            gx in -500.0f32..500.0,
            gy in -500.0f32..500.0,
            tx in -500.0f32..500.0,
            ty in -500.0f32..500.0,
            speed in 0.5f32..10.0,
        ) {
            let target = Vec2::new(tx, ty);
            let mut ghost = Adversary::new(Vec2::new(gx, gy), 20.0, speed);
            prop_assume!(ghost.pos.distance(target) > 1e-3);
            ghost.chase(target);
            prop_assert!((ghost.direction.length() - speed).abs() < 1e-3);
            prop_assert!(ghost.direction.dot(target - ghost.pos) > 0.0);
        }
    }
}
