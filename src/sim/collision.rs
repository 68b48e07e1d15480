//! Collision tests against the static maze
//!
//! Entities are circles, but against walls they are treated as their
//! bounding square. A move that would overlap any wall is rejected on both
//! axes at once: there is no sliding along the free axis, so an entity can
//! catch on a corner while moving diagonally.

use glam::Vec2;

use super::maze::Wall;

/// Would a square of half-size `radius` at `pos` overlap any wall?
#[inline]
pub fn blocked(pos: Vec2, radius: f32, walls: &[Wall]) -> bool {
    walls.iter().any(|w| w.overlaps_square(pos, radius))
}

/// Attempt to move from `pos` by `delta`
///
/// Returns the new position, or `None` if the destination overlaps a wall.
#[inline]
pub fn try_move(pos: Vec2, delta: Vec2, radius: f32, walls: &[Wall]) -> Option<Vec2> {
    let next = pos + delta;
    if blocked(next, radius, walls) {
        None
    } else {
        Some(next)
    }
}

/// Circle contact: centers closer than the sum of the radii
#[inline]
pub fn circles_touch(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Point proximity: strictly closer than `threshold`
#[inline]
pub fn within(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance(b) < threshold
}
