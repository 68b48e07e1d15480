//! Maze layout: static walls and the pickup grid
//!
//! Generated once from the playfield size and never changed afterwards
//! (pickups are only ever removed).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Inner wall columns (x) and rows (y), absolute coordinates
const INNER_WALL_COLUMNS: [f32; 3] = [200.0, 400.0, 600.0];
const INNER_WALL_ROWS: [f32; 2] = [100.0, 300.0];
const INNER_WALL_WIDTH: f32 = 20.0;
const INNER_WALL_HEIGHT: f32 = 200.0;

/// An axis-aligned wall rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Does the square of half-size `radius` around `center` overlap this wall?
    ///
    /// Edges that merely touch do not overlap.
    #[inline]
    pub fn overlaps_square(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.x
            && center.x - radius < self.x + self.width
            && center.y + radius > self.y
            && center.y - radius < self.y + self.height
    }

    /// Is the point strictly inside the wall?
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }
}

/// A collectible point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
}

impl Pickup {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

/// Build the border walls plus the fixed inner walls
pub fn build_walls(width: f32, height: f32, thickness: f32) -> Vec<Wall> {
    let mut walls = vec![
        // Top, bottom, left, right
        Wall::new(0.0, 0.0, width, thickness),
        Wall::new(0.0, height - thickness, width, thickness),
        Wall::new(0.0, 0.0, thickness, height),
        Wall::new(width - thickness, 0.0, thickness, height),
    ];

    for &y in &INNER_WALL_ROWS {
        for &x in &INNER_WALL_COLUMNS {
            walls.push(Wall::new(x, y, INNER_WALL_WIDTH, INNER_WALL_HEIGHT));
        }
    }

    walls
}

/// Number of grid points along one side: `margin + k * spacing < side - margin`
pub fn grid_points(side: f32, margin: f32, spacing: f32) -> usize {
    let span = side - 2.0 * margin;
    if span.is_nan() || span <= 0.0 || spacing.is_nan() || spacing <= 0.0 {
        return 0;
    }
    // Saturates on absurd ratios; `Tuning::validate` caps the total
    (span / spacing).ceil() as usize
}

/// Lay out the pickup grid, skipping points inside a wall
///
/// Points go column by column (x-major). Callers are expected to pass a
/// validated tuning; the grid size is not capped here.
pub fn build_pickups(
    width: f32,
    height: f32,
    walls: &[Wall],
    spacing: f32,
    margin: f32,
) -> Vec<Pickup> {
    let columns = grid_points(width, margin, spacing);
    let rows = grid_points(height, margin, spacing);
    let mut pickups = Vec::new();

    for col in 0..columns {
        let x = margin + col as f32 * spacing;
        for row in 0..rows {
            let point = Vec2::new(x, margin + row as f32 * spacing);
            if !walls.iter().any(|w| w.contains_point(point)) {
                pickups.push(Pickup { pos: point });
            }
        }
    }

    pickups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_walls() {
        let walls = build_walls(800.0, 600.0, 20.0);
        assert_eq!(walls.len(), 10);
        assert_eq!(walls[1], Wall::new(0.0, 580.0, 800.0, 20.0));
        assert_eq!(walls[3], Wall::new(780.0, 0.0, 20.0, 600.0));
        assert!(walls.contains(&Wall::new(400.0, 300.0, 20.0, 200.0)));
    }

    #[test]
    fn test_overlap_is_strict() {
        let wall = Wall::new(100.0, 100.0, 20.0, 20.0);
        // Touching the left edge exactly
        assert!(!wall.overlaps_square(Vec2::new(80.0, 110.0), 20.0));
        // Nudged inside
        assert!(wall.overlaps_square(Vec2::new(80.5, 110.0), 20.0));
        // Overlap on x only
        assert!(!wall.overlaps_square(Vec2::new(110.0, 200.0), 20.0));
    }

    #[test]
    fn test_contains_point_excludes_edges() {
        let wall = Wall::new(0.0, 0.0, 10.0, 10.0);
        assert!(wall.contains_point(Vec2::new(5.0, 5.0)));
        assert!(!wall.contains_point(Vec2::new(0.0, 5.0)));
        assert!(!wall.contains_point(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_pickup_grid_default_playfield() {
        let walls = build_walls(800.0, 600.0, 20.0);
        let pickups = build_pickups(800.0, 600.0, &walls, 40.0, 50.0);

        // x: 50..=730 (18 columns), y: 50..=530 (13 rows); columns 210, 410
        // and 610 lose the ten rows covered by the inner walls
        assert_eq!(pickups.len(), 18 * 13 - 3 * 10);
        assert!(!pickups.iter().any(|p| p.pos == Vec2::new(210.0, 130.0)));
        assert!(pickups.iter().any(|p| p.pos == Vec2::new(210.0, 90.0)));
        assert_eq!(pickups[0].pos, Vec2::new(50.0, 50.0));
        assert_eq!(pickups[1].pos, Vec2::new(50.0, 90.0));
    }

    #[test]
    fn test_pickups_skip_wall_interior() {
        let walls = vec![Wall::new(40.0, 40.0, 20.0, 20.0)];
        let pickups = build_pickups(200.0, 200.0, &walls, 40.0, 50.0);
        assert!(!pickups.iter().any(|p| p.pos == Vec2::new(50.0, 50.0)));
        assert!(pickups.iter().any(|p| p.pos == Vec2::new(90.0, 50.0)));
    }

    #[test]
    fn test_grid_points() {
        // 50, 90, ..., 730
        assert_eq!(grid_points(800.0, 50.0, 40.0), 18);
        // Exact fit: the point landing on `side - margin` is excluded
        assert_eq!(grid_points(200.0, 50.0, 25.0), 4);
        assert_eq!(grid_points(90.0, 50.0, 40.0), 0);
        assert_eq!(grid_points(800.0, 50.0, 0.0), 0);
        assert_eq!(grid_points(800.0, f32::NAN, 40.0), 0);
    }

    #[test]
    fn test_huge_playfield_grid_terminates() {
        // f32 accumulation would stall here; indexed columns do not
        let pickups = build_pickups(1.0e8, 100.0, &[], 2.0e7, 10.0);
        // Five columns, one row (80 / 2e7 rounds up to a single row)
        assert_eq!(pickups.len(), 5);
        assert_eq!(pickups.last().map(|p| p.pos.x), Some(10.0 + 4.0 * 2.0e7));
    }

    #[test]
    fn test_tiny_playfield_has_no_pickups() {
        let walls = build_walls(90.0, 90.0, 20.0);
        assert!(build_pickups(90.0, 90.0, &walls, 40.0, 50.0).is_empty());
    }
}
