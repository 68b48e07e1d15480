//! Rendering module
//!
//! The simulation never draws. Hosts implement [`Renderer`] (Canvas2D on the
//! web, [`CommandRecorder`] in tests) and call [`draw`] once per frame.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod snapshot;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use commands::{CommandRecorder, DrawCommand};
pub use snapshot::FrameSnapshot;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
}

/// CSS `rgba(...)` string for a color
pub fn css_color(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Drawing capability
pub trait Renderer {
    /// Fill the whole playfield
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Text anchored at its baseline-left corner
    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: Color);
}

/// Colors and font sizes used by [`draw`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub wall: Color,
    pub pickup: Color,
    pub player: Color,
    pub adversary: Color,
    pub text: Color,
    pub hud_font_px: f32,
    pub banner_font_px: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BLACK,
            wall: colors::BLUE,
            pickup: colors::WHITE,
            player: colors::GREEN,
            adversary: colors::RED,
            text: colors::WHITE,
            hud_font_px: 36.0,
            banner_font_px: 48.0,
        }
    }
}

/// Draw one frame of the game
pub fn draw<R: Renderer>(state: &GameState, palette: &Palette, renderer: &mut R) {
    let width = state.width();
    let height = state.height();

    renderer.clear(palette.background);

    for wall in &state.walls {
        renderer.fill_rect(
            Vec2::new(wall.x, wall.y),
            Vec2::new(wall.width, wall.height),
            palette.wall,
        );
    }

    let pickup_radius = state.tuning.pickup_radius;
    for pickup in &state.pickups {
        renderer.fill_circle(pickup.pos, pickup_radius, palette.pickup);
    }

    renderer.fill_circle(state.player.pos, state.player.radius, palette.player);
    renderer.fill_circle(state.adversary.pos, state.adversary.radius, palette.adversary);

    renderer.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(10.0, 40.0),
        palette.hud_font_px,
        palette.text,
    );
    renderer.fill_text(
        &format!("Lives: {}", state.lives),
        Vec2::new(width - 100.0, 40.0),
        palette.hud_font_px,
        palette.text,
    );

    if state.is_over() {
        renderer.fill_text(
            "GAME OVER",
            Vec2::new(width / 2.0 - 100.0, height / 2.0),
            palette.banner_font_px,
            palette.text,
        );
    }
}
