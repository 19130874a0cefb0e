//! Hitline - real-time judgment core for an osu!-style rhythm game
//!
//! Core modules:
//! - `sim`: Deterministic judgment (timeline, hit objects, timing windows)
//! - `modes`: Game mode rule sets plugged into one driving loop
//! - `game`: Driving loop (clock, pause/stop, input routing, hit sounds)
//! - `beatmap`: Validated beatmap container and demo generator
//! - `platform`: Audio clock and input collaborators
//! - `renderer`: Drawing collaborator

pub mod beatmap;
pub mod error;
pub mod game;
pub mod modes;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use beatmap::Beatmap;
pub use error::{Error, Result};
pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (osu! pixels)
    pub const PLAYFIELD_WIDTH: f32 = 512.0;
    pub const PLAYFIELD_HEIGHT: f32 = 384.0;

    /// Difficulty defaults, roughly AR9 / CS4 / OD8
    pub const DEFAULT_APPROACH_TIME: f64 = 600.0;
    pub const DEFAULT_CIRCLE_RADIUS: f32 = 36.5;
    pub const DEFAULT_LENIENCY: f64 = 50.0;
    /// Slider follow circle is about twice the hit circle
    pub const DEFAULT_SLIDER_TOLERANCE: f32 = 2.0 * DEFAULT_CIRCLE_RADIUS;

    /// Headless frame step (ms), ~240 Hz
    pub const DEFAULT_FRAME_MS: f64 = 1000.0 / 240.0;
}

/// Convert polar (r, theta) to cartesian (x, y) around `center`
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}
