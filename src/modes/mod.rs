//! Game modes
//!
//! A mode is a set of seven callbacks over the play state. Every callback
//! defaults to doing nothing, so a mode only writes the ones it needs (a
//! keyboard-only mode never touches the mouse ones). Any error ends the
//! session.
//!
//! Key and mouse callbacks are never called while paused or on autoplay.

pub mod catch;
pub mod standard;

pub use catch::CatchTheBeat;
pub use standard::Standard;

use crate::error::Result;
use crate::platform::{Key, MouseButton};
use crate::renderer::Renderer;
use crate::settings::{ModeKind, Settings};
use crate::sim::Play;

pub trait GameMode {
    /// Called once before the first frame
    fn init(&mut self, _play: &mut Play) -> Result<()> {
        Ok(())
    }

    /// Called every frame unless paused, with the clock already read into
    /// the session. Frames are not evenly spaced.
    fn check(&mut self, _play: &mut Play) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, _play: &Play, _renderer: &mut dyn Renderer) -> Result<()> {
        Ok(())
    }

    fn key_pressed(&mut self, _play: &mut Play, _key: Key) -> Result<()> {
        Ok(())
    }

    fn key_released(&mut self, _play: &mut Play, _key: Key) -> Result<()> {
        Ok(())
    }

    /// The session's `mouse` holds the cursor position at the time of the
    /// event.
    fn mouse_pressed(&mut self, _play: &mut Play, _button: MouseButton) -> Result<()> {
        Ok(())
    }

    fn mouse_released(&mut self, _play: &mut Play, _button: MouseButton) -> Result<()> {
        Ok(())
    }
}

/// The active mode and its private state, picked once per session
#[derive(Debug, Clone)]
pub enum Mode {
    Standard(Standard),
    CatchTheBeat(CatchTheBeat),
}

impl Mode {
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.mode {
            ModeKind::Standard => Mode::Standard(Standard::new(settings.hit_keys.clone())),
            ModeKind::CatchTheBeat => Mode::CatchTheBeat(CatchTheBeat::new(settings.dash_key)),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Standard(_) => ModeKind::Standard,
            Mode::CatchTheBeat(_) => ModeKind::CatchTheBeat,
        }
    }

    fn as_mode(&mut self) -> &mut dyn GameMode {
        match self {
            Mode::Standard(mode) => mode,
            Mode::CatchTheBeat(mode) => mode,
        }
    }
}

impl GameMode for Mode {
    fn init(&mut self, play: &mut Play) -> Result<()> {
        self.as_mode().init(play)
    }

    fn check(&mut self, play: &mut Play) -> Result<()> {
        self.as_mode().check(play)
    }

    fn draw(&mut self, play: &Play, renderer: &mut dyn Renderer) -> Result<()> {
        self.as_mode().draw(play, renderer)
    }

    fn key_pressed(&mut self, play: &mut Play, key: Key) -> Result<()> {
        self.as_mode().key_pressed(play, key)
    }

    fn key_released(&mut self, play: &mut Play, key: Key) -> Result<()> {
        self.as_mode().key_released(play, key)
    }

    fn mouse_pressed(&mut self, play: &mut Play, button: MouseButton) -> Result<()> {
        self.as_mode().mouse_pressed(play, button)
    }

    fn mouse_released(&mut self, play: &mut Play, button: MouseButton) -> Result<()> {
        self.as_mode().mouse_released(play, button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(Mode::from_settings(&settings).kind(), ModeKind::Standard);
        settings.mode = ModeKind::CatchTheBeat;
        assert_eq!(Mode::from_settings(&settings).kind(), ModeKind::CatchTheBeat);
    }
}
