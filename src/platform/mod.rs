//! Platform abstraction layer
//!
//! The judgment core only sees these traits:
//! - Audio clock and sample playback
//! - Discrete input events and the cursor position
//!
//! `headless` provides simulated versions for tests and the native runner.

pub mod headless;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Samples the core asks the audio side to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Hit normal: circle hit, slider start/tick/end
    Hit,
}

/// Audio playback plus the clock the whole game is judged against
pub trait AudioPlayback {
    /// Song position (ms). Non-decreasing while playing. Takes `&mut self`
    /// so simulated clocks can advance on read.
    fn current_timestamp(&mut self) -> f64;

    /// Fire and forget
    fn play(&mut self, sample: Sample);

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    /// The song is over
    fn finished(&self) -> bool {
        false
    }
}

/// Keyboard keys the game modes care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Left,
    Right,
    LeftShift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Already filtered input (no key repeats)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    KeyReleased(Key),
    MousePressed(MouseButton),
    MouseReleased(MouseButton),
    /// Handled by the driving loop, never reaches a mode
    TogglePause,
    Quit,
}

/// Source of input events and cursor position
pub trait InputSource {
    /// Events since the last poll, in order
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Cursor in playfield coordinates
    fn mouse_position(&self) -> Vec2;
}
