//! Play state and core judgment types
//!
//! The beatmap (timeline + difficulty) is fixed at load; the session is what
//! changes every tick and every input event.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hit::HitState;
use crate::beatmap::Beatmap;
use crate::consts::*;
use crate::error::{Error, Result};

/// Per-beatmap timing and distance tolerances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Difficulty {
    /// How long before/after its time an object is shown and clickable (ms)
    pub approach_time: f64,
    /// Hit circle radius (playfield units)
    pub circle_radius: f32,
    /// Max timing error for a good hit (ms)
    pub leniency: f64,
    /// How far the cursor may stray from a slider ball
    pub slider_tolerance: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            approach_time: DEFAULT_APPROACH_TIME,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            leniency: DEFAULT_LENIENCY,
            slider_tolerance: DEFAULT_SLIDER_TOLERANCE,
        }
    }
}

impl Difficulty {
    /// Check the loader contract: all tolerances non-negative, and the hit
    /// window no wider than the approach window so nothing unjudged falls
    /// behind the timeline cursor.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("approach_time", self.approach_time),
            ("circle_radius", f64::from(self.circle_radius)),
            ("leniency", self.leniency),
            ("slider_tolerance", f64::from(self.slider_tolerance)),
        ];
        for (name, value) in fields {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::InvalidBeatmap(format!("{name} must be >= 0, got {value}")));
            }
        }
        if self.leniency > self.approach_time {
            return Err(Error::InvalidBeatmap(format!(
                "leniency ({}ms) exceeds approach time ({}ms)",
                self.leniency, self.approach_time
            )));
        }
        Ok(())
    }
}

/// Something the driving loop must act on after a tick or input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play the hit sample
    HitSound,
    /// Hit object `index` entered `state`
    Judged { index: usize, state: HitState },
}

/// Mutable state of one play session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Audio clock reading for this tick (ms)
    pub current_timestamp: f64,
    /// Clock reading at the previous tick
    pub previous_timestamp: f64,
    /// Judgments are generated instead of read from input
    pub autoplay: bool,
    pub paused: bool,
    /// Cursor position in playfield coordinates
    pub mouse: Vec2,
    /// Slider or hold being followed (timeline index)
    active_hold: Option<usize>,
    /// Pending events, drained by the driving loop
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(autoplay: bool) -> Self {
        Self {
            autoplay,
            ..Default::default()
        }
    }

    #[inline]
    pub fn active_hold(&self) -> Option<usize> {
        self.active_hold
    }

    #[inline]
    pub(crate) fn set_active_hold(&mut self, index: Option<usize>) {
        self.active_hold = index;
    }

    #[inline]
    pub(crate) fn take_active_hold(&mut self) -> Option<usize> {
        self.active_hold.take()
    }

    #[inline]
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events queued since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

/// Beatmap plus session: everything the judgment engine reads and writes
#[derive(Debug, Clone)]
pub struct Play {
    pub beatmap: Beatmap,
    pub session: Session,
}

impl Play {
    pub fn new(beatmap: Beatmap, autoplay: bool) -> Self {
        Self {
            beatmap,
            session: Session::new(autoplay),
        }
    }

    /// Judge hit object `index` and queue the matching event.
    /// Returns false if the transition was refused.
    pub(crate) fn judge(&mut self, index: usize, state: HitState) -> bool {
        let Some(hit) = self.beatmap.timeline.get_mut(index) else {
            return false;
        };
        if !hit.judge(state) {
            return false;
        }
        self.session.push_event(GameEvent::Judged { index, state });
        true
    }

    #[inline]
    pub(crate) fn hit_sound(&mut self) {
        self.session.push_event(GameEvent::HitSound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_difficulty_is_valid() {
        assert!(Difficulty::default().validate().is_ok());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let difficulty = Difficulty {
            circle_radius: -1.0,
            ..Default::default()
        };
        assert!(difficulty.validate().is_err());
    }

    #[test]
    fn test_leniency_wider_than_approach_rejected() {
        let difficulty = Difficulty {
            approach_time: 100.0,
            leniency: 150.0,
            ..Default::default()
        };
        assert!(difficulty.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let difficulty: Difficulty = serde_json::from_str(r#"{"leniency": 80.0}"#).unwrap();
        assert_eq!(difficulty.leniency, 80.0);
        assert_eq!(difficulty.approach_time, DEFAULT_APPROACH_TIME);
    }
}
