//! Hit objects and their judgment state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::path::Path;

bitflags::bitflags! {
    /// Hit object type tags, same bit layout as the osu! file format.
    ///
    /// Tags combine: a slider that starts a combo is `SLIDER | NEW_COMBO`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HitKind: u8 {
        const CIRCLE = 1 << 0;
        const SLIDER = 1 << 1;
        const NEW_COMBO = 1 << 2;
        const SPINNER = 1 << 3;
        const HOLD = 1 << 7;
    }
}

/// Judgment state of a hit object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HitState {
    /// Not judged yet
    #[default]
    Initial,
    /// Slider/hold currently being followed
    Sliding,
    Good,
    Missed,
}

impl HitState {
    /// `Good` and `Missed` never change again
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, HitState::Good | HitState::Missed)
    }

    /// Whether `self -> next` is an allowed transition
    pub fn can_become(self, next: HitState) -> bool {
        match (self, next) {
            (from, _) if from.is_terminal() => false,
            (HitState::Initial, HitState::Sliding | HitState::Good | HitState::Missed) => true,
            (HitState::Sliding, HitState::Good | HitState::Missed) => true,
            _ => false,
        }
    }
}

/// Body of a slider or hold note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub path: Path,
    /// Time to travel the whole path (ms)
    pub duration: f64,
}

/// A timed, positioned target
///
/// Timing, kind and geometry are fixed once loaded; only the state changes,
/// and only through the judgment engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitObject {
    time: f64,
    kind: HitKind,
    position: Vec2,
    #[serde(default)]
    slider: Option<Slider>,
    #[serde(skip)]
    state: HitState,
}

impl HitObject {
    /// A plain hit circle
    pub fn circle(time: f64, position: Vec2) -> Self {
        Self {
            time,
            kind: HitKind::CIRCLE,
            position,
            slider: None,
            state: HitState::Initial,
        }
    }

    /// A slider starting at the path's first point
    pub fn slider(time: f64, path: Path, duration: f64) -> Self {
        Self {
            time,
            kind: HitKind::SLIDER,
            position: path.start(),
            slider: Some(Slider { path, duration }),
            state: HitState::Initial,
        }
    }

    /// Add type tags, e.g. `NEW_COMBO`
    pub fn with_kind(mut self, extra: HitKind) -> Self {
        self.kind |= extra;
        self
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// `time` plus the slider duration, if any
    #[inline]
    pub fn end_time(&self) -> f64 {
        match &self.slider {
            Some(slider) => self.time + slider.duration,
            None => self.time,
        }
    }

    #[inline]
    pub fn kind(&self) -> HitKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn slider_body(&self) -> Option<&Slider> {
        self.slider.as_ref()
    }

    #[inline]
    pub fn state(&self) -> HitState {
        self.state
    }

    /// Has a slider/hold body that can actually be followed
    pub fn is_holdable(&self) -> bool {
        self.kind.intersects(HitKind::SLIDER | HitKind::HOLD)
            && self
                .slider
                .as_ref()
                .is_some_and(|s| s.duration > 0.0 && s.path.is_valid())
    }

    /// Apply a judgment. Refuses (and returns false) anything that isn't an
    /// allowed forward transition.
    pub(crate) fn judge(&mut self, next: HitState) -> bool {
        if !self.state.can_become(next) {
            log::warn!(
                "refused transition {:?} -> {:?} for hit at {}ms",
                self.state,
                next,
                self.time
            );
            return false;
        }
        self.state = next;
        true
    }
}
