//! Ordered hit objects with a forward-only cursor
//!
//! The cursor marks the earliest object that may still matter at the current
//! clock time. Everything before it is settled and never scanned again, which
//! keeps per-tick work proportional to what is near "now" rather than to the
//! size of the beatmap.

use std::ops::Range;

use serde::Serialize;

use super::hit::{HitObject, HitState};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Timeline {
    hits: Vec<HitObject>,
    cursor: usize,
}

/// Number of hit objects in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub initial: usize,
    pub sliding: usize,
    pub good: usize,
    pub missed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.initial + self.sliding + self.good + self.missed
    }

    /// Fraction of judged objects that were hit, 1.0 when nothing was judged
    pub fn accuracy(&self) -> f64 {
        let judged = self.good + self.missed;
        if judged == 0 {
            1.0
        } else {
            self.good as f64 / judged as f64
        }
    }
}

impl Timeline {
    /// Build a timeline. Objects must already be sorted by time.
    pub fn new(hits: Vec<HitObject>) -> Result<Self> {
        if let Some(i) = hits.windows(2).position(|w| w[1].time() < w[0].time()) {
            return Err(Error::InvalidBeatmap(format!(
                "hit object {} at {}ms comes before its predecessor at {}ms",
                i + 1,
                hits[i + 1].time(),
                hits[i].time()
            )));
        }
        Ok(Self { hits, cursor: 0 })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Index of the earliest object still under evaluation
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&HitObject> {
        self.hits.get(index)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut HitObject> {
        self.hits.get_mut(index)
    }

    /// All objects, settled ones included
    pub fn hits(&self) -> &[HitObject] {
        &self.hits
    }

    /// Indices from the cursor to the end
    #[inline]
    pub fn window(&self) -> Range<usize> {
        self.cursor..self.hits.len()
    }

    /// Objects from the cursor onwards, with their indices
    pub fn iter_from_cursor(&self) -> impl Iterator<Item = (usize, &HitObject)> + '_ {
        self.hits.iter().enumerate().skip(self.cursor)
    }

    /// Move the cursor past every object whose `end_time + approach_time`
    /// is already behind `now`. Never moves backwards.
    pub fn advance_cursor(&mut self, now: f64, approach_time: f64) {
        while let Some(hit) = self.hits.get(self.cursor) {
            if hit.end_time() + approach_time >= now {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Objects on screen at `now`: from the cursor up to
    /// `now + approach_time`
    pub fn visible(&self, now: f64, approach_time: f64) -> impl Iterator<Item = &HitObject> + '_ {
        self.iter_from_cursor()
            .map(|(_, hit)| hit)
            .take_while(move |hit| hit.time() <= now + approach_time)
    }

    pub fn tally(&self) -> Tally {
        self.hits.iter().fold(Tally::default(), |mut tally, hit| {
            match hit.state() {
                HitState::Initial => tally.initial += 1,
                HitState::Sliding => tally.sliding += 1,
                HitState::Good => tally.good += 1,
                HitState::Missed => tally.missed += 1,
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::path::Path;
    use glam::Vec2;

    fn circles(times: &[f64]) -> Timeline {
        let hits = times
            .iter()
            .map(|&t| HitObject::circle(t, Vec2::ZERO))
            .collect();
        Timeline::new(hits).unwrap()
    }

    #[test]
    fn test_rejects_unsorted() {
        let hits = vec![
            HitObject::circle(200.0, Vec2::ZERO),
            HitObject::circle(100.0, Vec2::ZERO),
        ];
        assert!(matches!(Timeline::new(hits), Err(Error::InvalidBeatmap(_))));
    }

    #[test]
    fn test_equal_times_are_sorted() {
        assert!(Timeline::new(vec![
            HitObject::circle(100.0, Vec2::ZERO),
            HitObject::circle(100.0, Vec2::ONE),
        ])
        .is_ok());
    }

    #[test]
    fn test_advance_cursor() {
        let mut timeline = circles(&[100.0, 200.0, 300.0]);
        timeline.advance_cursor(350.0, 100.0);
        // 100 + 100 < 350, 200 + 100 < 350, 300 + 100 >= 350
        assert_eq!(timeline.cursor(), 2);
        timeline.advance_cursor(0.0, 100.0);
        assert_eq!(timeline.cursor(), 2);
        timeline.advance_cursor(350.0, 100.0);
        assert_eq!(timeline.cursor(), 2);
        timeline.advance_cursor(10_000.0, 100.0);
        assert_eq!(timeline.cursor(), 3);
        assert_eq!(timeline.iter_from_cursor().count(), 0);
    }

    #[test]
    fn test_cursor_waits_for_slider_end() {
        let path = Path::Linear {
            start: Vec2::ZERO,
            end: Vec2::new(100.0, 0.0),
        };
        let mut timeline = Timeline::new(vec![
            HitObject::slider(100.0, path, 1000.0),
            HitObject::circle(200.0, Vec2::ZERO),
        ])
        .unwrap();
        timeline.advance_cursor(1000.0, 100.0);
        assert_eq!(timeline.cursor(), 0);
    }

    #[test]
    fn test_iter_from_cursor_restarts_at_cursor() {
        let mut timeline = circles(&[100.0, 200.0, 300.0]);
        timeline.advance_cursor(250.0, 100.0);
        let first: Vec<usize> = timeline.iter_from_cursor().map(|(i, _)| i).collect();
        let again: Vec<usize> = timeline.iter_from_cursor().map(|(i, _)| i).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(first, again);
    }

    #[test]
    fn test_visible_window() {
        let timeline = circles(&[100.0, 200.0, 900.0]);
        assert_eq!(timeline.visible(0.0, 250.0).count(), 2);
    }

    #[test]
    fn test_tally() {
        let mut timeline = circles(&[100.0, 200.0, 300.0]);
        timeline.get_mut(0).unwrap().judge(HitState::Good);
        timeline.get_mut(1).unwrap().judge(HitState::Missed);
        let tally = timeline.tally();
        assert_eq!(tally.good, 1);
        assert_eq!(tally.missed, 1);
        assert_eq!(tally.initial, 1);
        assert_eq!(tally.total(), 3);
        assert!((tally.accuracy() - 0.5).abs() < 1e-9);
    }
}
