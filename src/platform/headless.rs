//! Simulated audio clock and scripted input
//!
//! Used by the native runner and by tests to drive whole plays without a
//! sound card or a window.

use std::collections::VecDeque;

use glam::Vec2;

use super::{AudioPlayback, InputEvent, InputSource, MouseButton, Sample};
use crate::beatmap::Beatmap;

/// Clock that moves a fixed step every time it is read
#[derive(Debug, Clone)]
pub struct SimulatedAudio {
    now: f64,
    /// Value returned by the latest read
    last_read: f64,
    step: f64,
    length: f64,
    paused: bool,
    played: Vec<(f64, Sample)>,
}

impl SimulatedAudio {
    /// `step` ms per read, finished once past `length` ms
    pub fn new(step: f64, length: f64) -> Self {
        Self {
            now: 0.0,
            last_read: 0.0,
            step,
            length,
            paused: false,
            played: Vec::new(),
        }
    }

    /// Every sample played so far with the clock time it was requested at
    pub fn played(&self) -> &[(f64, Sample)] {
        &self.played
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl AudioPlayback for SimulatedAudio {
    fn current_timestamp(&mut self) -> f64 {
        self.last_read = self.now;
        if !self.paused {
            self.now += self.step;
        }
        self.last_read
    }

    fn play(&mut self, sample: Sample) {
        self.played.push((self.last_read, sample));
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn finished(&self) -> bool {
        self.now > self.length
    }
}

/// Input for one frame
#[derive(Debug, Clone, Default)]
pub struct ScriptFrame {
    pub mouse: Vec2,
    pub events: Vec<InputEvent>,
}

/// Replays a fixed list of frames, one per poll
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ScriptFrame>,
    mouse: Vec2,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = ScriptFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            mouse: Vec2::ZERO,
        }
    }

    /// A player that clicks every object on time and follows every slider
    /// ball, assuming the clock advances `frame_ms` per frame from 0.
    pub fn perfect(beatmap: &Beatmap, frame_ms: f64) -> Self {
        let frame_count = (beatmap.length() / frame_ms).ceil() as usize + 2;
        let frame_at = |time: f64| ((time / frame_ms).ceil().max(0.0) as usize).min(frame_count - 1);
        let mut mouse: Vec<Option<Vec2>> = vec![None; frame_count];
        let mut events: Vec<Vec<InputEvent>> = vec![Vec::new(); frame_count];

        for hit in beatmap.timeline.hits() {
            let start = frame_at(hit.time());
            mouse[start] = Some(hit.position());
            events[start].push(InputEvent::MousePressed(MouseButton::Left));

            let end = match hit.slider_body() {
                Some(slider) if hit.is_holdable() => {
                    let end = frame_at(hit.end_time());
                    for (frame, slot) in mouse.iter_mut().enumerate().take(end + 1).skip(start + 1) {
                        let t = (frame as f64 * frame_ms - hit.time()) / slider.duration;
                        *slot = Some(slider.path.at(t));
                    }
                    end
                }
                _ => start,
            };
            events[end].push(InputEvent::MouseReleased(MouseButton::Left));
        }

        let mut last = Vec2::ZERO;
        let frames = mouse.into_iter().zip(events).map(|(pos, events)| {
            last = pos.unwrap_or(last);
            ScriptFrame { mouse: last, events }
        });
        Self::new(frames.collect::<Vec<_>>())
    }

    pub fn is_done(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.frames.pop_front() {
            Some(frame) => {
                self.mouse = frame.mouse;
                frame.events
            }
            None => Vec::new(),
        }
    }

    /// Position of the frame about to be polled
    fn mouse_position(&self) -> Vec2 {
        self.frames.front().map_or(self.mouse, |frame| frame.mouse)
    }
}
