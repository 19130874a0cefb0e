//! Driving loop
//!
//! One [`Game::frame`] per iteration: read the clock, let the mode check it,
//! route input, draw, then play whatever hit sounds the judgments queued.
//! Everything runs on one thread in that order, so no locking is needed.

use crate::beatmap::Beatmap;
use crate::error::Result;
use crate::modes::{GameMode, Mode};
use crate::platform::{AudioPlayback, InputEvent, InputSource, Sample};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, Play, Tally};

pub struct Game<A, I, R> {
    play: Play,
    mode: Mode,
    audio: A,
    input: I,
    renderer: R,
    /// Checked between frames
    stop: bool,
    frames: u64,
}

impl<A, I, R> Game<A, I, R>
where
    A: AudioPlayback,
    I: InputSource,
    R: Renderer,
{
    /// Start a session: pick the mode and run its `init`
    pub fn new(beatmap: Beatmap, settings: &Settings, audio: A, input: I, renderer: R) -> Result<Self> {
        let mut play = Play::new(beatmap, settings.autoplay);
        let mut mode = Mode::from_settings(settings);
        mode.init(&mut play)?;
        log::info!(
            "Session started ({}, autoplay: {})",
            mode.kind().as_str(),
            settings.autoplay
        );
        Ok(Self {
            play,
            mode,
            audio,
            input,
            renderer,
            stop: false,
            frames: 0,
        })
    }

    /// Run a single loop iteration
    pub fn frame(&mut self) -> Result<()> {
        // Position of the frame about to be polled; input events use it too
        self.play.session.mouse = self.input.mouse_position();
        if !self.play.session.paused {
            self.play.session.current_timestamp = self.audio.current_timestamp();
            self.mode.check(&mut self.play)?;
        }

        for event in self.input.poll_events() {
            self.handle_event(event)?;
        }

        self.mode.draw(&self.play, &mut self.renderer)?;
        self.flush_events();

        let session = &mut self.play.session;
        session.previous_timestamp = session.current_timestamp;
        self.frames += 1;
        Ok(())
    }

    /// Loop until stopped, the song ends, or a mode fails
    pub fn run(&mut self) -> Result<Tally> {
        while !self.stop && !self.audio.finished() {
            if let Err(e) = self.frame() {
                log::error!("Stopping after frame {}: {}", self.frames, e);
                return Err(e);
            }
        }
        let tally = self.play.beatmap.timeline.tally();
        log::info!(
            "Session over after {} frames: {} good, {} missed, {} left",
            self.frames,
            tally.good,
            tally.missed,
            tally.initial + tally.sliding
        );
        Ok(tally)
    }

    fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::TogglePause => {
                self.toggle_pause();
                return Ok(());
            }
            InputEvent::Quit => {
                self.stop();
                return Ok(());
            }
            _ => {}
        }
        if self.play.session.paused || self.play.session.autoplay {
            return Ok(());
        }

        let play = &mut self.play;
        match event {
            InputEvent::KeyPressed(key) => self.mode.key_pressed(play, key),
            InputEvent::KeyReleased(key) => self.mode.key_released(play, key),
            InputEvent::MousePressed(button) => self.mode.mouse_pressed(play, button),
            InputEvent::MouseReleased(button) => self.mode.mouse_released(play, button),
            InputEvent::TogglePause | InputEvent::Quit => Ok(()),
        }
    }

    /// Play queued hit sounds, log judgments
    fn flush_events(&mut self) {
        for event in self.play.session.drain_events() {
            match event {
                GameEvent::HitSound => self.audio.play(Sample::Hit),
                GameEvent::Judged { index, state } => {
                    log::debug!("hit {} -> {:?}", index, state);
                }
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        let session = &mut self.play.session;
        session.paused = !session.paused;
        if session.paused {
            self.audio.pause();
            log::info!("Paused at {:.0}ms", session.current_timestamp);
        } else {
            self.audio.resume();
            log::info!("Resumed");
        }
    }

    pub fn stop(&mut self) {
        self.stop = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stop
    }

    pub fn is_paused(&self) -> bool {
        self.play.session.paused
    }

    pub fn play(&self) -> &Play {
        &self.play
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
