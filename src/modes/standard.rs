//! osu! standard: click circles, follow sliders

use crate::error::Result;
use crate::platform::{Key, MouseButton};
use crate::renderer::Renderer;
use crate::sim::{Play, press, release, tick_hold, tick_timeline};

use super::GameMode;

#[derive(Debug, Clone)]
pub struct Standard {
    /// Keys that click
    hit_keys: Vec<Key>,
}

impl Standard {
    pub fn new(hit_keys: Vec<Key>) -> Self {
        Self { hit_keys }
    }

    fn is_hit_key(&self, key: Key) -> bool {
        self.hit_keys.contains(&key)
    }
}

fn hit(play: &mut Play) {
    let (mouse, now) = (play.session.mouse, play.session.current_timestamp);
    press(play, mouse, now);
}

fn release_hit(play: &mut Play) {
    let now = play.session.current_timestamp;
    release(play, now);
}

impl GameMode for Standard {
    fn init(&mut self, play: &mut Play) -> Result<()> {
        log::info!(
            "osu! standard mode, {} hit objects",
            play.beatmap.timeline.len()
        );
        Ok(())
    }

    fn check(&mut self, play: &mut Play) -> Result<()> {
        let session = &play.session;
        let (now, previous, mouse, autoplay) = (
            session.current_timestamp,
            session.previous_timestamp,
            session.mouse,
            session.autoplay,
        );
        tick_hold(play, now, previous, mouse, autoplay);
        tick_timeline(play, now, autoplay);
        Ok(())
    }

    fn draw(&mut self, play: &Play, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.draw(&play.beatmap.timeline, play.session.current_timestamp)
    }

    fn key_pressed(&mut self, play: &mut Play, key: Key) -> Result<()> {
        if self.is_hit_key(key) {
            hit(play);
        }
        Ok(())
    }

    fn key_released(&mut self, play: &mut Play, key: Key) -> Result<()> {
        if self.is_hit_key(key) {
            release_hit(play);
        }
        Ok(())
    }

    fn mouse_pressed(&mut self, play: &mut Play, _button: MouseButton) -> Result<()> {
        hit(play);
        Ok(())
    }

    fn mouse_released(&mut self, play: &mut Play, _button: MouseButton) -> Result<()> {
        release_hit(play);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beatmap::Beatmap;
    use crate::sim::{Difficulty, HitObject, HitState, Path};
    use glam::Vec2;

    fn play() -> Play {
        let hits = vec![
            HitObject::circle(1000.0, Vec2::new(50.0, 50.0)),
            HitObject::slider(
                2000.0,
                Path::Linear {
                    start: Vec2::new(100.0, 100.0),
                    end: Vec2::new(300.0, 100.0),
                },
                1000.0,
            ),
        ];
        Play::new(Beatmap::new(Difficulty::default(), hits).unwrap(), false)
    }

    fn at(play: &mut Play, now: f64, mouse: Vec2) {
        play.session.previous_timestamp = play.session.current_timestamp;
        play.session.current_timestamp = now;
        play.session.mouse = mouse;
    }

    fn mode() -> Standard {
        Standard::new(vec![Key::Char('z'), Key::Char('x')])
    }

    #[test]
    fn test_key_press_hits_under_cursor() {
        let mut play = play();
        let mut mode = mode();
        at(&mut play, 1010.0, Vec2::new(55.0, 50.0));
        mode.key_pressed(&mut play, Key::Char('z')).unwrap();
        assert_eq!(play.beatmap.timeline.get(0).unwrap().state(), HitState::Good);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut play = play();
        let mut mode = mode();
        at(&mut play, 1000.0, Vec2::new(50.0, 50.0));
        mode.key_pressed(&mut play, Key::Char('q')).unwrap();
        assert_eq!(play.beatmap.timeline.get(0).unwrap().state(), HitState::Initial);
    }

    #[test]
    fn test_mouse_slider_hold_and_release() {
        let mut play = play();
        let mut mode = mode();
        at(&mut play, 1000.0, Vec2::new(50.0, 50.0));
        mode.mouse_pressed(&mut play, MouseButton::Left).unwrap();

        at(&mut play, 2000.0, Vec2::new(100.0, 100.0));
        mode.check(&mut play).unwrap();
        mode.mouse_pressed(&mut play, MouseButton::Left).unwrap();
        assert_eq!(play.session.active_hold(), Some(1));

        at(&mut play, 2500.0, Vec2::new(200.0, 100.0));
        mode.check(&mut play).unwrap();
        assert_eq!(play.beatmap.timeline.get(1).unwrap().state(), HitState::Sliding);

        at(&mut play, 2990.0, Vec2::new(298.0, 100.0));
        mode.check(&mut play).unwrap();
        mode.mouse_released(&mut play, MouseButton::Left).unwrap();
        assert_eq!(play.beatmap.timeline.get(1).unwrap().state(), HitState::Good);
        assert_eq!(play.session.active_hold(), None);
    }

    #[test]
    fn test_check_misses_unclicked() {
        let mut play = play();
        let mut mode = mode();
        at(&mut play, 1200.0, Vec2::ZERO);
        mode.check(&mut play).unwrap();
        assert_eq!(play.beatmap.timeline.get(0).unwrap().state(), HitState::Missed);
    }
}
