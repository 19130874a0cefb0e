//! Whole plays through the driving loop with simulated audio and input

use hitline::beatmap;
use hitline::modes::Mode;
use hitline::platform::headless::{ScriptedInput, SimulatedAudio};
use hitline::platform::Sample;
use hitline::renderer::NullRenderer;
use hitline::settings::ModeKind;
use hitline::sim::{Difficulty, HitState};
use hitline::{Game, Settings};

const FRAME_MS: f64 = 1000.0 / 240.0;

#[test]
fn test_perfect_player_hits_everything() {
    let map = beatmap::generate(7, 40, Difficulty::default()).unwrap();
    let count = map.timeline.len();
    let audio = SimulatedAudio::new(FRAME_MS, map.length() + 1000.0);
    let input = ScriptedInput::perfect(&map, FRAME_MS);

    let mut game = Game::new(map, &Settings::default(), audio, input, NullRenderer::default()).unwrap();
    let tally = game.run().unwrap();

    assert_eq!(tally.good, count);
    assert_eq!(tally.missed, 0);
    assert_eq!(tally.accuracy(), 1.0);
    assert!(game.audio().played().iter().all(|(_, s)| *s == Sample::Hit));
    assert!(game.audio().played().len() >= count);
}

#[test]
fn test_idle_player_misses_everything() {
    let map = beatmap::generate(7, 20, Difficulty::default()).unwrap();
    let count = map.timeline.len();
    let audio = SimulatedAudio::new(FRAME_MS, map.length() + 1000.0);

    let mut game = Game::new(map, &Settings::default(), audio, ScriptedInput::default(), NullRenderer::default()).unwrap();
    let tally = game.run().unwrap();

    assert_eq!(tally.missed, count);
    assert!(game.audio().played().is_empty());
    assert_eq!(game.play().beatmap.timeline.cursor(), count);
}

#[test]
fn test_autoplay_hits_everything() {
    let map = beatmap::generate(99, 40, Difficulty::default()).unwrap();
    let count = map.timeline.len();
    let audio = SimulatedAudio::new(FRAME_MS, map.length() + 1000.0);
    let settings = Settings {
        autoplay: true,
        ..Default::default()
    };

    let mut game = Game::new(map, &settings, audio, ScriptedInput::default(), NullRenderer::default()).unwrap();
    let tally = game.run().unwrap();

    assert_eq!(tally.good, count);
    assert!(
        game.play()
            .beatmap
            .timeline
            .hits()
            .iter()
            .all(|h| h.state() == HitState::Good)
    );
}

#[test]
fn test_catch_the_beat_judges_nothing() {
    let map = beatmap::generate(3, 10, Difficulty::default()).unwrap();
    let count = map.timeline.len();
    let audio = SimulatedAudio::new(FRAME_MS, map.length() + 1000.0);
    let input = ScriptedInput::perfect(&map, FRAME_MS);
    let settings = Settings {
        mode: ModeKind::CatchTheBeat,
        ..Default::default()
    };

    let mut game = Game::new(map, &settings, audio, input, NullRenderer::default()).unwrap();
    let tally = game.run().unwrap();

    assert!(matches!(game.mode(), Mode::CatchTheBeat(_)));
    assert_eq!(tally.initial, count);
    assert_eq!(game.renderer().frames, 0);
}
