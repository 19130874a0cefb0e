//! Clock-driven judgments
//!
//! Run once per driving-loop iteration, hold first, then the timeline, so a
//! hold ending exactly now is settled before new objects are looked at.

use glam::Vec2;

use super::hit::HitState;
use super::judge::start_hold;
use super::state::Play;

/// Follow the active hold between `previous_now` and `now`.
///
/// Completes it once past its end, plays a tick sound whenever progress
/// crosses a whole unit, and (outside autoplay) drops it as missed when the
/// cursor strays more than `slider_tolerance` from the slider ball.
pub fn tick_hold(play: &mut Play, now: f64, previous_now: f64, mouse: Vec2, autoplay: bool) {
    let Some(index) = play.session.active_hold() else {
        return;
    };
    let Some(hit) = play.beatmap.timeline.get(index) else {
        play.session.set_active_hold(None);
        return;
    };
    let Some(slider) = hit.slider_body() else {
        play.session.set_active_hold(None);
        return;
    };

    let t = (now - hit.time()) / slider.duration;
    let prev_t = (previous_now - hit.time()) / slider.duration;

    if now > hit.end_time() {
        play.session.set_active_hold(None);
        if play.judge(index, HitState::Good) {
            play.hit_sound();
        }
        return;
    }

    let ball = slider.path.at(t);
    if t.trunc() > prev_t.trunc() && prev_t > 0.0 {
        play.hit_sound();
    }

    if autoplay {
        return;
    }
    if ball.distance(mouse) > play.beatmap.difficulty.slider_tolerance {
        play.session.set_active_hold(None);
        play.judge(index, HitState::Missed);
    }
}

/// Judge everything the clock has made due, then move the cursor.
///
/// Autoplay hits every untouched object whose time has come (sliders start
/// sliding and are finished by [`tick_hold`]). Manual play marks as missed
/// every untouched object whose hit window has fully passed.
pub fn tick_timeline(play: &mut Play, now: f64, autoplay: bool) {
    if autoplay {
        for index in play.beatmap.timeline.window() {
            let Some(hit) = play.beatmap.timeline.get(index) else {
                break;
            };
            if hit.time() > now {
                break;
            }
            if hit.state() != HitState::Initial {
                continue;
            }
            if hit.is_holdable() {
                start_hold(play, index, now);
            } else {
                play.judge(index, HitState::Good);
            }
            play.hit_sound();
        }
    } else {
        let deadline = now - play.beatmap.difficulty.leniency;
        for index in play.beatmap.timeline.window() {
            let Some(hit) = play.beatmap.timeline.get(index) else {
                break;
            };
            if hit.time() >= deadline {
                break;
            }
            if hit.state() == HitState::Initial {
                play.judge(index, HitState::Missed);
            }
        }
    }

    let approach_time = play.beatmap.difficulty.approach_time;
    play.beatmap.timeline.advance_cursor(now, approach_time);
}
