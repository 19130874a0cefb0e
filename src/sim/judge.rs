//! Input-driven judgments
//!
//! Finding the candidate (where and when) is kept apart from judging it
//! (timing window), so player clicks and autoplay share one rule.

use glam::Vec2;

use super::hit::HitState;
use super::state::Play;

/// First object that could be clicked at `point` and `now`.
///
/// Eligible objects are within the approach window, untouched, and within
/// the circle radius. When several overlap, the earliest one wins.
pub fn find_interactable(play: &Play, point: Vec2, now: f64) -> Option<usize> {
    let difficulty = &play.beatmap.difficulty;
    for (index, hit) in play.beatmap.timeline.iter_from_cursor() {
        if hit.time() > now + difficulty.approach_time {
            break;
        }
        if hit.time() < now - difficulty.approach_time {
            continue;
        }
        if hit.state() != HitState::Initial {
            continue;
        }
        if point.distance(hit.position()) <= difficulty.circle_radius {
            return Some(index);
        }
    }
    None
}

/// A click or key press at `point`.
///
/// Within the leniency window the object is hit (or starts sliding); an
/// early or late click on a visible object is a miss. Clicking empty space
/// changes nothing.
pub fn press(play: &mut Play, point: Vec2, now: f64) {
    let Some(index) = find_interactable(play, point, now) else {
        return;
    };
    let Some(hit) = play.beatmap.timeline.get(index) else {
        return;
    };
    if (hit.time() - now).abs() < play.beatmap.difficulty.leniency {
        if hit.is_holdable() {
            start_hold(play, index, now);
        } else {
            play.judge(index, HitState::Good);
        }
        play.hit_sound();
    } else {
        play.judge(index, HitState::Missed);
    }
}

/// Button or key released: ends the active hold, good if released close
/// enough to (or after) its end.
pub fn release(play: &mut Play, now: f64) {
    let Some(index) = play.session.take_active_hold() else {
        return;
    };
    settle_released_hold(play, index, now);
}

fn settle_released_hold(play: &mut Play, index: usize, now: f64) {
    let Some(hit) = play.beatmap.timeline.get(index) else {
        return;
    };
    if now < hit.end_time() - play.beatmap.difficulty.leniency {
        play.judge(index, HitState::Missed);
    } else if play.judge(index, HitState::Good) {
        play.hit_sound();
    }
}

/// Put `index` into `Sliding` and make it the active hold.
///
/// Only one hold can be active. A hold still running is settled first:
/// good under autoplay, otherwise as if it had been released at `now`.
pub(crate) fn start_hold(play: &mut Play, index: usize, now: f64) {
    if let Some(previous) = play.session.take_active_hold() {
        if play.session.autoplay {
            play.judge(previous, HitState::Good);
        } else {
            settle_released_hold(play, previous, now);
        }
    }
    if play.judge(index, HitState::Sliding) {
        play.session.set_active_hold(Some(index));
    }
}
