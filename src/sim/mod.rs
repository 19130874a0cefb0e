//! Deterministic judgment module
//!
//! All judging logic lives here. This module must be pure and deterministic:
//! - Time comes in as an argument, never read from a clock
//! - Sounds are queued as events, never played directly
//! - Stable iteration order (timeline order)
//! - No rendering or platform dependencies

pub mod hit;
pub mod judge;
pub mod path;
pub mod state;
pub mod tick;
pub mod timeline;

pub use hit::{HitKind, HitObject, HitState, Slider};
pub use judge::{find_interactable, press, release};
pub use path::Path;
pub use state::{Difficulty, GameEvent, Play, Session};
pub use tick::{tick_hold, tick_timeline};
pub use timeline::{Tally, Timeline};
