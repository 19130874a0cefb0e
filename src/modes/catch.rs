//! osu! catch the beat, also called "CTB"
//!
//! Only the dash state is tracked so far; fruits are not judged.

use crate::error::Result;
use crate::platform::Key;
use crate::sim::Play;

use super::GameMode;

#[derive(Debug, Clone)]
pub struct CatchTheBeat {
    dash_key: Key,
    dash: bool,
}

impl CatchTheBeat {
    pub fn new(dash_key: Key) -> Self {
        Self {
            dash_key,
            dash: false,
        }
    }

    #[inline]
    pub fn is_dashing(&self) -> bool {
        self.dash
    }
}

impl GameMode for CatchTheBeat {
    fn init(&mut self, _play: &mut Play) -> Result<()> {
        log::info!("catch the beat mode");
        self.dash = false;
        Ok(())
    }

    fn key_pressed(&mut self, _play: &mut Play, key: Key) -> Result<()> {
        match key {
            k if k == self.dash_key => self.dash = true,
            Key::Left | Key::Right => log::debug!("move {:?}", key),
            _ => {}
        }
        Ok(())
    }

    fn key_released(&mut self, _play: &mut Play, key: Key) -> Result<()> {
        if key == self.dash_key {
            self.dash = false;
        }
        Ok(())
    }
}
