//! Validated beatmap container
//!
//! Parsing `.osu` files is somebody else's job; this module takes already
//! decoded hit objects (directly, or from a JSON dump) and enforces the
//! invariants the judgment engine relies on. It also builds seeded demo
//! beatmaps for the headless runner.

use std::path::Path as FsPath;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Deserialize;

use crate::consts::*;
use crate::error::Result;
use crate::sim::{Difficulty, HitKind, HitObject, Path, Timeline};

/// Hit objects plus the difficulty they are judged with
#[derive(Debug, Clone)]
pub struct Beatmap {
    /// Format version reported by the loader
    pub version: u32,
    pub difficulty: Difficulty,
    pub timeline: Timeline,
}

#[derive(Debug, Deserialize)]
struct BeatmapFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    difficulty: Difficulty,
    hits: Vec<HitObject>,
}

impl Beatmap {
    pub fn new(difficulty: Difficulty, hits: Vec<HitObject>) -> Result<Self> {
        difficulty.validate()?;
        Ok(Self {
            version: 0,
            difficulty,
            timeline: Timeline::new(hits)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: BeatmapFile = serde_json::from_str(json)?;
        let mut beatmap = Self::new(file.difficulty, file.hits)?;
        beatmap.version = file.version;
        Ok(beatmap)
    }

    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let beatmap = Self::from_json(&json)?;
        log::info!(
            "Loaded beatmap {} (version {}, {} hit objects)",
            path.display(),
            beatmap.version,
            beatmap.timeline.len()
        );
        Ok(beatmap)
    }

    /// Time of the last object's end, 0 for an empty beatmap
    pub fn length(&self) -> f64 {
        self.timeline
            .hits()
            .iter()
            .map(HitObject::end_time)
            .fold(0.0, f64::max)
    }
}

/// Build a random but reproducible beatmap of `count` objects
pub fn generate(seed: u64, count: usize, difficulty: Difficulty) -> Result<Beatmap> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let margin = difficulty.circle_radius * 2.0;
    let random_point = |rng: &mut Pcg32| {
        Vec2::new(
            rng.random_range(margin..PLAYFIELD_WIDTH - margin),
            rng.random_range(margin..PLAYFIELD_HEIGHT - margin),
        )
    };

    let mut hits = Vec::with_capacity(count);
    let mut time = 1000.0;
    for i in 0..count {
        let start = random_point(&mut rng);
        let mut hit = if rng.random_bool(0.3) {
            let duration = rng.random_range(300.0..900.0);
            let path = if rng.random_bool(0.5) {
                Path::Linear {
                    start,
                    end: random_point(&mut rng),
                }
            } else {
                let radius = rng.random_range(40.0..120.0);
                let center = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT) / 2.0;
                let start_angle = rng.random_range(0.0..std::f32::consts::TAU);
                let sweep = rng.random_range(-2.0..2.0);
                Path::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                }
            };
            HitObject::slider(time, path, duration)
        } else {
            HitObject::circle(time, start)
        };
        if i % 4 == 0 {
            hit = hit.with_kind(HitKind::NEW_COMBO);
        }
        time = hit.end_time() + rng.random_range(250.0..600.0);
        hits.push(hit);
    }

    Beatmap::new(difficulty, hits)
}
