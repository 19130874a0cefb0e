//! Slider path geometry
//!
//! A path is a parametric curve `at(t)` for `t` in [0, 1]:
//! - `Linear`: straight segment
//! - `Arc`: perfect circle arc (center, radius, start angle, signed sweep)
//! - `Bezier`: single Bézier curve of any degree

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// Parametric slider curve in playfield coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Path {
    Linear { start: Vec2, end: Vec2 },
    Arc {
        center: Vec2,
        radius: f32,
        /// Start angle (radians)
        start_angle: f32,
        /// Signed angular extent (radians), negative for clockwise
        sweep: f32,
    },
    Bezier { points: Vec<Vec2> },
}

impl Path {
    /// Whether the curve can be followed at all
    pub fn is_valid(&self) -> bool {
        match self {
            Path::Linear { start, end } => start.is_finite() && end.is_finite(),
            Path::Arc { radius, sweep, .. } => *radius > 0.0 && sweep.is_finite(),
            Path::Bezier { points } => points.len() >= 2,
        }
    }

    /// Point on the curve at `t`, clamped to [0, 1]
    pub fn at(&self, t: f64) -> Vec2 {
        let t = t.clamp(0.0, 1.0) as f32;
        match self {
            Path::Linear { start, end } => start.lerp(*end, t),
            Path::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => polar_to_cartesian(*center, *radius, start_angle + sweep * t),
            Path::Bezier { points } => de_casteljau(points, t),
        }
    }

    /// First point of the curve
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.at(0.0)
    }

    /// Last point of the curve
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.at(1.0)
    }
}

fn de_casteljau(points: &[Vec2], t: f32) -> Vec2 {
    let Some(&first) = points.first() else {
        return Vec2::ZERO;
    };
    let mut work = points.to_vec();
    for level in (1..work.len()).rev() {
        for i in 0..level {
            work[i] = work[i].lerp(work[i + 1], t);
        }
    }
    work.first().copied().unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_linear_midpoint() {
        let path = Path::Linear {
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(100.0, 0.0),
        };
        assert!((path.at(0.5) - Vec2::new(50.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_t_is_clamped() {
        let path = Path::Linear {
            start: Vec2::new(10.0, 10.0),
            end: Vec2::new(20.0, 10.0),
        };
        assert_eq!(path.at(-1.0), path.start());
        assert_eq!(path.at(3.5), path.end());
    }

    #[test]
    fn test_arc_quarter_turn() {
        let path = Path::Arc {
            center: Vec2::new(100.0, 100.0),
            radius: 50.0,
            start_angle: 0.0,
            sweep: PI / 2.0,
        };
        assert!((path.start() - Vec2::new(150.0, 100.0)).length() < 1e-3);
        assert!((path.end() - Vec2::new(100.0, 150.0)).length() < 1e-3);
    }

    #[test]
    fn test_quadratic_bezier() {
        let path = Path::Bezier {
            points: vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(50.0, 100.0),
                Vec2::new(100.0, 0.0),
            ],
        };
        // B(0.5) = 0.25 p0 + 0.5 p1 + 0.25 p2
        assert!((path.at(0.5) - Vec2::new(50.0, 50.0)).length() < 1e-3);
        assert_eq!(path.end(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_validity() {
        assert!(!Path::Bezier { points: vec![Vec2::ZERO] }.is_valid());
        assert!(
            !Path::Arc {
                center: Vec2::ZERO,
                radius: 0.0,
                start_angle: 0.0,
                sweep: 1.0,
            }
            .is_valid()
        );
    }
}
