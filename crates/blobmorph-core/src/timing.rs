//! Timing functions applied to transition progress.
//!
//! The named presets are cubic-bezier curves evaluated by inverting the x
//! polynomial with a bisection search; Bezier(0,0,1,1) is exactly linear and
//! short-circuits.

use serde::{Deserialize, Serialize};

use crate::error::MorphError;

/// Easing applied to the clamped progress of a transition. Each keyframe
/// owns the easing of the transition into itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Timing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    ElasticOut,
    /// Custom curve through control points (x1, y1, x2, y2), the CSS
    /// cubic-bezier() convention.
    CubicBezier([f32; 4]),
}

impl Timing {
    /// Resolve a timing-function name from a keyframe spec.
    pub fn parse(name: &str) -> Result<Timing, MorphError> {
        match name {
            "linear" => Ok(Timing::Linear),
            "ease-in" => Ok(Timing::EaseIn),
            "ease-out" => Ok(Timing::EaseOut),
            "ease-in-out" => Ok(Timing::EaseInOut),
            "elastic-out" => Ok(Timing::ElasticOut),
            _ => Err(MorphError::TimingNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Map progress in [0, 1] to eased progress. Input is clamped, and both
    /// endpoints are fixed: `apply(0) == 0` and `apply(1) == 1` for every
    /// variant (elastic overshoots in between, on purpose).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Timing::Linear => t,
            Timing::EaseIn => bezier_ease(t, 0.42, 0.0, 1.0, 1.0),
            Timing::EaseOut => bezier_ease(t, 0.0, 0.0, 0.58, 1.0),
            Timing::EaseInOut => bezier_ease(t, 0.42, 0.0, 0.58, 1.0),
            Timing::ElasticOut => elastic_out(t),
            Timing::CubicBezier([x1, y1, x2, y2]) => bezier_ease(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic Bezier basis function.
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1], compute
/// the eased y by inverting the x bezier via binary search. Monotonic x is
/// assumed for x1/x2 in [0,1].
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

/// Exponentially decaying overshoot, for springy arrivals.
fn elastic_out(t: f32) -> f32 {
    use std::f32::consts::TAU;
    2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * (TAU / 3.0)).sin() + 1.0
}
