//! Scalar and angular math shared by the pipeline stages.
//!
//! Angles are radians from the positive x-axis in a y-down plane (so they
//! grow clockwise on screen), canonical in [0, 2pi). Interpolation helpers
//! use the endpoint-exact blend form so progress 0 and 1 reproduce the
//! inputs.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Position in the 2D plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f32,
    pub y: f32,
}

impl Coord {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two coordinates.
#[inline]
pub fn distance(a: Coord, b: Coord) -> f32 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Direction from `a` to `b`, normalized to [0, 2pi).
#[inline]
pub fn angle_of(a: Coord, b: Coord) -> f32 {
    normalize_angle((b.y - a.y).atan2(b.x - a.x))
}

/// Wrap an angle into the canonical [0, 2pi) range.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Endpoint-exact linear interpolation of scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Point on the line `a -> b` at fraction `t`.
#[inline]
pub fn split_line(t: f32, a: Coord, b: Coord) -> Coord {
    Coord {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
    }
}

/// Shortest-arc circular interpolation of angles.
///
/// Both inputs are wrapped to [0, 2pi); when the gap exceeds pi the smaller
/// angle is lifted by 2pi before blending, so a handle never rotates more
/// than half a turn.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut a = normalize_angle(a);
    let mut b = normalize_angle(b);
    if (a - b).abs() > PI {
        if a < b {
            a += TAU;
        } else {
            b += TAU;
        }
    }
    normalize_angle(lerp(a, b, t))
}
