//! Blending of prepared shape pairs.

use crate::error::MorphError;
use crate::geometry::{lerp, lerp_angle};
use crate::shape::{Handle, PathPoint, Shape};

/// Blend two equal-length shapes at progress `t`.
///
/// Coordinates and handle lengths blend linearly; handle angles take the
/// shortest arc around the circle. `t` outside [0, 1] extrapolates — callers
/// that need clamping (the engine does) clamp before calling.
pub fn interpolate_between(t: f32, a: &Shape, b: &Shape) -> Result<Shape, MorphError> {
    if a.len() != b.len() {
        return Err(MorphError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let points = a
        .points
        .iter()
        .zip(&b.points)
        .map(|(pa, pb)| PathPoint {
            x: lerp(pa.x, pb.x, t),
            y: lerp(pa.y, pb.y, t),
            handle_in: blend_handle(pa.handle_in, pb.handle_in, t),
            handle_out: blend_handle(pa.handle_out, pb.handle_out, t),
        })
        .collect();
    Ok(Shape { points })
}

fn blend_handle(a: Handle, b: Handle, t: f32) -> Handle {
    Handle {
        angle: lerp_angle(a.angle, b.angle, t),
        length: lerp(a.length, b.length, t),
    }
}

/// Seamless back-and-forth variant driven by a wrapping progress value: the
/// first half of the cycle plays `a -> b`, the second half `b -> a`.
pub fn interpolate_between_loop(t: f32, a: &Shape, b: &Shape) -> Result<Shape, MorphError> {
    let t = t.rem_euclid(1.0);
    if t < 0.5 {
        interpolate_between(t * 2.0, a, b)
    } else {
        interpolate_between(t * 2.0 - 1.0, b, a)
    }
}
