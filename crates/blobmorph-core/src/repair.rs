//! Degenerate-handle repair.
//!
//! Subdivision can leave zero-length handles whose stored angle is whatever
//! the split happened to produce. They add no curvature, but the angle still
//! feeds the circular interpolation, and an arbitrary one makes handles
//! visibly snap direction mid-morph.

use crate::geometry::angle_of;
use crate::shape::Shape;

/// Re-aim every inert handle along the chord to its neighboring vertex:
/// a zero-length `handle_out` at the next point, a zero-length `handle_in`
/// at the previous one. Non-degenerate handles are untouched.
pub fn fix_zero_handles(shape: &Shape) -> Shape {
    let n = shape.len();
    let mut out = shape.clone();
    for i in 0..n {
        let prev = shape.points[(i + n - 1) % n].coord();
        let next = shape.points[(i + 1) % n].coord();
        let point = &mut out.points[i];
        if point.handle_in.length == 0.0 {
            point.handle_in.angle = angle_of(point.coord(), prev);
        }
        if point.handle_out.length == 0.0 {
            point.handle_out.angle = angle_of(point.coord(), next);
        }
    }
    out
}
