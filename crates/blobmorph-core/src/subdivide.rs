//! Single-segment subdivision that preserves the traced curve.

use crate::geometry::{angle_of, distance, split_line};
use crate::shape::{Handle, PathPoint};

/// Split the Bézier segment `a -> b` at fraction `t`.
///
/// Returns a shortened-handle copy of `a`, the new on-curve point, and a
/// shortened-handle copy of `b`. The new point's handles aim at the
/// second-layer De Casteljau anchors, so re-rendering the two halves traces
/// the original segment.
pub fn split_segment(t: f32, a: &PathPoint, b: &PathPoint) -> (PathPoint, PathPoint, PathPoint) {
    let c1 = a.handle_out_coord();
    let c2 = b.handle_in_coord();

    let d1 = split_line(t, a.coord(), c1);
    let d2 = split_line(t, c1, c2);
    let d3 = split_line(t, c2, b.coord());
    let d4 = split_line(t, d1, d2);
    let d5 = split_line(t, d2, d3);
    let d6 = split_line(t, d4, d5);

    let left = PathPoint {
        handle_out: Handle {
            angle: a.handle_out.angle,
            length: a.handle_out.length * t,
        },
        ..*a
    };
    let mid = PathPoint {
        x: d6.x,
        y: d6.y,
        handle_in: Handle {
            angle: angle_of(d6, d4),
            length: distance(d6, d4),
        },
        handle_out: Handle {
            angle: angle_of(d6, d5),
            length: distance(d6, d5),
        },
    };
    let right = PathPoint {
        handle_in: Handle {
            angle: b.handle_in.angle,
            length: b.handle_in.length * (1.0 - t),
        },
        ..*b
    };
    (left, mid, right)
}

/// Replace the segment `a -> b` with exactly `n` points tracing the same
/// curve. `n < 2` returns the segment unchanged.
///
/// Splits the remaining sub-segment at `1/remaining` each round so the
/// inserted points spread along the whole segment; the explicit loop keeps
/// stack depth independent of `n`.
pub fn insert_count(n: usize, a: &PathPoint, b: &PathPoint) -> Vec<PathPoint> {
    if n < 2 {
        return vec![*a, *b];
    }
    let mut out = Vec::with_capacity(n);
    let mut head = *a;
    let mut tail = *b;
    let mut remaining = n;
    while remaining > 2 {
        let (left, mid, right) = split_segment(1.0 / remaining as f32, &head, &tail);
        out.push(left);
        head = mid;
        tail = right;
        remaining -= 1;
    }
    out.push(head);
    out.push(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(x: f32, y: f32) -> PathPoint {
        PathPoint {
            x,
            y,
            handle_in: Handle::default(),
            handle_out: Handle::default(),
        }
    }

    #[test]
    fn insert_count_yields_exactly_n_points() {
        let a = flat(0.0, 0.0);
        let b = flat(10.0, 0.0);
        assert_eq!(insert_count(0, &a, &b).len(), 2);
        assert_eq!(insert_count(1, &a, &b).len(), 2);
        for n in 2..=9 {
            let points = insert_count(n, &a, &b);
            assert_eq!(points.len(), n);
            assert_eq!(points[0].coord(), a.coord());
            assert_eq!(points[n - 1].coord(), b.coord());
        }
    }

    #[test]
    fn split_shortens_outer_handles_proportionally() {
        let a = PathPoint {
            handle_out: Handle {
                angle: 0.0,
                length: 4.0,
            },
            ..flat(0.0, 0.0)
        };
        let b = PathPoint {
            handle_in: Handle {
                angle: std::f32::consts::PI,
                length: 4.0,
            },
            ..flat(10.0, 0.0)
        };
        let (left, _, right) = split_segment(0.25, &a, &b);
        assert!((left.handle_out.length - 1.0).abs() < 1e-6);
        assert!((right.handle_in.length - 3.0).abs() < 1e-6);
    }
}
