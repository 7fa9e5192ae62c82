//! Shape normalization: raise a shape to a target point count by
//! subdividing its segments proportionally to their approximate length.

use crate::error::MorphError;
use crate::geometry::distance;
use crate::shape::{Handle, PathPoint, Shape};
use crate::subdivide::insert_count;

/// Cheap arc-length proxy for one segment: the average of the straight
/// chord and the control-polygon length. Good enough for proportional
/// allocation; not a true arc length.
pub fn approx_segment_length(a: &PathPoint, b: &PathPoint) -> f32 {
    let chord = distance(a.coord(), b.coord());
    let polygon = a.handle_out.length
        + distance(a.handle_out_coord(), b.handle_in_coord())
        + b.handle_in.length;
    (chord + polygon) / 2.0
}

/// Distribute `extra` subdivision slots across segments by repeatedly
/// picking the segment with the largest remaining density (estimated length
/// over its current divisor). Ties go to the larger raw estimate, so the
/// allocation is deterministic.
fn allocate_divisors(lengths: &[f32], extra: usize) -> Vec<usize> {
    let mut divisors = vec![1usize; lengths.len()];
    for _ in 0..extra {
        let mut best = 0usize;
        for i in 1..lengths.len() {
            let candidate = lengths[i] / divisors[i] as f32;
            let incumbent = lengths[best] / divisors[best] as f32;
            if candidate > incumbent || (candidate == incumbent && lengths[i] > lengths[best]) {
                best = i;
            }
        }
        divisors[best] += 1;
    }
    divisors
}

/// Raise `shape` to exactly `count` points without changing the traced
/// curve. Normalizing a shape to its own length is a no-op copy.
pub fn divide_shape(count: usize, shape: &Shape) -> Result<Shape, MorphError> {
    shape.validate()?;
    let n = shape.len();
    if count < n {
        return Err(MorphError::CannotRemovePoints { from: n, to: count });
    }
    if count == n {
        return Ok(shape.clone());
    }

    let lengths: Vec<f32> = (0..n)
        .map(|i| approx_segment_length(&shape.points[i], &shape.points[(i + 1) % n]))
        .collect();
    let divisors = allocate_divisors(&lengths, count - n);

    let mut out: Vec<PathPoint> = Vec::with_capacity(count);
    // handle_in of a shared endpoint comes from the trailing side of the
    // segment that ends there; carried across the concatenation seam.
    let mut trailing_in: Option<Handle> = None;
    for i in 0..n {
        let a = &shape.points[i];
        let b = &shape.points[(i + 1) % n];
        let mut seg = insert_count(divisors[i] + 1, a, b);
        let keep = seg.len() - 1;
        if let Some(h) = trailing_in.take() {
            seg[0].handle_in = h;
        }
        trailing_in = Some(seg[keep].handle_in);
        out.extend_from_slice(&seg[..keep]);
    }
    // The final segment wraps around to the first point.
    if let (Some(h), Some(first)) = (trailing_in, out.first_mut()) {
        first.handle_in = h;
    }
    debug_assert_eq!(out.len(), count);
    Ok(Shape { points: out })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisors_follow_segment_length() {
        // One segment four times as long as the rest soaks up the slots.
        let divisors = allocate_divisors(&[4.0, 1.0, 1.0, 1.0], 3);
        assert_eq!(divisors, vec![4, 1, 1, 1]);
    }

    #[test]
    fn divisor_ties_go_to_the_larger_raw_length() {
        // 4/2 == 2/1 after the first slot lands on the long segment; the
        // second slot must return to it rather than drift.
        let divisors = allocate_divisors(&[4.0, 2.0, 1.0], 2);
        assert_eq!(divisors, vec![3, 1, 1]);
    }
}
