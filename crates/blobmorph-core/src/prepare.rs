//! Pairwise preparation: make two shapes point-for-point comparable.

use crate::divide::divide_shape;
use crate::error::MorphError;
use crate::order::optimize_order;
use crate::repair::fix_zero_handles;
use crate::shape::Shape;

/// Two equal-length, correspondence-fixed shapes ready for interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedPair {
    pub start: Shape,
    pub end: Shape,
}

/// Normalize both shapes to the larger point count, rotate/reflect the end
/// shape into least-displacement correspondence with the start, then repair
/// degenerate handle angles on both sides.
pub fn prep_shapes(start: &Shape, end: &Shape) -> Result<PreparedPair, MorphError> {
    let count = start.len().max(end.len());
    let divided_start = divide_shape(count, start)?;
    let divided_end = divide_shape(count, end)?;
    let ordered_end = optimize_order(&divided_start, &divided_end);
    Ok(PreparedPair {
        start: fix_zero_handles(&divided_start),
        end: fix_zero_handles(&ordered_end),
    })
}
