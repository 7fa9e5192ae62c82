//! Canonical shape data model: polar handles, Bézier vertices, and closed
//! shapes. Serialized field names follow the JSON schema hosts exchange
//! keyframes in.

use serde::{Deserialize, Serialize};

use crate::error::MorphError;
use crate::geometry::Coord;

/// Polar offset defining one Bézier control-point direction from a vertex.
///
/// A zero-length handle is degenerate: it adds no curvature and its angle
/// carries no visual meaning (see `repair::fix_zero_handles`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// Radians from the positive x-axis, canonical in [0, 2pi).
    pub angle: f32,
    /// Distance from the vertex, >= 0.
    pub length: f32,
}

/// One vertex of a closed cubic-Bézier polygon.
///
/// `handle_out` aims toward the next point's curve, `handle_in` back toward
/// the previous point's curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "handleIn")]
    pub handle_in: Handle,
    #[serde(rename = "handleOut")]
    pub handle_out: Handle,
}

impl PathPoint {
    pub fn coord(&self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// Absolute control point for the curve arriving at this vertex:
    /// `point + (cos a, sin a) * len`.
    pub fn handle_in_coord(&self) -> Coord {
        expand(self.coord(), self.handle_in)
    }

    /// Absolute control point for the curve leaving this vertex.
    pub fn handle_out_coord(&self) -> Coord {
        expand(self.coord(), self.handle_out)
    }
}

fn expand(c: Coord, h: Handle) -> Coord {
    Coord {
        x: c.x + h.angle.cos() * h.length,
        y: c.y + h.angle.sin() * h.length,
    }
}

/// Closed polygon of Bézier vertices; the last point connects back to the
/// first.
///
/// Point order defines winding and adjacency, but the starting index does
/// not: two rotations of the same sequence describe the same curve.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub points: Vec<PathPoint>,
}

impl Shape {
    pub const MIN_POINTS: usize = 3;

    /// Build a shape, validating basic invariants.
    pub fn new(points: Vec<PathPoint>) -> Result<Self, MorphError> {
        let shape = Self { points };
        shape.validate()?;
        Ok(shape)
    }

    /// Validate basic invariants: at least three points, finite
    /// coordinates, non-negative handle lengths. Reports the first
    /// violation.
    pub fn validate(&self) -> Result<(), MorphError> {
        if self.points.len() < Self::MIN_POINTS {
            return Err(MorphError::TooFewPoints {
                got: self.points.len(),
            });
        }
        for (i, p) in self.points.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(MorphError::InvalidShape {
                    reason: format!("non-finite coordinate at point {i}"),
                });
            }
            if p.handle_in.length < 0.0 || p.handle_out.length < 0.0 {
                return Err(MorphError::InvalidShape {
                    reason: format!("negative handle length at point {i}"),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of the vertex coordinates.
    pub fn centroid(&self) -> Coord {
        let n = self.points.len().max(1) as f32;
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        Coord {
            x: sx / n,
            y: sy / n,
        }
    }

    /// The same curve with the starting index advanced by `offset`.
    pub fn rotated(&self, offset: usize) -> Shape {
        let n = self.points.len();
        Shape {
            points: (0..n).map(|i| self.points[(i + offset) % n]).collect(),
        }
    }

    /// Reverse traversal order while keeping the rendered curve identical.
    ///
    /// Each vertex keeps its position; its handles swap roles, because the
    /// curve that used to arrive now leaves. Handles store absolute angles
    /// from their vertex, so the swapped values need no adjustment.
    pub fn reversed(&self) -> Shape {
        Shape {
            points: self
                .points
                .iter()
                .rev()
                .map(|p| PathPoint {
                    x: p.x,
                    y: p.y,
                    handle_in: p.handle_out,
                    handle_out: p.handle_in,
                })
                .collect(),
        }
    }

    /// Degenerate "point" shape: the minimum number of coincident vertices
    /// with inert handles. Used as the start of a transition when nothing
    /// was rendered before.
    pub fn point_at(center: Coord) -> Shape {
        let p = PathPoint {
            x: center.x,
            y: center.y,
            handle_in: Handle::default(),
            handle_out: Handle::default(),
        };
        Shape {
            points: vec![p; Self::MIN_POINTS],
        }
    }
}
