use std::f32::consts::{PI, TAU};

use blobmorph_core::{
    divide_shape, fix_zero_handles, interpolate_between, interpolate_between_loop, optimize_order,
    prep_shapes, Handle, MorphError, PathPoint, Shape,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

const KAPPA: f32 = 0.552_284_8;

fn flat_point(x: f32, y: f32) -> PathPoint {
    PathPoint {
        x,
        y,
        handle_in: Handle::default(),
        handle_out: Handle::default(),
    }
}

/// Four-point circle approximation with tangent handles.
fn mk_circle(radius: f32) -> Shape {
    let handle = radius * KAPPA;
    Shape {
        points: (0..4)
            .map(|i| {
                let theta = i as f32 * PI / 2.0;
                PathPoint {
                    x: radius * theta.cos(),
                    y: radius * theta.sin(),
                    handle_in: Handle {
                        angle: (theta - PI / 2.0).rem_euclid(TAU),
                        length: handle,
                    },
                    handle_out: Handle {
                        angle: (theta + PI / 2.0).rem_euclid(TAU),
                        length: handle,
                    },
                }
            })
            .collect(),
    }
}

/// Straight-edged square standing on a corner, no curvature.
fn mk_square(radius: f32) -> Shape {
    Shape {
        points: vec![
            flat_point(radius, 0.0),
            flat_point(0.0, radius),
            flat_point(-radius, 0.0),
            flat_point(0.0, -radius),
        ],
    }
}

/// Eight-point star alternating outer/inner radius, same winding as the
/// square fixture.
fn mk_star(outer: f32, inner: f32) -> Shape {
    Shape {
        points: (0..8)
            .map(|i| {
                let theta = i as f32 * PI / 4.0;
                let r = if i % 2 == 0 { outer } else { inner };
                flat_point(r * theta.cos(), r * theta.sin())
            })
            .collect(),
    }
}

/// it should return a geometrically equal copy when dividing to the shape's own length
#[test]
fn divide_identity_is_a_noop() {
    let circle = mk_circle(10.0);
    let divided = divide_shape(4, &circle).expect("identity divide");
    assert_eq!(divided, circle);
}

/// it should produce exactly the requested point count for every valid target
#[test]
fn divide_reaches_requested_count() {
    let circle = mk_circle(10.0);
    for count in 4..=16 {
        let divided = divide_shape(count, &circle).expect("divide");
        assert_eq!(divided.len(), count);
    }
}

/// it should keep divided points on the original curve
#[test]
fn divide_preserves_the_traced_curve() {
    let radius = 10.0;
    let divided = divide_shape(9, &mk_circle(radius)).expect("divide");
    for p in &divided.points {
        approx(p.x.hypot(p.y), radius, 0.05);
    }
}

/// it should reject shrinking requests and too-small shapes
#[test]
fn divide_rejects_bad_arguments() {
    let circle = mk_circle(10.0);
    assert!(matches!(
        divide_shape(3, &circle),
        Err(MorphError::CannotRemovePoints { from: 4, to: 3 })
    ));

    let degenerate = Shape {
        points: vec![flat_point(0.0, 0.0), flat_point(1.0, 0.0)],
    };
    assert!(matches!(
        divide_shape(5, &degenerate),
        Err(MorphError::TooFewPoints { got: 2 })
    ));
}

/// it should return identical output for identical inputs (no hidden randomness)
#[test]
fn optimize_order_is_deterministic() {
    let a = divide_shape(8, &mk_square(1.0)).expect("divide");
    let b = mk_star(1.0, 0.4);
    let first = optimize_order(&a, &b);
    let second = optimize_order(&a, &b);
    assert_eq!(first, second);
}

/// it should keep the unreflected zero-offset alignment on an exact tie
#[test]
fn optimize_order_tie_break_is_first_found() {
    // Every candidate offset ties at zero displacement for coincident
    // points, so the winner must be the untouched input.
    let a = Shape {
        points: vec![flat_point(0.0, 0.0); 3],
    };
    let mut b = a.clone();
    for (i, p) in b.points.iter_mut().enumerate() {
        p.handle_in = Handle {
            angle: 0.5 + i as f32,
            length: 1.0 + i as f32,
        };
        p.handle_out = Handle {
            angle: 1.5 + i as f32,
            length: 2.0 + i as f32,
        };
    }
    assert_eq!(optimize_order(&a, &b), b);
}

/// it should undo a rotated starting index
#[test]
fn optimize_order_recovers_rotation() {
    let square = mk_square(1.0);
    let rotated = square.rotated(3);
    let ordered = optimize_order(&square, &rotated);
    assert_eq!(ordered, square);
}

/// it should pair each square corner with its nearest star point
#[test]
fn square_star_correspondence_scenario() {
    let square = mk_square(1.0);
    let star = mk_star(1.0, 0.4);

    let pair = prep_shapes(&square, &star).expect("prep");
    assert_eq!(pair.start.len(), 8);
    assert_eq!(pair.end.len(), 8);

    // The square's corners land at even indices after division; the star's
    // outer points must be matched onto exactly those indices.
    let corners = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
    for (corner_idx, (x, y)) in (0..8).step_by(2).zip(corners) {
        approx(pair.start.points[corner_idx].x, x, 1e-4);
        approx(pair.start.points[corner_idx].y, y, 1e-4);
        approx(pair.end.points[corner_idx].x, x, 1e-4);
        approx(pair.end.points[corner_idx].y, y, 1e-4);
    }
    for inner_idx in (1..8).step_by(2) {
        let p = &pair.end.points[inner_idx];
        approx(p.x.hypot(p.y), 0.4, 1e-4);
    }
}

/// it should reproduce both endpoints exactly
#[test]
fn interpolation_endpoints_are_exact() {
    let a = mk_circle(10.0);
    let b = divide_shape(4, &mk_circle(25.0)).expect("copy");

    let at_start = interpolate_between(0.0, &a, &b).expect("interpolate");
    let at_end = interpolate_between(1.0, &a, &b).expect("interpolate");
    assert_eq!(at_start, a);
    assert_eq!(at_end, b);
}

/// it should extrapolate linearly outside [0, 1]
#[test]
fn interpolation_extrapolates() {
    let a = mk_circle(10.0);
    let b = mk_circle(20.0);
    let beyond = interpolate_between(2.0, &a, &b).expect("interpolate");
    // Radius 10 -> 20 continued to 30.
    approx(beyond.points[0].x, 30.0, 1e-3);
}

/// it should blend wrap-around handle angles across zero, not through pi
#[test]
fn interpolation_angles_take_the_short_arc() {
    let mut a = mk_circle(10.0);
    let mut b = mk_circle(10.0);
    a.points[0].handle_out.angle = 0.1;
    b.points[0].handle_out.angle = TAU - 0.1;

    let mid = interpolate_between(0.5, &a, &b).expect("interpolate");
    let angle = mid.points[0].handle_out.angle;
    let distance_from_zero = angle.min(TAU - angle);
    approx(distance_from_zero, 0.0, 1e-5);
}

/// it should map the loop halves onto the one-way blend
#[test]
fn loop_interpolation_is_symmetric() {
    let a = mk_circle(10.0);
    let b = mk_circle(20.0);

    let forward = interpolate_between_loop(0.25, &a, &b).expect("loop");
    assert_eq!(forward, interpolate_between(0.5, &a, &b).expect("interpolate"));

    let backward = interpolate_between_loop(0.75, &a, &b).expect("loop");
    assert_eq!(backward, interpolate_between(0.5, &b, &a).expect("interpolate"));
}

/// it should refuse shapes of different lengths as an internal defect
#[test]
fn interpolation_mismatch_is_a_defect() {
    let a = mk_circle(10.0);
    let b = mk_star(1.0, 0.4);
    let err = interpolate_between(0.5, &a, &b).expect_err("mismatch");
    assert!(matches!(err, MorphError::ShapeMismatch { left: 4, right: 8 }));
    assert_eq!(err.category(), "defect");
}

/// it should aim degenerate handles at the neighboring vertices
#[test]
fn degenerate_handles_aim_at_neighbors() {
    let fixed = fix_zero_handles(&mk_square(1.0));
    // Corner (1, 0): next vertex is (0, 1), previous is (0, -1).
    approx(fixed.points[0].handle_out.angle, 3.0 * PI / 4.0, 1e-5);
    approx(fixed.points[0].handle_in.angle, 5.0 * PI / 4.0, 1e-5);
    // Lengths stay inert.
    approx(fixed.points[0].handle_out.length, 0.0, 0.0);
}

/// it should leave live handles alone during repair
#[test]
fn repair_ignores_nonzero_handles() {
    let circle = mk_circle(10.0);
    assert_eq!(fix_zero_handles(&circle), circle);
}

/// it should prepare shapes of different sizes to the larger count
#[test]
fn prep_shapes_normalizes_to_the_larger_count() {
    let pair = prep_shapes(&mk_star(1.0, 0.4), &mk_circle(5.0)).expect("prep");
    assert_eq!(pair.start.len(), 8);
    assert_eq!(pair.end.len(), 8);
}
