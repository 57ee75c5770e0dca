//! Primitive geometry templates for line bodies, caps and joins.
//!
//! All functions are pure and cannot fail. Positions are local-space offsets
//! in the unit segment frame: x runs 0..1 along the segment, y spans the
//! half-width -0.5..0.5. Caps extend one half-unit beyond the endpoint.

use std::f64::consts::PI;

use crate::math::Point3;

use super::GeometryTemplate;

/// Unit quad used for line bodies and straight joins (4 positions, 2 triangles).
#[must_use]
pub fn box_geometry() -> GeometryTemplate {
    GeometryTemplate::new(
        vec![
            Point3::new(0.0, -0.5, 0.0),
            Point3::new(1.0, -0.5, 0.0),
            Point3::new(1.0, 0.5, 0.0),
            Point3::new(0.0, 0.5, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// Square cap extending one half-unit beyond the segment endpoint.
#[must_use]
pub fn square_cap_geometry() -> GeometryTemplate {
    GeometryTemplate::new(
        vec![
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(0.0, -0.5, 0.0),
            Point3::new(0.5, -0.5, 0.0),
            Point3::new(0.5, 0.5, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// Triangular "top" cap converging one unit beyond the segment endpoint.
#[must_use]
pub fn top_cap_geometry() -> GeometryTemplate {
    GeometryTemplate::new(
        vec![
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(0.0, -0.5, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ],
        vec![[0, 1, 2]],
    )
}

/// Half-disc cap fan with `resolution` triangles.
///
/// The arc sweeps a half-turn from -90° to +90° so the cap is symmetric
/// about the line direction. Yields `resolution + 2` positions (center plus
/// arc) and `resolution` triangles. `resolution` is clamped to at least 1.
#[must_use]
pub fn round_cap_geometry(resolution: u32) -> GeometryTemplate {
    let resolution = resolution.max(1);
    let mut positions = vec![Point3::new(0.0, 0.0, 0.0)];
    for i in 0..=resolution {
        let theta = -0.5 * PI + PI * f64::from(i) / f64::from(resolution);
        positions.push(Point3::new(0.5 * theta.cos(), 0.5 * theta.sin(), 0.0));
    }
    let cells = (0..resolution).map(|i| [0, i + 1, i + 2]).collect();
    GeometryTemplate::new(positions, cells)
}

/// Bevel join fan.
///
/// The one-hot positions select which of the three join corners a vertex
/// lands on; the bevel vertex program resolves them against the neighbor
/// points.
#[must_use]
pub fn bevel_join_geometry() -> GeometryTemplate {
    GeometryTemplate::new(
        vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ],
        vec![[0, 1, 2]],
    )
}

/// Miter join fan.
///
/// The bevel fan plus a fourth all-zero apex position; the miter vertex
/// program computes the apex offset from the neighbor points.
#[must_use]
pub fn miter_join_geometry() -> GeometryTemplate {
    GeometryTemplate::new(
        vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
}

/// Round join fan with `resolution` triangles.
///
/// Positions are index-encoded as (i, 0, 0); the round-join vertex program
/// spreads them over the turn angle computed from the neighbor points.
/// `resolution` is clamped to at least 1.
#[must_use]
pub fn round_join_geometry(resolution: u32) -> GeometryTemplate {
    let resolution = resolution.max(1);
    let positions = (0..resolution + 2)
        .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
        .collect();
    let cells = (0..resolution).map(|i| [0, i + 1, i + 2]).collect();
    GeometryTemplate::new(positions, cells)
}
