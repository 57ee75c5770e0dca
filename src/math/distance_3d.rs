use super::{Point3, Vector3, TOLERANCE};

/// Closest approach between a ray and a bounded line segment.
#[derive(Debug, Clone, Copy)]
pub struct RaySegmentApproach {
    /// Parameter along the ray at the closest approach (`>= 0`).
    pub ray_t: f64,
    /// Normalized parameter along the segment, in `[0, 1]`.
    pub segment_t: f64,
    /// Closest point on the segment.
    pub point_on_segment: Point3,
    /// Distance between the ray and the segment at the closest approach.
    pub distance: f64,
}

/// Computes the closest approach between the ray `origin + t * dir` (t >= 0)
/// and the segment from `a` to `b`.
///
/// `dir` does not need to be normalized but must be nonzero; a zero direction
/// degenerates to the distance from `origin` to the segment. Degenerate
/// (zero-length) segments are handled as single points.
#[must_use]
pub fn ray_to_segment(origin: &Point3, dir: &Vector3, a: &Point3, b: &Point3) -> RaySegmentApproach {
    let u = *dir;
    let v = b - a;
    let w0 = origin - a;

    let uu = u.dot(&u);
    let uv = u.dot(&v);
    let vv = v.dot(&v);
    let uw = u.dot(&w0);
    let vw = v.dot(&w0);

    // Degenerate ray direction: point-to-segment distance from the origin.
    if uu < TOLERANCE {
        let t = if vv < TOLERANCE {
            0.0
        } else {
            (vw / vv).clamp(0.0, 1.0)
        };
        let q = a + v * t;
        return RaySegmentApproach {
            ray_t: 0.0,
            segment_t: t,
            point_on_segment: q,
            distance: (origin - q).norm(),
        };
    }

    // Degenerate segment: project the point onto the ray, clamp t >= 0.
    if vv < TOLERANCE {
        let s = (-uw / uu).max(0.0);
        let p = origin + u * s;
        return RaySegmentApproach {
            ray_t: s,
            segment_t: 0.0,
            point_on_segment: *a,
            distance: (p - a).norm(),
        };
    }

    let denom = uu * vv - uv * uv;

    // Unclamped minimum on the ray, then clamp into the allowed domain and
    // re-solve the dependent parameter.
    let mut s = if denom.abs() < TOLERANCE {
        // Parallel: any s works, pick the ray origin.
        0.0
    } else {
        ((uv * vw - vv * uw) / denom).max(0.0)
    };

    let mut t = (uv * s + vw) / vv;
    if t < 0.0 {
        t = 0.0;
        s = (-uw / uu).max(0.0);
    } else if t > 1.0 {
        t = 1.0;
        s = ((uv - uw) / uu).max(0.0);
    }

    let p = origin + u * s;
    let q = a + v * t;

    RaySegmentApproach {
        ray_t: s,
        segment_t: t,
        point_on_segment: q,
        distance: (p - q).norm(),
    }
}
