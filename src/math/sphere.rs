use super::{Point3, Vector3, TOLERANCE};

/// A bounding sphere around a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl BoundingSphere {
    /// Creates a sphere from an explicit center and radius.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Computes a sphere enclosing all given points.
    ///
    /// The center is the midpoint of the axis-aligned bounds, the radius the
    /// maximum distance from that center. An empty input yields a zero sphere
    /// at the origin.
    #[must_use]
    pub fn enclosing<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3> + Clone,
    {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;

        for p in points.clone() {
            any = true;
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        if !any {
            return Self::new(Point3::origin(), 0.0);
        }

        let center = nalgebra::center(&min, &max);
        let mut radius: f64 = 0.0;
        for p in points {
            radius = radius.max((p - center).norm());
        }

        Self::new(center, radius)
    }

    /// Tests whether the ray `origin + t * dir` (t >= 0) comes within the
    /// sphere radius.
    ///
    /// A zero-length direction degenerates to a point-in-sphere test.
    #[must_use]
    pub fn intersects_ray(&self, origin: &Point3, dir: &Vector3) -> bool {
        let to_center = self.center - origin;
        let len_sq = dir.dot(dir);

        let closest = if len_sq < TOLERANCE {
            *origin
        } else {
            let t = (to_center.dot(dir) / len_sq).max(0.0);
            origin + dir * t
        };

        (self.center - closest).norm() <= self.radius + TOLERANCE
    }
}
