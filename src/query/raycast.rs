use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::distance_3d::ray_to_segment;
use crate::math::sphere::BoundingSphere;
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// A world-space ray.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin.
    pub origin: Point3,
    /// Ray direction; need not be normalized.
    pub direction: Vector3,
}

impl Ray {
    /// Creates a ray from origin and direction.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }
}

/// Result of a raycast against a wideline.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    /// World-space point on the line closest to the ray.
    pub point: Point3,
    /// Distance from the ray origin to the hit point.
    pub distance: f64,
    /// Index of the hit segment, counting across sub-lines.
    pub segment: usize,
}

/// Segment-by-segment proximity test of a ray against an expanded-width
/// line.
///
/// This is an approximation suited to interactive picking: caps, joins and
/// mitered width are ignored, and the width is compared in the line's local
/// space. The first segment within half the width wins; the walk does not
/// search for the globally closest segment.
#[derive(Debug)]
pub struct Raycast<'a> {
    sublines: &'a [Vec<Point3>],
    world: Matrix4,
    width: f64,
}

impl<'a> Raycast<'a> {
    /// Creates a new raycast query against the given sub-lines, with the
    /// instance's world transform and the width of its first attribute
    /// layer.
    #[must_use]
    pub fn new(sublines: &'a [Vec<Point3>], world: Matrix4, width: f64) -> Self {
        Self {
            sublines,
            world,
            width,
        }
    }

    /// Executes the query.
    ///
    /// Returns `None` when the ray misses the precomputed bounding sphere or
    /// every segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the world transform is not invertible or the ray
    /// direction is zero-length.
    pub fn execute(&self, ray: &Ray) -> Result<Option<RaycastHit>> {
        let inverse = self
            .world
            .try_inverse()
            .ok_or(GeometryError::NonInvertibleTransform)?;

        if ray.direction.norm_squared() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }

        let origin = inverse.transform_point(&ray.origin);
        let direction = inverse.transform_vector(&ray.direction);

        // Cheap rejection before the per-segment walk.
        let sphere = BoundingSphere::enclosing(self.sublines.iter().flatten());
        if !sphere.intersects_ray(&origin, &direction) {
            return Ok(None);
        }

        let half_width = self.width * 0.5;
        let mut segment = 0;
        for subline in self.sublines {
            for pair in subline.windows(2) {
                let approach = ray_to_segment(&origin, &direction, &pair[0], &pair[1]);
                if approach.distance <= half_width {
                    let point = self.world.transform_point(&approach.point_on_segment);
                    let distance = (point - ray.origin).norm();
                    trace!(segment, distance, "raycast hit");
                    return Ok(Some(RaycastHit {
                        point,
                        distance,
                        segment,
                    }));
                }
                segment += 1;
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<Vec<Point3>> {
        vec![vec![
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ]]
    }

    fn down_z() -> Vector3 {
        Vector3::new(0.0, 0.0, -1.0)
    }

    #[test]
    fn hits_segment_within_width() {
        let lines = zigzag();
        let query = Raycast::new(&lines, Matrix4::identity(), 0.2);
        // Straight down onto the middle of the first segment.
        let hit = query
            .execute(&Ray::new(Point3::new(-0.5, 0.5, 5.0), down_z()))
            .unwrap()
            .unwrap();
        assert_eq!(hit.segment, 0);
        assert!((hit.point - Point3::new(-0.5, 0.5, 0.0)).norm() < 1e-9);
        assert!((hit.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn first_qualifying_segment_wins() {
        let lines = zigzag();
        let query = Raycast::new(&lines, Matrix4::identity(), 0.5);
        // The apex point belongs to both segments; the walk reports the
        // first.
        let hit = query
            .execute(&Ray::new(Point3::new(0.0, 1.0, 5.0), down_z()))
            .unwrap()
            .unwrap();
        assert_eq!(hit.segment, 0);
    }

    #[test]
    fn misses_outside_width() {
        let lines = zigzag();
        let query = Raycast::new(&lines, Matrix4::identity(), 0.2);
        let hit = query
            .execute(&Ray::new(Point3::new(-0.5, 0.8, 5.0), down_z()))
            .unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn bounding_sphere_rejects_far_rays() {
        let lines = zigzag();
        let query = Raycast::new(&lines, Matrix4::identity(), 0.2);
        let hit = query
            .execute(&Ray::new(Point3::new(50.0, 50.0, 5.0), down_z()))
            .unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn respects_world_transform() {
        let lines = zigzag();
        let world = Matrix4::new_translation(&Vector3::new(10.0, 0.0, 0.0));
        let query = Raycast::new(&lines, world, 0.2);
        // The untranslated position no longer hits...
        assert!(query
            .execute(&Ray::new(Point3::new(-0.5, 0.5, 5.0), down_z()))
            .unwrap()
            .is_none());
        // ...the translated one does, and reports world coordinates.
        let hit = query
            .execute(&Ray::new(Point3::new(9.5, 0.5, 5.0), down_z()))
            .unwrap()
            .unwrap();
        assert!((hit.point - Point3::new(9.5, 0.5, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn counts_segments_across_sublines() {
        let lines = vec![
            vec![Point3::new(-1.0, 0.0, 0.0), Point3::new(0.0, 0.0, 0.0)],
            vec![Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)],
        ];
        let query = Raycast::new(&lines, Matrix4::identity(), 0.2);
        let hit = query
            .execute(&Ray::new(Point3::new(2.5, 0.0, 5.0), down_z()))
            .unwrap()
            .unwrap();
        assert_eq!(hit.segment, 1);
    }

    #[test]
    fn zero_direction_is_an_error() {
        let lines = zigzag();
        let query = Raycast::new(&lines, Matrix4::identity(), 0.2);
        assert!(query
            .execute(&Ray::new(Point3::origin(), Vector3::zeros()))
            .is_err());
    }
}
