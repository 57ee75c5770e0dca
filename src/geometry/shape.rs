use crate::math::{Point2, Point3};

/// One author-time polyline shape in any of the accepted representations.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Interleaved `x, y` coordinate pairs, z = 0 implied.
    Flat(Vec<f64>),
    /// 2D points, z = 0 implied.
    Planar(Vec<Point2>),
    /// Full 3D points.
    Spatial(Vec<Point3>),
}

impl Shape {
    /// Normalizes the shape to canonical 3D points.
    ///
    /// Flat lists are consumed pairwise; an incomplete trailing coordinate
    /// is dropped.
    #[must_use]
    pub fn normalize(&self) -> Vec<Point3> {
        match self {
            Self::Flat(coords) => coords
                .chunks_exact(2)
                .map(|xy| Point3::new(xy[0], xy[1], 0.0))
                .collect(),
            Self::Planar(points) => points.iter().map(|p| Point3::new(p.x, p.y, 0.0)).collect(),
            Self::Spatial(points) => points.clone(),
        }
    }

    /// Number of canonical points the shape normalizes to.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(coords) => coords.len() / 2,
            Self::Planar(points) => points.len(),
            Self::Spatial(points) => points.len(),
        }
    }

    /// Whether the shape has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Shape {
    fn from(coords: Vec<f64>) -> Self {
        Self::Flat(coords)
    }
}

impl From<Vec<Point2>> for Shape {
    fn from(points: Vec<Point2>) -> Self {
        Self::Planar(points)
    }
}

impl From<Vec<Point3>> for Shape {
    fn from(points: Vec<Point3>) -> Self {
        Self::Spatial(points)
    }
}

/// The point input of one line instance: a single shape, or a batch of
/// disjoint sub-lines rendered as one mesh sharing one material set.
#[derive(Debug, Clone, PartialEq)]
pub enum PointInput {
    /// A single shape.
    Single(Shape),
    /// Multiple disjoint sub-lines.
    Batch(Vec<Shape>),
}

impl PointInput {
    /// Normalizes the input to canonical sub-lines.
    #[must_use]
    pub fn sublines(&self) -> Vec<Vec<Point3>> {
        match self {
            Self::Single(shape) => vec![shape.normalize()],
            Self::Batch(shapes) => shapes.iter().map(Shape::normalize).collect(),
        }
    }

    /// Total number of canonical points across all sub-lines.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Single(shape) => shape.len(),
            Self::Batch(shapes) => shapes.iter().map(Shape::len).sum(),
        }
    }

    /// Whether the input has no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}

impl Default for PointInput {
    fn default() -> Self {
        Self::Single(Shape::Flat(Vec::new()))
    }
}

impl From<Shape> for PointInput {
    fn from(shape: Shape) -> Self {
        Self::Single(shape)
    }
}

impl From<Vec<Shape>> for PointInput {
    fn from(shapes: Vec<Shape>) -> Self {
        Self::Batch(shapes)
    }
}
