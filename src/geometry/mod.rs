pub mod primitives;
pub mod shape;

pub use shape::{PointInput, Shape};

use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// A reusable, parameter-free triangle mesh fragment.
///
/// Positions are local-space offsets consumed by the vertex programs; the
/// actual world placement is computed per instantiation from the neighbor
/// point attributes. Cells index into `positions`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryTemplate {
    /// Local-space vertex offsets.
    pub positions: Vec<Point3>,
    /// Triangle definitions, each indexing three positions.
    pub cells: Vec<[u32; 3]>,
}

impl GeometryTemplate {
    /// Creates a template from raw positions and cells.
    #[must_use]
    pub fn new(positions: Vec<Point3>, cells: Vec<[u32; 3]>) -> Self {
        Self { positions, cells }
    }

    /// Number of local vertices instantiated per placement.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles per placement.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.cells.len()
    }

    /// Checks that every cell index references an existing position.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell index is out of range.
    pub fn validate(&self) -> Result<()> {
        let count = self.positions.len();
        for cell in &self.cells {
            for &index in cell {
                if index as usize >= count {
                    return Err(GeometryError::CellIndexOutOfRange {
                        index,
                        positions: count,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
