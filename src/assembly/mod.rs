mod assemble_mesh;

pub use assemble_mesh::AssembleMesh;

use crate::math::Point3;
use crate::scheme::MaterialDescriptor;

/// One contiguous draw range bound to a single material slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialGroup {
    /// First index, as a scalar offset into the flattened index buffer.
    pub start: usize,
    /// Number of indices drawn.
    pub count: usize,
    /// Slot into [`MeshData::materials`].
    pub material_index: usize,
    /// Attribute layer sequence number. All ranges with sequence 0 draw
    /// before any range with sequence 1, which is what translucent blending
    /// requires of stacked attribute layers.
    pub seq: usize,
}

/// Combined, host-ready buffer set for one wideline instance.
///
/// `positions` holds the local template offsets of every instantiation; the
/// four neighbor arrays carry, per vertex, the polyline points surrounding
/// the instantiation point, from which the vertex programs compute the
/// expansion direction and join geometry.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Local template offsets, one run per instantiation.
    pub positions: Vec<Point3>,
    /// Point before the instantiation point (clamped at sub-line bounds).
    pub point_a: Vec<Point3>,
    /// The instantiation point itself.
    pub point_b: Vec<Point3>,
    /// Point after the instantiation point (clamped).
    pub point_c: Vec<Point3>,
    /// Second point after the instantiation point (clamped). Only sampled by
    /// the strip program; hosts may skip its upload for opaque lines.
    pub point_d: Vec<Point3>,
    /// Triangle indices into `positions`.
    pub indices: Vec<[u32; 3]>,
    /// Draw ranges partitioning `indices`, sorted by (seq, start).
    pub groups: Vec<MaterialGroup>,
    /// Flattened material descriptors referenced by
    /// [`MaterialGroup::material_index`].
    pub materials: Vec<MaterialDescriptor>,
}

impl MeshData {
    /// Number of mesh vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// The named vertex buffers in host upload form.
    #[must_use]
    pub fn vertex_buffers(&self) -> Vec<(&'static str, Vec<f32>)> {
        vec![
            ("position", flatten(&self.positions)),
            ("pointA", flatten(&self.point_a)),
            ("pointB", flatten(&self.point_b)),
            ("pointC", flatten(&self.point_c)),
            ("pointD", flatten(&self.point_d)),
        ]
    }

    /// The flattened index buffer in host upload form.
    #[must_use]
    pub fn index_buffer(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}

/// Flattens points to interleaved xyz floats for buffer upload.
#[allow(clippy::cast_possible_truncation)]
fn flatten(points: &[Point3]) -> Vec<f32> {
    let mut data = Vec::with_capacity(points.len() * 3);
    for p in points {
        data.push(p.x as f32);
        data.push(p.y as f32);
        data.push(p.z as f32);
    }
    data
}
