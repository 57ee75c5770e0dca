use tracing::debug;

use crate::error::{BuildError, Result};
use crate::math::Point3;
use crate::scheme::{MaterialDescriptor, Scheme, VertexGroup, Where};

use super::{MaterialGroup, MeshData};

/// Instantiates the scheme's vertex groups at every qualifying polyline
/// point, producing one indexed mesh with per-material draw ranges.
///
/// Groups are processed in construction order; within each group the
/// sub-lines are walked in order and the group's template is replicated at
/// each point admitted by its placement rule. All instantiations of one
/// group form one contiguous index range, which is then fanned out into one
/// draw range per material layer.
#[derive(Debug)]
pub struct AssembleMesh {
    sublines: Vec<Vec<Point3>>,
    groups: Vec<VertexGroup>,
    layers: Vec<Vec<MaterialDescriptor>>,
}

impl AssembleMesh {
    /// Creates a new mesh assembly operation from normalized sub-lines and a
    /// fully accumulated scheme.
    #[must_use]
    pub fn new(sublines: Vec<Vec<Point3>>, scheme: Scheme) -> Self {
        let (groups, layers) = scheme.into_parts();
        Self {
            sublines,
            groups,
            layers,
        }
    }

    /// Executes the assembly.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex group count does not match the
    /// material layer list count, which indicates a construction-logic bug
    /// rather than bad input.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<MeshData> {
        if self.groups.len() != self.layers.len() {
            return Err(BuildError::GroupLayerMismatch {
                groups: self.groups.len(),
                layers: self.layers.len(),
            }
            .into());
        }

        let mut mesh = MeshData::default();
        let mut group_indices: Vec<Vec<[u32; 3]>> = Vec::with_capacity(self.groups.len());
        let mut offset: u32 = 0;

        for (group, layers) in self.groups.iter().zip(&self.layers) {
            let count = group.template.vertex_count();
            let mut indices = Vec::new();

            // A group without material layers draws nothing; skip its
            // geometry so the draw ranges still partition the index buffer.
            if layers.is_empty() {
                group_indices.push(indices);
                continue;
            }

            for subline in &self.sublines {
                let n = subline.len();
                // A segment needs a next point; sub-lines shorter than 2
                // points instantiate nothing.
                for i in 0..n.saturating_sub(1) {
                    let admitted = match group.limited {
                        None => true,
                        Some(Where::Start) => i == 0,
                        Some(Where::End) => i == n - 2,
                    };
                    if !admitted {
                        continue;
                    }

                    mesh.positions.extend_from_slice(&group.template.positions);

                    // Neighbor points around i, index-clamped to the
                    // sub-line so true endpoints degenerate to zero-length
                    // segments instead of crossing into another sub-line.
                    let a = subline[i.saturating_sub(1)];
                    let b = subline[i];
                    let c = subline[(i + 1).min(n - 1)];
                    let d = subline[(i + 2).min(n - 1)];
                    for _ in 0..count {
                        mesh.point_a.push(a);
                        mesh.point_b.push(b);
                        mesh.point_c.push(c);
                        mesh.point_d.push(d);
                    }

                    for cell in &group.template.cells {
                        indices.push([cell[0] + offset, cell[1] + offset, cell[2] + offset]);
                    }
                    offset += count as u32;
                }
            }

            group_indices.push(indices);
        }

        // One draw range per material layer of each group, in construction
        // order; material_index counts the flattened material list.
        let mut start = 0;
        let mut material_index = 0;
        for (indices, layers) in group_indices.iter().zip(&self.layers) {
            let count = indices.len() * 3;
            for seq in 0..layers.len() {
                mesh.groups.push(MaterialGroup {
                    start,
                    count,
                    material_index,
                    seq,
                });
                material_index += 1;
            }
            start += count;
            mesh.indices.extend_from_slice(indices);
        }

        // Layer k of every group must draw before layer k+1 of any group;
        // the sort is stable so equal-sequence ranges keep buffer order.
        mesh.groups.sort_by_key(|g| (g.seq, g.start));

        mesh.materials = self.layers.iter().flatten().cloned().collect();

        debug!(
            groups = self.groups.len(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            ranges = mesh.groups.len(),
            "assembled wideline mesh"
        );

        Ok(mesh)
    }
}
