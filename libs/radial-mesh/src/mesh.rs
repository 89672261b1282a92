//! # Radial Mesh
//!
//! Output of a build: an ordered position buffer and a flat triangle
//! index stream, ready to hand to a rendering host.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Vertex positions plus a triangle index stream (stride 3).
///
/// Shapes lie in the XZ plane, so every position has `y == 0`.
/// All geometry calculations use f64 internally; [`RadialMesh::positions_f32`]
/// converts for GPU upload. [`RadialMesh::indices`] is uploaded as is.
///
/// # Example
///
/// ```rust
/// use radial_mesh::RadialMesh;
/// use glam::DVec3;
///
/// let mut mesh = RadialMesh::new();
/// let a = mesh.push_vertex(DVec3::ZERO);
/// let b = mesh.push_vertex(DVec3::Z);
/// let c = mesh.push_vertex(DVec3::X);
/// mesh.push_triangle(a, b, c);
/// assert_eq!(mesh.indices(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadialMesh {
    positions: Vec<DVec3>,
    indices: Vec<u32>,
}

impl RadialMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the length of the index stream.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Appends one triangle to the index stream.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the flat index stream.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Iterates the index stream three at a time.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.positions {
            *v += offset;
        }
    }

    /// Moves the buffers out for the host.
    pub fn into_buffers(self) -> (Vec<DVec3>, Vec<u32>) {
        (self.positions, self.indices)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Unit normal of each triangle, following the emitted winding.
    ///
    /// Degenerate triangles yield `DVec3::ZERO`.
    pub fn face_normals(&self) -> Vec<DVec3> {
        self.triangles()
            .map(|[a, b, c]| {
                let v0 = self.vertex(a);
                (self.vertex(b) - v0)
                    .cross(self.vertex(c) - v0)
                    .normalize_or_zero()
            })
            .collect()
    }

    /// Area-weighted vertex normals.
    pub fn vertex_normals(&self) -> Vec<DVec3> {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for [a, b, c] in self.triangles() {
            let v0 = self.vertex(a);
            let normal = (self.vertex(b) - v0).cross(self.vertex(c) - v0);

            normals[a as usize] += normal;
            normals[b as usize] += normal;
            normals[c as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        normals
    }

    /// Validates the index stream.
    ///
    /// Checks:
    /// - The stream length is a multiple of 3
    /// - All indices reference an existing vertex
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len();
        self.indices.len() % 3 == 0
            && self
                .indices
                .iter()
                .all(|&index| (index as usize) < vertex_count)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }
}
