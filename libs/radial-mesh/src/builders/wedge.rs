//! Pointed shape: the whole outer boundary collapses to one apex.

use super::extra_segments;
use crate::mesh::RadialMesh;
use crate::params::ShapeParameters;
use crate::rotation::{forward, yaw, RotationStep};

/// Builds a wedge (`outer_arc == 0`).
///
/// Vertex layout: `0` inner start, `1` apex on the forward axis at
/// `outer_radius`, then one inner vertex per segment end. Every triangle is
/// `(inner, apex, inner_next)`, so the apex appears in all of them.
pub fn build_wedge(params: &ShapeParameters) -> RadialMesh {
    let rotation = RotationStep::from_params(params).inner();
    let extra = extra_segments(params.segments);

    let mut mesh = RadialMesh::with_capacity(3 + extra, 3 + 3 * extra);

    let mut inner =
        mesh.push_vertex(yaw(-0.5 * params.inner_arc as f64) * forward(params.inner_radius));
    // Outer arc is zero, so the apex needs no rotation
    let apex = mesh.push_vertex(forward(params.outer_radius));

    for _ in 0..=extra {
        let inner_next = mesh.push_vertex(rotation * mesh.vertex(inner));
        mesh.push_triangle(inner, apex, inner_next);
        inner = inner_next;
    }

    mesh
}
