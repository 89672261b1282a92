//! # Shape Builders
//!
//! One pure function per topology. Each takes the shape parameters and
//! returns a freshly built mesh in the shape's own frame: the pivot sits
//! at the origin and the shape is centered on the forward (+Z) axis.
//! Recentering on the inner arc is applied afterwards by [`crate::build_with`].
//!
//! Two emission patterns are shared:
//! - **Quad strip**: inner/outer vertex pairs joined by two triangles per segment
//! - **Pivot fan**: one fixed vertex joined to a swept rim

mod annulus;
mod fan;
mod narrowing;
mod sector;
mod wedge;

#[cfg(test)]
mod tests;

pub use annulus::build_annulus;
pub use fan::build_fan;
pub use narrowing::build_narrowing;
pub use sector::build_sector;
pub use wedge::build_wedge;

use crate::mesh::RadialMesh;
use crate::params::ShapeParameters;
use crate::rotation::{forward, yaw, RotationStep};
use glam::{DQuat, DVec3};

/// Segments actually swept after the seed. Non-positive counts sweep nothing.
#[inline]
fn extra_segments(segments: i32) -> usize {
    segments.max(1) as usize - 1
}

/// Emits a quad strip between two swept boundaries.
///
/// Vertex layout: `0` inner start, `1` outer start, then (outer, inner)
/// pairs for every segment end. Each segment is the pair of triangles
/// `(inner, outer, outer_next)` and `(inner, outer_next, inner_next)`.
fn quad_strip(inner_start: DVec3, outer_start: DVec3, step: RotationStep, segments: i32) -> RadialMesh {
    let inner_rotation = step.inner();
    let outer_rotation = step.outer();
    let extra = extra_segments(segments);

    let mut mesh = RadialMesh::with_capacity(4 + 2 * extra, 6 + 6 * extra);

    let mut inner = mesh.push_vertex(inner_start);
    let mut outer = mesh.push_vertex(outer_start);

    for _ in 0..=extra {
        let outer_next = mesh.push_vertex(outer_rotation * mesh.vertex(outer));
        let inner_next = mesh.push_vertex(inner_rotation * mesh.vertex(inner));

        mesh.push_triangle(inner, outer, outer_next);
        mesh.push_triangle(inner, outer_next, inner_next);

        inner = inner_next;
        outer = outer_next;
    }

    mesh
}

/// Emits a triangle fan around a fixed pivot vertex.
///
/// Vertex layout: `0` pivot, `1` rim start, then one rim vertex per
/// segment end. Each segment is the triangle `(pivot, rim, rim_next)`.
fn pivot_fan(pivot: DVec3, rim_start: DVec3, rotation: DQuat, segments: i32) -> RadialMesh {
    let extra = extra_segments(segments);

    let mut mesh = RadialMesh::with_capacity(3 + extra, 3 + 3 * extra);

    let pivot = mesh.push_vertex(pivot);
    let mut rim = mesh.push_vertex(rim_start);

    for _ in 0..=extra {
        let rim_next = mesh.push_vertex(rotation * mesh.vertex(rim));
        mesh.push_triangle(pivot, rim, rim_next);
        rim = rim_next;
    }

    mesh
}

/// Quad strip with each boundary centered on the forward axis by half its own arc.
fn centered_strip(params: &ShapeParameters) -> RadialMesh {
    let inner_start = yaw(-0.5 * params.inner_arc as f64) * forward(params.inner_radius);
    let outer_start = yaw(-0.5 * params.outer_arc as f64) * forward(params.outer_radius);

    quad_strip(
        inner_start,
        outer_start,
        RotationStep::from_params(params),
        params.segments,
    )
}
