//! # Fan Shape
//!
//! Outer edge wider than the inner edge.
//!
//! With an inner arc the shape is a widening quad strip. Without one the
//! inner boundary collapses to a single pivot on the origin and the outer
//! arc sweeps around it.

use super::{centered_strip, pivot_fan};
use crate::mesh::RadialMesh;
use crate::params::ShapeParameters;
use crate::rotation::{forward, yaw, RotationStep};
use glam::DVec3;

/// Builds a widening shape (`outer_arc > inner_arc`).
pub fn build_fan(params: &ShapeParameters) -> RadialMesh {
    if params.inner_arc != 0 {
        return centered_strip(params);
    }

    let rim_start = yaw(-0.5 * params.outer_arc as f64) * forward(params.outer_radius);
    pivot_fan(
        DVec3::ZERO,
        rim_start,
        RotationStep::from_params(params).outer(),
        params.segments,
    )
}
