//! Ring sector: both boundaries sweep the same arc.

use super::quad_strip;
use crate::mesh::RadialMesh;
use crate::params::ShapeParameters;
use crate::rotation::{forward, yaw, RotationStep};

/// Builds a ring sector subdivided into `segments` quads.
///
/// Both start vertices share one offset of `-inner_arc / 2`, so the ring
/// is symmetric about the forward axis.
pub fn build_annulus(params: &ShapeParameters) -> RadialMesh {
    let offset = yaw(-0.5 * params.inner_arc as f64);

    quad_strip(
        offset * forward(params.inner_radius),
        offset * forward(params.outer_radius),
        RotationStep::from_params(params),
        params.segments,
    )
}
