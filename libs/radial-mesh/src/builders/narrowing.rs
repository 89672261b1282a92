//! Trapezoid tapering from a wide inner edge to a narrower outer edge.

use super::centered_strip;
use crate::mesh::RadialMesh;
use crate::params::ShapeParameters;

/// Builds a tapering quad strip (`0 < outer_arc < inner_arc`).
pub fn build_narrowing(params: &ShapeParameters) -> RadialMesh {
    centered_strip(params)
}
