//! Pie slice or full disc around the true center.

use super::pivot_fan;
use crate::mesh::RadialMesh;
use crate::options::SectorOffsetPolicy;
use crate::params::ShapeParameters;
use crate::rotation::{forward, yaw, RotationStep};
use glam::DVec3;

/// Builds a sector pivoting on the origin.
///
/// Without an inner arc the rim starts at `-outer_arc / 2` and the sector
/// is symmetric. With one, [`SectorOffsetPolicy::InnerArc`] starts the rim
/// at `+inner_arc` instead, so the sector is not centered.
pub fn build_sector(params: &ShapeParameters, policy: SectorOffsetPolicy) -> RadialMesh {
    let offset = match policy {
        SectorOffsetPolicy::InnerArc if params.inner_arc != 0 => params.inner_arc as f64,
        _ => -0.5 * params.outer_arc as f64,
    };

    pivot_fan(
        DVec3::ZERO,
        yaw(offset) * forward(params.outer_radius),
        RotationStep::from_params(params).outer(),
        params.segments,
    )
}
