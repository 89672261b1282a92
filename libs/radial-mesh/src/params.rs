//! # Shape Parameters
//!
//! The five values a host supplies to describe a radial shape.

use crate::error::MeshError;
use crate::mesh::RadialMesh;
use config::constants::{
    DEFAULT_INNER_ARC, DEFAULT_INNER_RADIUS, DEFAULT_OUTER_ARC, DEFAULT_OUTER_RADIUS,
    DEFAULT_SEGMENTS, MIN_SEGMENTS,
};
use serde::{Deserialize, Serialize};

/// Input record for a radial shape.
///
/// Field names serialize in camelCase (`innerArc`, `innerRadius`,
/// `outerArc`, `outerRadius`, `segments`) so a host configuration object
/// can be deserialized directly. Missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use radial_mesh::ShapeParameters;
///
/// // Quarter ring, four segments
/// let params = ShapeParameters::new(90, 1.0, 90, 2.0, 4);
/// let mesh = params.build().unwrap();
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeParameters {
    /// Sweep of the inner boundary in degrees
    pub inner_arc: i32,
    /// Distance from the pivot to the inner boundary
    pub inner_radius: f64,
    /// Sweep of the outer boundary in degrees
    pub outer_arc: i32,
    /// Distance from the pivot to the outer boundary
    pub outer_radius: f64,
    /// Number of radial subdivisions
    pub segments: i32,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            inner_arc: DEFAULT_INNER_ARC,
            inner_radius: DEFAULT_INNER_RADIUS,
            outer_arc: DEFAULT_OUTER_ARC,
            outer_radius: DEFAULT_OUTER_RADIUS,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl ShapeParameters {
    /// Creates a parameter set.
    pub fn new(
        inner_arc: i32,
        inner_radius: f64,
        outer_arc: i32,
        outer_radius: f64,
        segments: i32,
    ) -> Self {
        Self {
            inner_arc,
            inner_radius,
            outer_arc,
            outer_radius,
            segments,
        }
    }

    /// Returns true when there is space between the pivot and the inner arc.
    #[inline]
    pub fn has_inner_radius(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// Checks the parameters against the strict validation rules.
    ///
    /// Rejects `segments < 1` and radii that are negative or not finite.
    /// Arcs are not range checked; sweeps beyond a full turn simply overlap.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.segments < MIN_SEGMENTS {
            return Err(MeshError::invalid_parameter(
                "segments",
                format!("must be at least {}, got {}", MIN_SEGMENTS, self.segments),
            ));
        }

        for (name, radius) in [
            ("innerRadius", self.inner_radius),
            ("outerRadius", self.outer_radius),
        ] {
            if !radius.is_finite() {
                return Err(MeshError::invalid_parameter(
                    name,
                    format!("must be finite, got {}", radius),
                ));
            }
            if radius < 0.0 {
                return Err(MeshError::invalid_parameter(
                    name,
                    format!("must be non-negative, got {}", radius),
                ));
            }
        }

        Ok(())
    }

    /// Builds the mesh with default options.
    pub fn build(&self) -> Result<RadialMesh, MeshError> {
        crate::build(self)
    }
}
