//! # Rotation Steps
//!
//! All rotation happens about the vertical (+Y) axis, in the XZ plane.
//! Angles are carried in degrees and converted to radians only when a
//! quaternion is formed.

use crate::params::ShapeParameters;
use glam::{DQuat, DVec3};

/// Rotation about +Y by `degrees`.
///
/// Rotating `(0, 0, r)` by `a` yields `(r sin a, 0, r cos a)`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use radial_mesh::rotation::yaw;
///
/// let v = yaw(90.0) * DVec3::Z;
/// assert!(v.abs_diff_eq(DVec3::X, 1e-12));
/// ```
#[inline]
pub fn yaw(degrees: f64) -> DQuat {
    DQuat::from_rotation_y(degrees.to_radians())
}

/// A point on the forward (+Z) axis at `radius`.
#[inline]
pub fn forward(radius: f64) -> DVec3 {
    DVec3::new(0.0, 0.0, radius)
}

/// Per-segment angular increments of the inner and outer boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    /// Degrees swept by the inner boundary per segment
    pub start_angle_step: f64,
    /// Degrees swept by the outer boundary per segment
    pub end_angle_step: f64,
}

impl RotationStep {
    /// Derives the steps from a parameter set.
    ///
    /// `segments <= 0` is not guarded: zero yields non-finite steps.
    pub fn from_params(params: &ShapeParameters) -> Self {
        let segments = params.segments as f64;
        Self {
            start_angle_step: params.inner_arc as f64 / segments,
            end_angle_step: params.outer_arc as f64 / segments,
        }
    }

    /// Rotation advancing the inner boundary by one segment.
    #[inline]
    pub fn inner(&self) -> DQuat {
        yaw(self.start_angle_step)
    }

    /// Rotation advancing the outer boundary by one segment.
    #[inline]
    pub fn outer(&self) -> DQuat {
        yaw(self.end_angle_step)
    }
}
