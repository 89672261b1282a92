//! # Radial Mesh
//!
//! Procedural generation of flat radial shapes: discs, pie slices, rings,
//! wedges and fans. Five parameters go in, a position buffer and a
//! triangle index stream come out.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParameters → ShapeKind::select → builder → recenter → RadialMesh
//! ```
//!
//! ## Shapes
//!
//! - **Sector**: `inner_radius <= 0`, fan around the true center
//! - **Annulus**: equal inner and outer arcs
//! - **Wedge**: `outer_arc == 0`, inner arc converging on an apex
//! - **Narrowing**: outer arc smaller than the inner arc
//! - **Fan**: outer arc larger than the inner arc
//!
//! Shapes lie in the XZ plane, centered on the forward (+Z) axis. When the
//! shape has an inner radius the whole mesh is shifted so the origin sits
//! on the inner arc instead of the pivot.
//!
//! ## Usage
//!
//! ```rust
//! use radial_mesh::{build, ShapeParameters};
//!
//! let disc = ShapeParameters::new(0, 0.0, 360, 1.0, 8);
//! let mesh = build(&disc).unwrap();
//! assert_eq!(mesh.triangle_count(), 8);
//!
//! let (positions, indices) = mesh.into_buffers();
//! assert_eq!(indices.len(), 24);
//! assert_eq!(positions[0], glam::DVec3::ZERO);
//! ```

pub mod builders;
pub mod error;
pub mod mesh;
pub mod options;
pub mod params;
pub mod rotation;
pub mod shape;

pub use error::MeshError;
pub use mesh::RadialMesh;
pub use options::{BuildOptions, SectorOffsetPolicy, ValidationMode};
pub use params::ShapeParameters;
pub use shape::ShapeKind;

use config::constants::{MAX_VERTICES, MIN_SEGMENTS};
use glam::DVec3;

/// Builds a radial mesh with default (permissive) options.
///
/// Permissive builds never fail; the `Result` is kept so callers can switch
/// to [`build_with`] and strict validation without changing call sites.
pub fn build(params: &ShapeParameters) -> Result<RadialMesh, MeshError> {
    build_with(params, &BuildOptions::default())
}

/// Builds a radial mesh.
///
/// # Arguments
///
/// * `params` - Shape parameters
/// * `options` - Validation mode and sector offset policy
///
/// # Errors
///
/// Only with [`ValidationMode::Strict`]: invalid parameters are reported as
/// [`MeshError::InvalidParameter`], oversized meshes as
/// [`MeshError::TooManyVertices`].
///
/// # Example
///
/// ```rust
/// use radial_mesh::{build_with, BuildOptions, ShapeParameters};
///
/// let params = ShapeParameters::new(90, 1.0, 90, 2.0, 0);
/// assert!(build_with(&params, &BuildOptions::strict()).is_err());
/// assert!(build_with(&params, &BuildOptions::default()).is_ok());
/// ```
pub fn build_with(params: &ShapeParameters, options: &BuildOptions) -> Result<RadialMesh, MeshError> {
    let kind = ShapeKind::select(params);

    match options.validation {
        ValidationMode::Strict => {
            params.validate()?;
            let count = kind.vertex_count(params);
            if count > MAX_VERTICES {
                return Err(MeshError::TooManyVertices {
                    count,
                    max: MAX_VERTICES,
                });
            }
        }
        ValidationMode::Permissive => {
            if params.segments < MIN_SEGMENTS {
                tracing::warn!(
                    segments = params.segments,
                    "segment count below minimum, emitting seed geometry only"
                );
            }
        }
    }

    let mut mesh = kind.build(params, options.sector_offset);
    recenter(&mut mesh, params.inner_radius);

    tracing::debug!(
        shape = %kind,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "built radial mesh"
    );

    Ok(mesh)
}

/// Moves the origin from the pivot onto the inner arc.
///
/// Subtracts `inner_radius` from every z coordinate. Does nothing unless
/// `inner_radius > 0`, so sectors keep their pivot at the true center.
pub fn recenter(mesh: &mut RadialMesh, inner_radius: f64) {
    if inner_radius > 0.0 {
        tracing::trace!(inner_radius, "recentering on inner arc");
        mesh.translate(DVec3::new(0.0, 0.0, -inner_radius));
    }
}
