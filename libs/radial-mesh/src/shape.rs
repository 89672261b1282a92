//! # Shape Selection
//!
//! Maps a parameter set to exactly one of the five shape builders.

use crate::builders;
use crate::mesh::RadialMesh;
use crate::options::SectorOffsetPolicy;
use crate::params::ShapeParameters;
use std::fmt;

/// The five radial topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Pie slice or full disc pivoting on the true center (`inner_radius <= 0`)
    Sector,
    /// Ring sector with equal inner and outer arcs
    Annulus,
    /// Inner arc converging on a single apex (`outer_arc == 0`)
    Wedge,
    /// Wide inner edge tapering to a narrower outer edge
    Narrowing,
    /// Outer edge wider than the inner edge
    Fan,
}

impl ShapeKind {
    /// Picks the builder for `params`.
    ///
    /// Every parameter set maps to exactly one kind; nothing is rejected here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use radial_mesh::{ShapeKind, ShapeParameters};
    ///
    /// let ring = ShapeParameters::new(90, 1.0, 90, 2.0, 4);
    /// assert_eq!(ShapeKind::select(&ring), ShapeKind::Annulus);
    ///
    /// let disc = ShapeParameters::new(0, 0.0, 360, 1.0, 8);
    /// assert_eq!(ShapeKind::select(&disc), ShapeKind::Sector);
    /// ```
    pub fn select(params: &ShapeParameters) -> Self {
        if !params.has_inner_radius() {
            Self::Sector
        } else if params.inner_arc == params.outer_arc {
            Self::Annulus
        } else if params.outer_arc == 0 {
            Self::Wedge
        } else if params.outer_arc < params.inner_arc {
            Self::Narrowing
        } else {
            Self::Fan
        }
    }

    /// Runs this kind's builder. No recentering is applied.
    pub fn build(self, params: &ShapeParameters, sector_offset: SectorOffsetPolicy) -> RadialMesh {
        match self {
            Self::Sector => builders::build_sector(params, sector_offset),
            Self::Annulus => builders::build_annulus(params),
            Self::Wedge => builders::build_wedge(params),
            Self::Narrowing => builders::build_narrowing(params),
            Self::Fan => builders::build_fan(params),
        }
    }

    /// True when this kind emits a quad strip (two triangles per segment).
    ///
    /// A fan with no inner arc pivots on a single vertex instead.
    pub fn is_quad_strip(self, params: &ShapeParameters) -> bool {
        match self {
            Self::Annulus | Self::Narrowing => true,
            Self::Fan => params.inner_arc != 0,
            Self::Sector | Self::Wedge => false,
        }
    }

    /// Number of vertices this kind emits for `params`.
    ///
    /// `segments < 1` counts as a single segment, since only the seed
    /// geometry is produced.
    pub fn vertex_count(self, params: &ShapeParameters) -> usize {
        let segments = params.segments.max(1) as usize;
        if self.is_quad_strip(params) {
            2 * segments + 2
        } else {
            segments + 2
        }
    }

    /// Length of the index stream this kind emits for `params`.
    pub fn index_count(self, params: &ShapeParameters) -> usize {
        let segments = params.segments.max(1) as usize;
        if self.is_quad_strip(params) {
            6 * segments
        } else {
            3 * segments
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sector => "sector",
            Self::Annulus => "annulus",
            Self::Wedge => "wedge",
            Self::Narrowing => "narrowing",
            Self::Fan => "fan",
        };
        f.write_str(name)
    }
}
