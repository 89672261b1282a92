//! # Build Options
//!
//! Runtime policy for a build: how strictly parameters are checked and
//! where a sector with a non-zero inner arc starts its sweep.

use serde::{Deserialize, Serialize};

/// How parameters are checked before building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Accept every input. Degenerate parameters yield degenerate geometry.
    #[default]
    Permissive,
    /// Reject `segments < 1`, negative or non-finite radii and oversized meshes.
    Strict,
}

/// Start offset of the sweep for sector shapes (`inner_radius <= 0`).
///
/// With `inner_arc == 0` both policies center the sector on the forward
/// axis. They only differ when a sector is given a non-zero inner arc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorOffsetPolicy {
    /// Rotate the rim start by `+inner_arc` degrees, as the host component always has.
    #[default]
    InnerArc,
    /// Rotate the rim start by `-outer_arc / 2` degrees, like every other shape.
    CenteredOnOuterArc,
}

/// Options for [`crate::build_with`].
///
/// # Example
///
/// ```rust
/// use radial_mesh::{BuildOptions, SectorOffsetPolicy, ValidationMode};
///
/// let options = BuildOptions::strict();
/// assert_eq!(options.validation, ValidationMode::Strict);
/// assert_eq!(options.sector_offset, SectorOffsetPolicy::InnerArc);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Parameter checking mode
    pub validation: ValidationMode,
    /// Sweep start policy for sector shapes
    pub sector_offset: SectorOffsetPolicy,
}

impl BuildOptions {
    /// Default options with strict validation.
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }

    /// Returns a copy using the given sector offset policy.
    pub fn with_sector_offset(mut self, policy: SectorOffsetPolicy) -> Self {
        self.sector_offset = policy;
        self
    }
}
