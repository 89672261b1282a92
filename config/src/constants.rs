//! # Configuration Constants
//!
//! Centralized constants for radial mesh generation. Default shape
//! parameters, precision values and safety limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Shape Defaults**: Parameter values used when a host omits a field
//! - **Limits**: Bounds enforced by strict validation

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for comparing generated coordinates.
///
/// Swept vertices are produced by repeated rotation, so a vertex that
/// should land exactly on a boundary may miss it by a few ulps.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let swept = (45f64.to_radians()).sin() * 2f64.sqrt();
/// assert!((swept - 1.0).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Number of degrees in a full turn.
///
/// # Example
///
/// ```rust
/// use config::constants::FULL_TURN_DEGREES;
///
/// let half_turn = FULL_TURN_DEGREES / 2;
/// assert_eq!(half_turn, 180);
/// ```
pub const FULL_TURN_DEGREES: i32 = 360;

// =============================================================================
// SHAPE DEFAULTS
// =============================================================================

/// Default inner arc in degrees.
///
/// Together with [`DEFAULT_INNER_RADIUS`] of zero this describes a full
/// disc, which is what a freshly created shape renders.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_INNER_ARC, FULL_TURN_DEGREES};
///
/// assert_eq!(DEFAULT_INNER_ARC, FULL_TURN_DEGREES);
/// ```
pub const DEFAULT_INNER_ARC: i32 = FULL_TURN_DEGREES;

/// Default inner radius.
///
/// Zero places the pivot at the shape's true center (sector shapes).
pub const DEFAULT_INNER_RADIUS: f64 = 0.0;

/// Default outer arc in degrees.
pub const DEFAULT_OUTER_ARC: i32 = FULL_TURN_DEGREES;

/// Default outer radius.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_INNER_RADIUS, DEFAULT_OUTER_RADIUS};
///
/// assert!(DEFAULT_OUTER_RADIUS > DEFAULT_INNER_RADIUS);
/// ```
pub const DEFAULT_OUTER_RADIUS: f64 = 1.0;

/// Default number of radial subdivisions.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SEGMENTS, MIN_SEGMENTS};
///
/// assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const DEFAULT_SEGMENTS: i32 = 3;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of segments accepted by strict validation.
///
/// Permissive builds accept anything and emit seed geometry only.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SEGMENTS;
///
/// let requested = 0;
/// assert!(requested < MIN_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: i32 = 1;

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from huge segment counts.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// True when `a` and `b` differ by less than [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// let radius = (3f64 * 3.0 + 4.0 * 4.0).sqrt();
/// assert!(approx_equal(radius, 5.0));
/// assert!(!approx_equal(radius, 5.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// True when `value` lies within [`EPSILON`] of zero.
///
/// Generated shapes are flat, so every `y` coordinate should pass this.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
