//! # Config Crate
//!
//! Centralized configuration constants for radial mesh generation.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, DEFAULT_OUTER_RADIUS, DEFAULT_SEGMENTS};
//!
//! // Compare swept coordinates with a tolerance
//! let swept = 90f64.to_radians().sin();
//! assert!(approx_equal(swept, 1.0));
//!
//! // Shape defaults used when a host omits a parameter
//! assert_eq!(DEFAULT_OUTER_RADIUS, 1.0);
//! assert_eq!(DEFAULT_SEGMENTS, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Shape defaults match the host component's defaults
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
