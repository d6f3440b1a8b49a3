//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants instead of a runtime config. Every predicate in the crate
//!   uses one of these two; tests compare against the same values.

/// CRF acceptance tolerance: edge-length uniformity, strict convexity margin,
/// distance-spectrum comparison.
pub const PRECISION: f64 = 1e-3;

/// Geometric tolerance for coplanarity, concyclicity and vertex matching
/// during construction and peak/band detection.
pub const EPS: f64 = 1e-6;
