//! Indexed polyhedron meshes.
//!
//! Purpose
//! - Immutable value snapshots: vertices, faces (cyclic index lists), and the
//!   derived edge set. Operations build new instances instead of mutating.
//!
//! Conventions
//! - Faces wind counterclockwise seen from outside (Newell normal points out).
//! - Every directed edge `(a, b)` belongs to exactly one face and its reverse to
//!   exactly one other face; the constructor enforces this together with
//!   connectivity.
//! - Metrics (`volume`, `surface_area`, `sphericity`) are not normalised by edge
//!   length; classification does that for display.

mod hull;
mod metrics;
mod peaks;
mod types;

pub use peaks::Peak;
pub use types::{Edge, Face, Polyhedron};

#[cfg(test)]
mod tests;
