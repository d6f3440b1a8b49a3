//! Convex regular-faced polyhedra: mesh model, catalog, operations, and
//! classification.
//!
//! Layout
//! - `polyhedron`: immutable indexed meshes, metrics, and peak detection.
//! - `catalog`: the named reference solids and the relation graph, built once
//!   and passed by reference into every engine call.
//! - `relations`: operation vocabulary and the `(from, op, options) → to` table.
//! - `operations`: augment, diminish, gyrate, elongate/gyroelongate, and their
//!   reverses.
//! - `validity`: CRF certification and identity against the catalog.
//! - `classification`: symmetry group, order, names, and display metrics.
//! - `walk`: replayable random operation chains.
//!
//! API Policy
//! - Everything is synchronous and side-effect free apart from `tracing`
//!   events; a `Catalog` is `Send + Sync` and can be shared across threads.

pub mod catalog;
pub mod cfg;
pub mod classification;
pub mod error;
pub mod geometry;
pub mod operations;
pub mod polyhedron;
pub mod relations;
pub mod validity;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use catalog::Catalog;
pub use error::{PolyError, Result};
pub use polyhedron::{Peak, Polyhedron};
pub use relations::{Operation, Options};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::classification::{describe, get_order, get_symmetry, Group, SolidInfo, Symmetry};
    pub use crate::error::{PolyError, Result};
    pub use crate::geometry::Vec3;
    pub use crate::operations::{apply_operation, can_augment, eligible_arguments, Argument};
    pub use crate::polyhedron::{Peak, Polyhedron};
    pub use crate::relations::{Align, CapKind, Gyrate, Operation, Options, RelationTable};
    pub use crate::validity::{is_proper_polyhedron, is_same, validate};
    pub use crate::walk::{random_walk, ReplayToken};
}
