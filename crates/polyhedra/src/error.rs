//! Error taxonomy for the polyhedron engine.
//!
//! Every failure surfaces as a typed `PolyError`; nothing is downgraded to a
//! best-effort result.

use thiserror::Error;

use crate::relations::Operation;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolyError {
    /// Malformed mesh topology (non-manifold edge, bad index, degenerate hull).
    #[error("structural error: {0}")]
    Structural(String),

    /// No relation edge matches the requested symbol and options.
    #[error("unsupported operation '{op}' on {name}")]
    UnsupportedOperation { name: String, op: Operation },

    /// The argument is not an eligible face or peak for this operation.
    #[error("no valid target for '{op}' on {name}: {detail}")]
    NoValidTarget {
        name: String,
        op: Operation,
        detail: String,
    },

    /// Several distinct targets remain; the caller has to pick options.
    #[error("ambiguous options for '{op}' on {name}: candidates {candidates:?}")]
    AmbiguousOptions {
        name: String,
        op: Operation,
        candidates: Vec<String>,
    },

    /// Unrecognised symmetry group letter or subscript.
    #[error("invalid symmetry group: {0}")]
    InvalidGroup(String),

    /// Result failed the convexity, edge-uniformity, or identity check.
    #[error("{name} is not a valid result: {reason}")]
    ValidityViolation { name: String, reason: String },

    #[error("unknown solid: {0}")]
    UnknownSolid(String),

    #[error("cannot parse {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PolyError>;
