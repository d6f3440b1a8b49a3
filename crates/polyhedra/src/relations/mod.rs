//! Relation table: directed edges `(from, op, options) → to` between named
//! solids, plus the closed vocabularies for operations and options.
//!
//! Purpose
//! - Decide which operations apply to a named solid and which target name a
//!   given option set resolves to. Geometry is not consulted here; the engine
//!   derives the face/peak-dependent fields (`using` candidates, a peak's
//!   kind and twist, `align`) and passes them in.
//!
//! Disambiguation
//! - An option left as `None` acts as a wildcard. If every candidate agrees on a
//!   field the option defaults to that value; if distinct targets remain the
//!   caller must supply it (`AmbiguousOptions`).

mod data;
mod types;

use std::collections::BTreeSet;

use tracing::debug;

pub use types::{Align, CapKind, Gyrate, Operation, Options};

use crate::error::{PolyError, Result};

/// One directed edge of the relation graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationEdge {
    pub from: String,
    pub op: Operation,
    pub to: String,
    pub using: Option<CapKind>,
    pub gyrate: Option<Gyrate>,
    pub align: Option<Align>,
}

/// Read-only relation graph.
#[derive(Clone, Debug, Default)]
pub struct RelationTable {
    edges: Vec<RelationEdge>,
}

impl RelationTable {
    pub fn new(edges: Vec<RelationEdge>) -> Self {
        Self { edges }
    }

    /// The relation graph between the solids in the standard catalog.
    pub fn standard() -> Self {
        Self::new(data::standard_edges())
    }

    pub fn edges(&self) -> &[RelationEdge] {
        &self.edges
    }

    pub fn get_relations(&self, name: &str, op: Operation) -> Vec<&RelationEdge> {
        self.edges
            .iter()
            .filter(|e| e.from == name && e.op == op)
            .collect()
    }

    pub fn get_operations(&self, name: &str) -> BTreeSet<Operation> {
        self.edges
            .iter()
            .filter(|e| e.from == name)
            .map(|e| e.op)
            .collect()
    }

    /// Every name mentioned on either end of an edge.
    pub fn names(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|e| [e.from.as_str(), e.to.as_str()])
            .collect()
    }

    /// Options fixed by the table alone: a field is set when all edges for
    /// `(name, op)` share the same non-absent value.
    pub fn default_options(&self, name: &str, op: Operation) -> Options {
        let edges = self.get_relations(name, op);
        Options {
            gyrate: shared(edges.iter().map(|e| e.gyrate)),
            using: shared(edges.iter().map(|e| e.using)),
        }
    }

    /// Option sets worth trying for `(name, op)`: the cross product of each
    /// field's distinct values, keeping a field open when it cannot change the
    /// outcome.
    ///
    /// Only `+` takes caller options; `-` and `g` read cap kind and twist off
    /// the peak, so every other operation gets the empty set.
    pub fn option_choices(&self, name: &str, op: Operation) -> Vec<Options> {
        if op != Operation::Augment {
            return vec![Options::default()];
        }
        let edges = self.get_relations(name, op);
        let gyrates = distinct(edges.iter().filter_map(|e| e.gyrate).collect());
        let usings = distinct(edges.iter().filter_map(|e| e.using).collect());
        gyrates
            .iter()
            .flat_map(|&gyrate| usings.iter().map(move |&using| Options { gyrate, using }))
            .collect()
    }
}

fn distinct<T: Copy>(values: BTreeSet<T>) -> Vec<Option<T>> {
    if values.len() > 1 {
        values.into_iter().map(Some).collect()
    } else {
        vec![None]
    }
}

fn shared<T: PartialEq + Copy>(mut values: impl Iterator<Item = Option<T>>) -> Option<T> {
    let first = values.next()??;
    values.all(|v| v == Some(first)).then_some(first)
}

/// Narrow `candidates` to the single target selected by `options` and the
/// engine-derived `align`.
pub fn resolve<'a>(
    name: &str,
    op: Operation,
    candidates: &[&'a RelationEdge],
    options: &Options,
    align: Option<Align>,
) -> Result<&'a RelationEdge> {
    let matching: Vec<&'a RelationEdge> = candidates
        .iter()
        .copied()
        .filter(|e| wildcard(e.gyrate, options.gyrate))
        .filter(|e| wildcard(e.using, options.using))
        .filter(|e| wildcard(e.align, align))
        .collect();
    let Some(&first) = matching.first() else {
        return Err(PolyError::UnsupportedOperation {
            name: name.to_string(),
            op,
        });
    };
    let targets: BTreeSet<&str> = matching.iter().map(|e| e.to.as_str()).collect();
    if targets.len() > 1 {
        return Err(PolyError::AmbiguousOptions {
            name: name.to_string(),
            op,
            candidates: targets.into_iter().map(String::from).collect(),
        });
    }
    debug!(from = name, op = %op, to = %first.to, "resolved relation");
    Ok(first)
}

fn wildcard<T: PartialEq>(edge: Option<T>, wanted: Option<T>) -> bool {
    match (edge, wanted) {
        (Some(e), Some(w)) => e == w,
        _ => true,
    }
}

#[cfg(test)]
mod tests;
