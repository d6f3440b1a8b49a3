//! Reference catalog: named solids built from closed-form coordinates, plus
//! the relation graph that connects them.
//!
//! Purpose
//! - The explicit, immutable context every engine call receives by reference.
//!   Build it once with `Catalog::new()`; it is `Send + Sync` and never
//!   mutated afterwards.
//!
//! Construction
//! - Orbit coordinates for the Platonic and Archimedean members. The snubs
//!   take even sign changes of even permutations, which fixes one hand.
//! - Ring stacks for prisms, antiprisms and the capped Johnson solids.
//! - Apex placement and vertex removal for the augmented and diminished
//!   families. Cupolae glued onto the truncated solids, and cupolae turned
//!   or cut from the rhombicosidodecahedron.
//! - The elementary Johnson solids without a ring structure: polynomial
//!   roots found by bisection for J84 and J86, solved constants for J85,
//!   coordinates for J91, and the icosidodecahedron's top layers for J92.
//! - Every solid is faceted by `Polyhedron::from_vertices` at unit edge length.
//!   J88, J89 and J90 are not built.

mod build;

use std::collections::BTreeMap;

use tracing::debug;

use crate::classification::names::unescape_name;
use crate::error::{PolyError, Result};
use crate::polyhedron::Polyhedron;
use crate::relations::RelationTable;

#[derive(Clone, Debug)]
pub struct Catalog {
    solids: BTreeMap<String, Polyhedron>,
    relations: RelationTable,
}

impl Catalog {
    /// Build every catalog solid and the standard relation table.
    pub fn new() -> Result<Self> {
        let solids = build::all_solids()?;
        let relations = RelationTable::standard();
        debug!(solids = solids.len(), relations = relations.edges().len(), "catalog built");
        Ok(Self { solids, relations })
    }

    /// Look up a solid by canonical or dash-escaped name.
    pub fn get(&self, name: &str) -> Result<&Polyhedron> {
        let key = unescape_name(name);
        self.solids
            .get(&key)
            .ok_or(PolyError::UnknownSolid(key))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.solids.contains_key(&unescape_name(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.solids.keys().map(String::as_str)
    }

    pub fn solids(&self) -> impl Iterator<Item = &Polyhedron> {
        self.solids.values()
    }

    pub fn relations(&self) -> &RelationTable {
        &self.relations
    }
}

#[cfg(test)]
mod tests;
