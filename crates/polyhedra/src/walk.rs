//! Random operation walks over the catalog (replayable).
//!
//! Purpose
//! - Drive the engine through long chains of operations from a starting
//!   solid, for exploration from the CLI and for property tests.
//!
//! Model
//! - Each step picks an operation from the relation table, then an eligible
//!   argument and an option set, all uniformly. Combinations the table cannot
//!   resolve (a cap kind that does not fit the face, a gyrate choice with no
//!   edge) are skipped and another is drawn; a step fails only when nothing
//!   applies.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{PolyError, Result};
use crate::operations::{apply_operation, eligible_arguments, Argument};
use crate::polyhedron::Polyhedron;
use crate::relations::{Operation, Options};

/// Replay token to make walks reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One applied operation.
#[derive(Clone, Debug)]
pub struct WalkStep {
    pub op: Operation,
    pub argument: Argument,
    pub options: Options,
    pub result: Polyhedron,
}

/// Errors that only mean "this draw does not apply here".
fn is_skippable(e: &PolyError) -> bool {
    matches!(
        e,
        PolyError::UnsupportedOperation { .. }
            | PolyError::NoValidTarget { .. }
            | PolyError::AmbiguousOptions { .. }
    )
}

/// Apply one uniformly drawn operation to `poly`, or `None` if the solid is
/// a dead end (no operation applies at all).
pub fn random_step(
    catalog: &Catalog,
    poly: &Polyhedron,
    rng: &mut StdRng,
) -> Result<Option<WalkStep>> {
    let table = catalog.relations();
    let mut ops: Vec<Operation> = table.get_operations(poly.name()).into_iter().collect();
    ops.shuffle(rng);
    for op in ops {
        let mut draws: Vec<(Argument, Options)> = eligible_arguments(catalog, op, poly)
            .into_iter()
            .flat_map(|arg| {
                table
                    .option_choices(poly.name(), op)
                    .into_iter()
                    .map(move |o| (arg.clone(), o))
            })
            .collect();
        draws.shuffle(rng);
        for (argument, options) in draws {
            match apply_operation(catalog, op, poly, &argument, &options) {
                Ok(result) => {
                    debug!(from = poly.name(), op = %op, to = result.name(), "walk step");
                    return Ok(Some(WalkStep {
                        op,
                        argument,
                        options,
                        result,
                    }));
                }
                Err(e) if is_skippable(&e) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    Ok(None)
}

/// Walk up to `steps` operations from the catalog solid `start`.
///
/// Stops early at a dead end. The same `(start, steps, token)` always yields
/// the same walk.
pub fn random_walk(
    catalog: &Catalog,
    start: &str,
    steps: usize,
    token: ReplayToken,
) -> Result<Vec<WalkStep>> {
    let mut rng = token.to_std_rng();
    let mut current = catalog.get(start)?.clone();
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
        let Some(step) = random_step(catalog, &current, &mut rng)? else {
            break;
        };
        current = step.result.clone();
        out.push(step);
    }
    info!(start, steps = out.len(), end = current.name(), "walk finished");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_replay_identically() {
        let catalog = Catalog::new().unwrap();
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = random_walk(&catalog, "cube", 6, tok).unwrap();
        let b = random_walk(&catalog, "cube", 6, tok).unwrap();
        let names = |w: &[WalkStep]| w.iter().map(|s| s.result.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
        assert!(!a.is_empty());
    }

    #[test]
    fn every_step_is_a_valid_catalog_solid() {
        let catalog = Catalog::new().unwrap();
        let w = random_walk(&catalog, "pentagonal prism", 8, ReplayToken { seed: 11, index: 0 })
            .unwrap();
        assert_eq!(w.len(), 8);
        for step in &w {
            crate::validity::validate(&catalog, &step.result).unwrap();
        }
    }

    #[test]
    fn unknown_start_is_an_error() {
        let catalog = Catalog::new().unwrap();
        let r = random_walk(&catalog, "snub cube", 3, ReplayToken { seed: 1, index: 0 });
        assert!(matches!(r, Err(PolyError::UnknownSolid(_))));
    }
}
