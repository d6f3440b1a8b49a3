//! Operation engine: augment, diminish, gyrate, and band insertion/removal.
//!
//! Purpose
//! - `apply_operation` turns one named solid into another. The relation table
//!   picks the target name; the geometry is rebuilt here and the result is
//!   tagged with that name.
//!
//! Design
//! - Strictly functional: inputs are borrowed, a fresh `Polyhedron` comes back.
//! - The validity oracle is not called here; callers (and the tests) check
//!   results explicitly with `validity::validate`.
//! - Caps are placed by rigidly mapping a catalog template (the cap solid's
//!   largest face) onto the target face, so every new vertex inherits the
//!   template's exact coordinates.

mod augment;
mod band;
mod cap;

use tracing::debug;

pub use augment::can_augment;
pub(crate) use augment::convex_cap_points;

use crate::catalog::Catalog;
use crate::error::{PolyError, Result};
use crate::polyhedron::{Peak, Polyhedron};
use crate::relations::{resolve, Operation, Options};

/// What an operation acts on.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    /// The solid as a whole (`P`, `A`, `~P`, `~A`).
    Whole,
    /// A face index (`+`).
    Face(usize),
    /// A peak (`-`, `g`).
    Peak(Peak),
}

/// Apply `op` to `poly` and tag the result with the resolved target name.
pub fn apply_operation(
    catalog: &Catalog,
    op: Operation,
    poly: &Polyhedron,
    arg: &Argument,
    options: &Options,
) -> Result<Polyhedron> {
    let candidates = catalog.relations().get_relations(poly.name(), op);
    if candidates.is_empty() {
        return Err(PolyError::UnsupportedOperation {
            name: poly.name().to_string(),
            op,
        });
    }
    debug!(name = poly.name(), op = %op, candidates = candidates.len(), "apply");
    match (op, arg) {
        (Operation::Augment, Argument::Face(face)) => {
            augment::augment(catalog, poly, *face, &candidates, options)
        }
        (Operation::Diminish | Operation::Gyrate, Argument::Peak(peak)) => {
            let peak = current_peak(poly, op, peak)?;
            let derived = peak_options(poly, op, peak, options)?;
            let align = cap::peak_align(poly, peak, &candidates)?;
            let edge = resolve(poly.name(), op, &candidates, &derived, align)?;
            if op == Operation::Diminish {
                cap::diminish(poly, peak, &edge.to)
            } else {
                cap::gyrate(poly, peak, &edge.to)
            }
        }
        (Operation::Elongate | Operation::Gyroelongate, Argument::Whole) => {
            let edge = resolve(poly.name(), op, &candidates, options, None)?;
            band::elongate(poly, op == Operation::Gyroelongate, &edge.to)
        }
        (Operation::ShortenPrism | Operation::ShortenAntiprism, Argument::Whole) => {
            let edge = resolve(poly.name(), op, &candidates, options, None)?;
            band::shorten(poly, op == Operation::ShortenAntiprism, &edge.to)
        }
        _ => Err(no_target(poly, op, format!("argument {arg:?} does not fit"))),
    }
}

/// Arguments `op` accepts on `poly`: capped peaks for `-`/`g`, augmentable
/// faces for `+`, the whole solid otherwise.
pub fn eligible_arguments(catalog: &Catalog, op: Operation, poly: &Polyhedron) -> Vec<Argument> {
    match op {
        Operation::Diminish | Operation::Gyrate => {
            poly.peaks().into_iter().map(Argument::Peak).collect()
        }
        Operation::Augment => poly
            .f_indices()
            .filter(|&f| can_augment(catalog, poly, f))
            .map(Argument::Face)
            .collect(),
        _ => vec![Argument::Whole],
    }
}

/// Options read off the peak itself: its cap kind and its twist. A caller
/// option that contradicts the geometry leaves no target.
fn peak_options(
    poly: &Polyhedron,
    op: Operation,
    peak: &Peak,
    options: &Options,
) -> Result<Options> {
    if let Some(using) = options.using.filter(|&u| u != peak.kind) {
        return Err(no_target(poly, op, format!("peak is {}, not {using}", peak.kind)));
    }
    let twist = cap::twist(poly, peak)?;
    if let (Some(wanted), Some(actual)) = (options.gyrate, twist) {
        if wanted != actual {
            return Err(no_target(poly, op, format!("peak is {actual}, not {wanted}")));
        }
    }
    Ok(Options {
        gyrate: twist.or(options.gyrate),
        using: Some(peak.kind),
    })
}

/// Peaks are derived data; a stale peak from another mesh state is rejected.
fn current_peak<'a>(poly: &Polyhedron, op: Operation, peak: &'a Peak) -> Result<&'a Peak> {
    let peaks = poly.peaks();
    if peaks.is_empty() {
        return Err(no_target(poly, op, "solid has no peaks".to_string()));
    }
    if !peaks.contains(peak) {
        return Err(no_target(poly, op, "peak is not on this solid".to_string()));
    }
    Ok(peak)
}

pub(crate) fn no_target(poly: &Polyhedron, op: Operation, detail: String) -> PolyError {
    PolyError::NoValidTarget {
        name: poly.name().to_string(),
        op,
        detail,
    }
}
