//! Peak removal (`-`) and peak rotation (`g`).

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use tracing::debug;

use super::augment::opposite_face_sides;
use crate::cfg::EPS;
use crate::error::{PolyError, Result};
use crate::geometry::{centroid, distance, rotate_about, Vec3};
use crate::polyhedron::{Face, Peak, Polyhedron};
use crate::relations::{Align, Gyrate, RelationEdge};

/// Drop the peak's faces and close the hole with its boundary polygon.
pub(super) fn diminish(poly: &Polyhedron, peak: &Peak, to: &str) -> Result<Polyhedron> {
    let removed: HashSet<usize> = peak.faces.iter().copied().collect();
    let mut faces: Vec<Face> = poly
        .faces()
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, f)| f.clone())
        .collect();
    faces.push(peak.boundary.clone());
    debug!(name = poly.name(), kind = %peak.kind, to, "diminish");
    Polyhedron::compacted(to, poly.vertex_vectors(), faces)
}

/// Twist of a cupola or rotunda against its surroundings.
///
/// `Ortho` when some cap face meets, across the boundary, an outside face
/// with as many sides as itself. Pyramids and caps over uniform surroundings
/// have no twist.
pub(super) fn twist(poly: &Polyhedron, peak: &Peak) -> Result<Option<Gyrate>> {
    if peak.kind.is_pyramid() {
        return Ok(None);
    }
    let normal = peak.normal(poly);
    let n = peak.boundary.len();
    let mut inside = Vec::with_capacity(n);
    let mut outside = Vec::with_capacity(n);
    for i in 0..n {
        let (a, b) = (peak.boundary[i], peak.boundary[(i + 1) % n]);
        let forward = poly.face_with_edge(a, b);
        let (face, a, b) = match forward {
            Some(f) if peak.faces.contains(&f) => (f, a, b),
            _ => {
                let f = poly.face_with_edge(b, a).ok_or_else(|| {
                    PolyError::Structural(format!("{}: open edge ({a}, {b})", poly.name()))
                })?;
                (f, b, a)
            }
        };
        inside.push(poly.faces()[face].len());
        outside.push(opposite_face_sides(poly, &normal, a, b)?);
    }
    if outside.iter().all(|&s| s == outside[0]) {
        return Ok(None);
    }
    let ortho = inside.iter().zip(&outside).any(|(x, y)| x == y);
    Ok(Some(if ortho { Gyrate::Ortho } else { Gyrate::Gyro }))
}

/// `Para` when the peak's base sits opposite a face of the same polygon
/// type (an earlier diminishment) or opposite another peak in ortho position.
pub(super) fn peak_align(
    poly: &Polyhedron,
    peak: &Peak,
    candidates: &[&RelationEdge],
) -> Result<Option<Align>> {
    if candidates.iter().all(|e| e.align.is_none()) {
        return Ok(None);
    }
    let normal = peak.normal(poly);
    let facing = |other: &Vec3| other.dot(&normal) < -1.0 + EPS;
    if poly
        .f_indices()
        .any(|f| poly.faces()[f].len() == peak.boundary.len() && facing(&poly.face_normal(f)))
    {
        return Ok(Some(Align::Para));
    }
    for other in poly.peaks() {
        if other == *peak || !facing(&other.normal(poly)) {
            continue;
        }
        if twist(poly, &other)? == Some(Gyrate::Ortho) {
            return Ok(Some(Align::Para));
        }
    }
    Ok(Some(Align::Meta))
}

/// Turn the peak one step about its boundary axis and rewire its faces to
/// the rotated boundary positions.
pub(super) fn gyrate(poly: &Polyhedron, peak: &Peak, to: &str) -> Result<Polyhedron> {
    let pts = peak.boundary_points(poly);
    let center = centroid(&pts);
    let axis = peak.normal(poly);
    let angle = 2.0 * PI / peak.boundary.len() as f64;
    let verts = poly.vertex_vectors();

    let mut vertices = verts.to_vec();
    for &v in &peak.interior {
        vertices[v] = rotate_about(&verts[v], &center, &axis, angle);
    }
    let mut moved: HashMap<usize, usize> = HashMap::new();
    for &b in &peak.boundary {
        let q = rotate_about(&verts[b], &center, &axis, angle);
        let nearest = peak
            .boundary
            .iter()
            .copied()
            .min_by(|&x, &y| distance(&verts[x], &q).total_cmp(&distance(&verts[y], &q)))
            .unwrap_or(b);
        moved.insert(b, nearest);
    }
    let in_peak: HashSet<usize> = peak.faces.iter().copied().collect();
    let faces = poly
        .faces()
        .iter()
        .enumerate()
        .map(|(i, f)| {
            if in_peak.contains(&i) {
                f.iter().map(|v| *moved.get(v).unwrap_or(v)).collect()
            } else {
                f.clone()
            }
        })
        .collect();
    debug!(name = poly.name(), kind = %peak.kind, to, "gyrate");
    Polyhedron::new(to, vertices, faces)
}
