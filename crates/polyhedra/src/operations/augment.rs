//! Cap placement for `+`.

use std::f64::consts::PI;

use tracing::{debug, trace};

use super::no_target;
use crate::catalog::Catalog;
use crate::cfg::{EPS, PRECISION};
use crate::error::{PolyError, Result};
use crate::geometry::{centroid, frame, newell_normal, Vec3};
use crate::polyhedron::{Face, Polyhedron};
use crate::relations::{resolve, Align, CapKind, Gyrate, Operation, Options, RelationEdge};

/// Mesh after gluing a cap: all vertices and faces, plus the cap's own faces.
struct Placement {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    cap_faces: Vec<Face>,
}

/// Glue `template`'s largest face onto `face`, with template base vertex 0
/// landing on the face's vertex `k`.
fn place_cap(poly: &Polyhedron, face: usize, template: &Polyhedron, k: usize) -> Placement {
    let base_index = template.largest_face();
    let base = &template.faces()[base_index];
    let target = &poly.faces()[face];
    let scale = poly.edge_length() / template.edge_length();

    let base_pts = template.face_points(base_index);
    let base_center = centroid(&base_pts);
    let (x, y, z) = frame(&(base_pts[0] - base_center), &newell_normal(&base_pts));

    let target_pts = poly.face_points(face);
    let target_center = centroid(&target_pts);
    let (x2, y2, z2) = frame(
        &(target_pts[k % target.len()] - target_center),
        &-newell_normal(&target_pts),
    );

    let place = |p: &Vec3| {
        let d = (p - base_center) * scale;
        target_center + x2 * d.dot(&x) + y2 * d.dot(&y) + z2 * d.dot(&z)
    };

    let mut vertices = poly.vertex_vectors().to_vec();
    let mut remap = Vec::with_capacity(template.num_vertices());
    for (i, p) in template.vertex_vectors().iter().enumerate() {
        let q = place(p);
        if base.contains(&i) {
            let nearest = target
                .iter()
                .copied()
                .min_by(|&a, &b| {
                    (vertices[a] - q).norm().total_cmp(&(vertices[b] - q).norm())
                })
                .unwrap_or(target[0]);
            remap.push(nearest);
        } else {
            remap.push(vertices.len());
            vertices.push(q);
        }
    }

    let cap_faces: Vec<Face> = template
        .faces()
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != base_index)
        .map(|(_, f)| f.iter().map(|&v| remap[v]).collect())
        .collect();
    let faces = poly
        .faces()
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != face)
        .map(|(_, f)| f.clone())
        .chain(cap_faces.iter().cloned())
        .collect();
    Placement {
        vertices,
        faces,
        cap_faces,
    }
}

/// Side count of the first non-band face met when crossing edge `a → b`
/// outward, passing through squares perpendicular to `normal`.
pub(super) fn opposite_face_sides(
    poly: &Polyhedron,
    normal: &Vec3,
    a: usize,
    b: usize,
) -> Result<usize> {
    let missing = || PolyError::Structural(format!("{}: open edge ({a}, {b})", poly.name()));
    let mut b = b;
    let mut cur = poly.face_with_edge(b, a).ok_or_else(missing)?;
    for _ in 0..poly.num_faces() {
        let f = &poly.faces()[cur];
        if f.len() != 4 || poly.face_normal(cur).dot(normal).abs() >= EPS {
            break;
        }
        let i = f.iter().position(|&v| v == b).ok_or_else(missing)?;
        let (c, d) = (f[(i + 2) % 4], f[(i + 3) % 4]);
        cur = poly.face_with_edge(d, c).ok_or_else(missing)?;
        b = d;
    }
    Ok(poly.faces()[cur].len())
}

/// Distinct cap rotations worth trying on a face with `sides` sides.
fn turns(sides: usize) -> usize {
    if sides > 5 {
        2
    } else {
        1
    }
}

/// Whether the glued cap leaves every edge of the old face strictly convex.
fn fits(poly: &Polyhedron, face: usize, placed: &Placement) -> bool {
    let Ok(candidate) =
        Polyhedron::new(poly.name(), placed.vertices.clone(), placed.faces.clone())
    else {
        return false;
    };
    let f = &poly.faces()[face];
    (0..f.len()).all(|i| {
        let (a, b) = (f[i], f[(i + 1) % f.len()]);
        candidate
            .dihedral_angle((a.min(b), a.max(b)))
            .is_ok_and(|angle| angle < PI - PRECISION)
    })
}

fn has_edge(face: &[usize], a: usize, b: usize) -> bool {
    (0..face.len()).any(|i| face[i] == a && face[(i + 1) % face.len()] == b)
}

/// Rotation offset `k` putting the cap in ortho or gyro position.
///
/// A placement is ortho when some cap face meets, across an edge of the old
/// face, an outside face with as many sides as itself. Without a twist to
/// honour, or when the surroundings are uniform, the first convex placement
/// wins.
pub(super) fn orientation(
    poly: &Polyhedron,
    face: usize,
    template: &Polyhedron,
    gyrate: Option<Gyrate>,
) -> Result<usize> {
    let f = &poly.faces()[face];
    let n = f.len();
    if let Some(gyrate) = gyrate {
        let normal = poly.face_normal(face);
        let sides = (0..n)
            .map(|i| opposite_face_sides(poly, &normal, f[i], f[(i + 1) % n]))
            .collect::<Result<Vec<usize>>>()?;
        if sides.iter().any(|&s| s != sides[0]) {
            for k in 0..2 {
                let placed = place_cap(poly, face, template, k);
                let ortho = (0..n).any(|j| {
                    let (a, b) = (f[j], f[(j + 1) % n]);
                    placed
                        .cap_faces
                        .iter()
                        .find(|cf| has_edge(cf, a, b))
                        .is_some_and(|cf| cf.len() == sides[j])
                });
                if ortho == (gyrate == Gyrate::Ortho) {
                    return Ok(k);
                }
            }
            return Err(PolyError::Structural(format!(
                "{}: no {gyrate} placement on face {face}",
                poly.name()
            )));
        }
    }
    (0..turns(n))
        .find(|&k| fits(poly, face, &place_cap(poly, face, template, k)))
        .ok_or_else(|| {
            PolyError::Structural(format!(
                "{}: no convex placement on face {face}",
                poly.name()
            ))
        })
}

/// New vertices of the first convex placement of `template` on `face`.
pub(crate) fn convex_cap_points(
    poly: &Polyhedron,
    face: usize,
    template: &Polyhedron,
) -> Option<Vec<Vec3>> {
    (0..turns(poly.faces()[face].len()))
        .map(|k| place_cap(poly, face, template, k))
        .find(|placed| fits(poly, face, placed))
        .map(|placed| placed.vertices[poly.num_vertices()..].to_vec())
}

/// `Para` when the face is directly opposite an existing peak.
fn augment_align(poly: &Polyhedron, face: usize, candidates: &[&RelationEdge]) -> Option<Align> {
    if candidates.iter().all(|e| e.align.is_none()) {
        return None;
    }
    let normal = poly.face_normal(face);
    let opposite = poly
        .peaks()
        .iter()
        .any(|p| p.normal(poly).dot(&normal) < -1.0 + EPS);
    Some(if opposite { Align::Para } else { Align::Meta })
}

/// Whether a cap from the relation table fits on `face` without creating a
/// flat or reflex edge.
pub fn can_augment(catalog: &Catalog, poly: &Polyhedron, face: usize) -> bool {
    if face >= poly.num_faces() {
        return false;
    }
    let relations = catalog.relations().get_relations(poly.name(), Operation::Augment);
    let f = &poly.faces()[face];
    let Some(cap) = CapKind::for_sides(f.len())
        .iter()
        .copied()
        .find(|c| relations.iter().any(|e| e.using == Some(*c)))
    else {
        return false;
    };
    let Ok(template) = catalog.get(cap.template()) else {
        return false;
    };
    let convex = (0..turns(f.len())).any(|k| {
        let placed = place_cap(poly, face, template, k);
        fits(poly, face, &placed)
    });
    trace!(name = poly.name(), face, cap = %cap, convex, "can_augment");
    convex
}

pub(super) fn augment(
    catalog: &Catalog,
    poly: &Polyhedron,
    face: usize,
    candidates: &[&RelationEdge],
    options: &Options,
) -> Result<Polyhedron> {
    let op = Operation::Augment;
    if !can_augment(catalog, poly, face) {
        return Err(no_target(poly, op, format!("face {face} cannot take a cap")));
    }
    let sides = poly.faces()[face].len();
    let fitting: Vec<&RelationEdge> = candidates
        .iter()
        .copied()
        .filter(|e| e.using.is_some_and(|c| CapKind::for_sides(sides).contains(&c)))
        .collect();
    let align = augment_align(poly, face, &fitting);
    let edge = resolve(poly.name(), op, &fitting, options, align)?;
    let cap = edge
        .using
        .ok_or_else(|| no_target(poly, op, format!("edge to {} names no cap", edge.to)))?;
    let template = catalog.get(cap.template())?;
    let k = orientation(poly, face, template, edge.gyrate)?;
    debug!(name = poly.name(), face, cap = %cap, k, to = %edge.to, "augment");
    let placed = place_cap(poly, face, template, k);
    Polyhedron::new(edge.to.clone(), placed.vertices, placed.faces)
}
