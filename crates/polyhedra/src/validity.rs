//! Validity oracle: CRF certification and identity against the catalog.
//!
//! Not called by the engine; tests and callers invoke it explicitly.

use std::f64::consts::PI;

use crate::catalog::Catalog;
use crate::cfg::PRECISION;
use crate::classification::{get_order, get_symmetry};
use crate::error::{PolyError, Result};
use crate::geometry::distance;
use crate::polyhedron::Polyhedron;

/// Uniform edges, strictly convex edges, positive volume.
pub fn is_proper_polyhedron(p: &Polyhedron) -> bool {
    improper_reason(p).is_none()
}

fn improper_reason(p: &Polyhedron) -> Option<String> {
    let verts = p.vertex_vectors();
    let reference = p.edge_length();
    for &(a, b) in p.edges() {
        let len = distance(&verts[a], &verts[b]);
        if (len - reference).abs() >= PRECISION {
            return Some(format!("edge ({a}, {b}) has length {len:.6}, expected {reference:.6}"));
        }
        match p.dihedral_angle((a, b)) {
            Ok(angle) if angle < PI - PRECISION => {}
            Ok(angle) => {
                return Some(format!("edge ({a}, {b}) is not convex (dihedral {angle:.6})"))
            }
            Err(e) => return Some(e.to_string()),
        }
    }
    if p.volume() <= 0.0 {
        return Some("non-positive volume".to_string());
    }
    None
}

/// Symmetry order implied by a solid's name, if it classifies.
fn order_of(name: &str) -> Option<u32> {
    get_symmetry(name).ok().and_then(|s| get_order(&s).ok())
}

/// Sorted pairwise vertex distances in units of the edge length.
fn distance_spectrum(p: &Polyhedron) -> Vec<f64> {
    let verts = p.vertex_vectors();
    let s = p.edge_length();
    let mut out = Vec::with_capacity(verts.len() * verts.len() / 2);
    for (i, a) in verts.iter().enumerate() {
        for b in &verts[i + 1..] {
            out.push(distance(a, b) / s);
        }
    }
    out.sort_by(f64::total_cmp);
    out
}

/// Rotation- and relabeling-invariant identity check.
///
/// Compares the face-type multiset, vertex-configuration counts, the symmetry
/// order derived from the names, and the normalised distance spectrum. The
/// spectrum separates ortho/gyro isomers that share every other signature.
pub fn is_same(a: &Polyhedron, b: &Polyhedron) -> bool {
    if a.num_faces_by_sides() != b.num_faces_by_sides() {
        return false;
    }
    match (a.vertex_configuration(), b.vertex_configuration()) {
        (Ok(ca), Ok(cb)) if ca == cb => {}
        _ => return false,
    }
    if order_of(a.name()) != order_of(b.name()) {
        return false;
    }
    let (sa, sb) = (distance_spectrum(a), distance_spectrum(b));
    sa.len() == sb.len() && sa.iter().zip(&sb).all(|(x, y)| (x - y).abs() < PRECISION)
}

/// Certify `p` as a proper CRF solid matching the catalog entry of its name.
pub fn validate(catalog: &Catalog, p: &Polyhedron) -> Result<()> {
    let violation = |reason: String| PolyError::ValidityViolation {
        name: p.name().to_string(),
        reason,
    };
    if let Some(reason) = improper_reason(p) {
        return Err(violation(reason));
    }
    let reference = catalog.get(p.name())?;
    if !is_same(p, reference) {
        return Err(violation(format!("does not match the catalog {}", reference.name())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    fn unit_cube() -> Polyhedron {
        let v = (0..8)
            .map(|i| Vec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
            .collect();
        Polyhedron::from_vertices("cube", v).unwrap()
    }

    #[test]
    fn cube_is_proper_and_same_as_itself() {
        let c = unit_cube();
        assert!(is_proper_polyhedron(&c));
        assert!(is_same(&c, &c.clone().renamed("cube")));
    }

    #[test]
    fn split_face_is_not_convex() {
        let c = unit_cube();
        let mut faces = c.faces().to_vec();
        let top = faces.remove(0);
        faces.push(vec![top[0], top[1], top[2]]);
        faces.push(vec![top[0], top[2], top[3]]);
        let split = Polyhedron::new("cube", c.vertex_vectors().to_vec(), faces).unwrap();
        assert!(!is_proper_polyhedron(&split));
        assert!(!is_same(&split, &c));
    }

    #[test]
    fn hull_rejects_non_equilateral_box() {
        let v = (0..8)
            .map(|i| Vec3::new((i & 1) as f64 * 2.0, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
            .collect();
        // Only the unit edges are found, so the long sides never close up.
        assert!(Polyhedron::from_vertices("box", v).is_err());
    }

    #[test]
    fn spectrum_is_scale_free() {
        let c = unit_cube();
        let big: Vec<Vec3> = c.vertex_vectors().iter().map(|p| p * 3.0).collect();
        let big = Polyhedron::new("cube", big, c.faces().to_vec()).unwrap();
        assert!(is_same(&c, &big));
    }
}
