use super::*;
use crate::catalog::Catalog;
use crate::error::PolyError;
use crate::geometry::Vec3;
use crate::relations::CapKind;
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::sync::OnceLock;

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::new().unwrap())
}

fn tetra() -> Polyhedron {
    let v = vec![
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ];
    Polyhedron::from_vertices("tetrahedron", v).unwrap()
}

#[test]
fn cube_counts() {
    let c = catalog().get("cube").unwrap();
    assert_eq!(c.num_vertices(), 8);
    assert_eq!(c.num_edges(), 12);
    assert_eq!(c.num_faces(), 6);
    assert_eq!(c.num_faces_by_sides(), BTreeMap::from([(4, 6)]));
    assert_eq!(c.f_indices(), 0..6);
    assert!(c.peaks().is_empty());
}

#[test]
fn vertex_configurations() {
    let cfg = |name: &str| catalog().get(name).unwrap().vertex_configuration().unwrap();
    assert_eq!(cfg("cuboctahedron"), BTreeMap::from([("3.4.3.4".to_string(), 12)]));
    assert_eq!(cfg("square antiprism"), BTreeMap::from([("3.3.3.4".to_string(), 8)]));
    assert_eq!(
        cfg("square pyramid"),
        BTreeMap::from([("3.3.3.3".to_string(), 1), ("3.3.4".to_string(), 4)])
    );
}

#[test]
fn metrics_of_unit_cube() {
    let c = catalog().get("cube").unwrap();
    let s = c.edge_length();
    assert!((c.volume() / s.powi(3) - 1.0).abs() < 1e-9);
    assert!((c.surface_area() / s.powi(2) - 6.0).abs() < 1e-9);
    assert!((c.sphericity() - PI / 6.0).abs() < 1e-9);
    for &e in c.edges() {
        assert!((c.dihedral_angle(e).unwrap() - PI / 2.0).abs() < 1e-9);
    }
}

#[test]
fn tetrahedron_dihedral_and_volume() {
    let t = tetra();
    let s = t.edge_length();
    assert!((s - 8f64.sqrt()).abs() < 1e-12);
    let expected = (1.0f64 / 3.0).acos();
    for &e in t.edges() {
        assert!((t.dihedral_angle(e).unwrap() - expected).abs() < 1e-9);
    }
    // V = s³ / (6√2)
    assert!((t.volume() - s.powi(3) / (6.0 * 2f64.sqrt())).abs() < 1e-9);
}

#[test]
fn dihedral_of_missing_edge_is_structural() {
    let c = catalog().get("cube").unwrap();
    let far = c
        .edges()
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .max()
        .unwrap();
    assert!(matches!(c.dihedral_angle((0, far + 1)), Err(PolyError::Structural(_))));
}

#[test]
fn constructor_rejects_open_and_disconnected_meshes() {
    let t = tetra();
    let mut open = t.faces().to_vec();
    open.pop();
    assert!(matches!(
        Polyhedron::new("open", t.vertex_vectors().to_vec(), open),
        Err(PolyError::Structural(_))
    ));

    let mut verts = t.vertex_vectors().to_vec();
    verts.extend(t.vertex_vectors().iter().map(|p| p + Vec3::new(10.0, 0.0, 0.0)));
    let mut faces = t.faces().to_vec();
    faces.extend(t.faces().iter().map(|f| f.iter().map(|v| v + 4).collect::<Vec<_>>()));
    assert!(matches!(
        Polyhedron::new("two", verts, faces),
        Err(PolyError::Structural(_))
    ));

    assert!(Polyhedron::new("bad", t.vertex_vectors().to_vec(), vec![vec![0, 1]]).is_err());
}

#[test]
fn constructor_rejects_a_mesh_without_faces() {
    assert!(matches!(
        Polyhedron::new("dot", vec![Vec3::zeros()], vec![]),
        Err(PolyError::Structural(_))
    ));
    assert!(matches!(
        Polyhedron::new("empty", vec![], vec![]),
        Err(PolyError::Structural(_))
    ));
}

#[test]
fn faces_wind_outward() {
    for p in catalog().solids() {
        let c = crate::geometry::centroid(p.vertex_vectors());
        for f in p.f_indices() {
            let out = p.face_centroid(f) - c;
            assert!(p.face_normal(f).dot(&out) > 0.0, "{} face {f}", p.name());
        }
    }
}

#[test]
fn peak_kinds_and_counts() {
    let peaks = |name: &str| catalog().get(name).unwrap().peaks();
    let ico = peaks("icosahedron");
    assert_eq!(ico.len(), 12);
    assert!(ico.iter().all(|p| p.kind == CapKind::Y5 && p.faces.len() == 5));

    let cubo = peaks("cuboctahedron");
    assert_eq!(cubo.len(), 8);
    assert!(cubo.iter().all(|p| p.kind == CapKind::U3 && p.boundary.len() == 6));

    let orb = peaks("pentagonal orthobirotunda");
    assert_eq!(orb.len(), 2);
    assert!(orb.iter().all(|p| p.kind == CapKind::R5 && p.interior.len() == 10));

    assert_eq!(peaks("octahedron").len(), 6);
    assert_eq!(peaks("rhombicuboctahedron").len(), 6);
    assert_eq!(peaks("gyroelongated pentagonal pyramid").len(), 6);
    // A lone pyramid is all peak: nothing would remain.
    assert!(peaks("square pyramid").is_empty());
    assert!(peaks("tetrahedron").is_empty());
}

#[test]
fn peak_normal_points_into_the_cap() {
    let p = catalog().get("elongated square pyramid").unwrap();
    let peak = &p.peaks()[0];
    let apex = p.vertex_vectors()[peak.interior[0]];
    let base = crate::geometry::centroid(&peak.boundary_points(p));
    assert!(peak.normal(p).dot(&(apex - base)) > 0.0);
}

#[test]
fn compacted_drops_unused_vertices() {
    let t = tetra();
    let mut verts = t.vertex_vectors().to_vec();
    verts.insert(0, Vec3::new(5.0, 5.0, 5.0));
    let faces = t
        .faces()
        .iter()
        .map(|f| f.iter().map(|v| v + 1).collect())
        .collect();
    let c = Polyhedron::compacted("tetrahedron", &verts, faces).unwrap();
    assert_eq!(c.num_vertices(), 4);
    assert!((c.volume() - t.volume()).abs() < 1e-12);
}
