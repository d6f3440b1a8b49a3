use super::*;
use crate::classification::names::{get_type, SolidType};
use crate::classification::{get_order, get_symmetry};
use crate::validity::{is_proper_polyhedron, is_same};

#[test]
fn every_solid_is_proper_and_unit_edged() {
    let catalog = Catalog::new().unwrap();
    for p in catalog.solids() {
        assert!(is_proper_polyhedron(p), "{}", p.name());
        assert!((p.edge_length() - 1.0).abs() < 1e-9, "{}", p.name());
    }
}

#[test]
fn solids_are_pairwise_distinct() {
    let catalog = Catalog::new().unwrap();
    let all: Vec<&Polyhedron> = catalog.solids().collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(!is_same(a, b), "{} looks like {}", a.name(), b.name());
        }
    }
}

#[test]
fn relation_names_are_all_built() {
    let catalog = Catalog::new().unwrap();
    for name in catalog.relations().names() {
        assert!(catalog.contains(name), "missing {name}");
    }
    // Cap templates too.
    for cap in crate::relations::CapKind::ALL {
        assert!(catalog.contains(cap.template()), "missing template {}", cap.template());
    }
}

#[test]
fn lookup_accepts_escaped_names() {
    let catalog = Catalog::new().unwrap();
    let p = catalog.get("pentagonal-prism").unwrap();
    assert_eq!(p.name(), "pentagonal prism");
    assert_eq!(p.num_faces_by_sides().get(&5), Some(&2));
    assert!(matches!(catalog.get("great dodecahedron"), Err(PolyError::UnknownSolid(_))));
}

#[test]
fn cube_fixture() {
    let catalog = Catalog::new().unwrap();
    let cube = catalog.get("cube").unwrap();
    assert_eq!((cube.num_vertices(), cube.num_edges(), cube.num_faces()), (8, 12, 6));
    let s = get_symmetry(cube.name()).unwrap();
    assert_eq!(s.to_string(), "Oh");
    assert_eq!(get_order(&s).unwrap(), 48);
}

#[test]
fn euler_characteristic() {
    let catalog = Catalog::new().unwrap();
    for p in catalog.solids() {
        let chi = p.num_vertices() as i64 - p.num_edges() as i64 + p.num_faces() as i64;
        assert_eq!(chi, 2, "{}", p.name());
    }
}

#[test]
fn covers_the_convex_regular_faced_families() {
    let catalog = Catalog::new().unwrap();
    let count = |t: SolidType| catalog.names().filter(|n| get_type(n).ok() == Some(t)).count();
    assert_eq!(count(SolidType::Platonic), 5);
    assert_eq!(count(SolidType::Archimedean), 13);
    // Every Johnson solid except the sphenomegacorona, the
    // hebesphenomegacorona and the disphenocingulum.
    assert_eq!(count(SolidType::Johnson), 89);
    assert_eq!(catalog.names().count(), 117);
}

#[test]
fn face_census_of_new_members() {
    let catalog = Catalog::new().unwrap();
    let census = |name: &str| {
        let p = catalog.get(name).unwrap();
        let by_sides: Vec<(usize, usize)> = p.num_faces_by_sides().into_iter().collect();
        (p.num_vertices(), p.num_edges(), by_sides)
    };
    assert_eq!(census("snub cube"), (24, 60, vec![(3, 32), (4, 6)]));
    assert_eq!(census("snub dodecahedron"), (60, 150, vec![(3, 80), (5, 12)]));
    assert_eq!(census("truncated icosidodecahedron"), (120, 180, vec![(4, 30), (6, 20), (10, 12)]));
    assert_eq!(census("gyrobifastigium"), (8, 14, vec![(3, 4), (4, 4)]));
    assert_eq!(census("snub square antiprism"), (16, 40, vec![(3, 24), (4, 2)]));
    assert_eq!(census("augmented sphenocorona"), (11, 26, vec![(3, 16), (4, 1)]));
    assert_eq!(census("bilunabirotunda"), (14, 26, vec![(3, 8), (4, 2), (5, 4)]));
    assert_eq!(
        census("triangular hebesphenorotunda"),
        (18, 36, vec![(3, 13), (4, 3), (5, 3), (6, 1)])
    );
}

#[test]
fn rhombicosidodecahedron_variants_keep_their_cupolae() {
    let catalog = Catalog::new().unwrap();
    for (prefix, decagons) in [
        ("gyrate", 0),
        ("trigyrate", 0),
        ("diminished", 1),
        ("paragyrate diminished", 1),
        ("gyrate bidiminished", 2),
        ("tridiminished", 3),
    ] {
        let p = catalog.get(&format!("{prefix} rhombicosidodecahedron")).unwrap();
        let found = p.num_faces_by_sides().get(&10).copied().unwrap_or(0);
        assert_eq!(found, decagons, "{prefix}");
        assert_eq!(p.num_vertices(), 60 - 5 * decagons, "{prefix}");
    }
}
