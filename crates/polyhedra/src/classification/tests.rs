use super::*;
use crate::catalog::Catalog;

fn sym(s: &str) -> Symmetry {
    s.parse().unwrap()
}

#[test]
fn cube_is_full_octahedral() {
    let s = get_symmetry("cube").unwrap();
    assert_eq!(s, Symmetry::new(Group::O, "h"));
    assert_eq!(get_order(&s).unwrap(), 48);
    assert_eq!(get_symmetry_name(&s).unwrap(), "octahedral");
}

#[test]
fn family_dispatch() {
    assert_eq!(get_symmetry("tetrahedron").unwrap().to_string(), "Td");
    assert_eq!(get_symmetry("truncated tetrahedron").unwrap().to_string(), "Td");
    assert_eq!(get_symmetry("snub cube").unwrap().to_string(), "O");
    assert_eq!(get_symmetry("snub dodecahedron").unwrap().to_string(), "I");
    assert_eq!(get_symmetry("icosahedron").unwrap().to_string(), "Ih");
    assert_eq!(get_symmetry("truncated icosahedron").unwrap().to_string(), "Ih");
    assert_eq!(get_symmetry("pentagonal-prism").unwrap().to_string(), "D5h");
    assert_eq!(get_symmetry("square antiprism").unwrap().to_string(), "D4d");
    assert_eq!(get_symmetry("square pyramid").unwrap().to_string(), "C4v");
    assert_eq!(get_symmetry("triangular hebesphenorotunda").unwrap().to_string(), "C3v");
    assert_eq!(get_symmetry("gyroelongated pentagonal cupolarotunda").unwrap().to_string(), "C5");
}

#[test]
fn orders() {
    assert_eq!(get_order(&sym("Ih")).unwrap(), 120);
    assert_eq!(get_order(&sym("O")).unwrap(), 24);
    assert_eq!(get_order(&sym("Td")).unwrap(), 24);
    assert_eq!(get_order(&sym("Cs")).unwrap(), 2);
    assert_eq!(get_order(&sym("C5v")).unwrap(), 10);
    assert_eq!(get_order(&sym("C5")).unwrap(), 10);
    assert_eq!(get_order(&sym("C3")).unwrap(), 6);
    assert_eq!(get_order(&sym("D5h")).unwrap(), 20);
    assert_eq!(get_order(&sym("D4d")).unwrap(), 16);
    assert_eq!(get_order(&sym("D3")).unwrap(), 6);
}

#[test]
fn chiral_cupolarotunda_counts_both_hands() {
    let s = get_symmetry("gyroelongated pentagonal cupolarotunda").unwrap();
    assert_eq!(get_order(&s).unwrap(), get_order(&sym("C5v")).unwrap());
    assert_eq!(get_symmetry_name(&s).unwrap(), "pentagonal pyramidal");
}

#[test]
fn tetrahedral_family_reports_td() {
    for name in ["tetrahedron", "truncated tetrahedron"] {
        let s = get_symmetry(name).unwrap();
        assert_eq!(s, Symmetry::new(Group::T, "d"), "{name}");
        assert_eq!(get_order(&s).unwrap(), 24, "{name}");
        assert_eq!(get_symmetry_name(&s).unwrap(), "tetrahedral");
    }
    // Th would report the same order.
    assert_eq!(get_order(&sym("Th")).unwrap(), 24);
}

#[test]
fn bad_groups_are_rejected() {
    assert!(matches!("X3".parse::<Symmetry>(), Err(PolyError::InvalidGroup(_))));
    assert!(matches!(get_order(&sym("Oq")), Err(PolyError::InvalidGroup(_))));
    assert!(matches!(get_order(&sym("Cxv")), Err(PolyError::InvalidGroup(_))));
    assert!(matches!(get_symmetry("blob"), Err(PolyError::UnknownSolid(_))));
}

#[test]
fn symmetry_names() {
    assert_eq!(get_symmetry_name(&sym("O")).unwrap(), "chiral octahedral");
    assert_eq!(get_symmetry_name(&sym("C5v")).unwrap(), "pentagonal pyramidal");
    assert_eq!(get_symmetry_name(&sym("D4d")).unwrap(), "square antiprismatic");
    assert_eq!(get_symmetry_name(&sym("C2v")).unwrap(), "biradial");
    assert_eq!(get_symmetry_name(&sym("Cs")).unwrap(), "bilateral");
}

#[test]
fn every_johnson_solid_has_a_valid_order() {
    for name in names::JOHNSON_SOLIDS {
        let s = get_symmetry(name).unwrap();
        assert!(get_order(&s).unwrap() >= 2, "{name}: {s}");
    }
}

#[test]
fn grouping_preserves_order() {
    assert_eq!(grouped_vertex_config("3.3.3.3.4"), vec![("3", 4), ("4", 1)]);
    assert_eq!(
        grouped_vertex_config("3.4.3.4"),
        vec![("3", 1), ("4", 1), ("3", 1), ("4", 1)]
    );
    assert_eq!(display_vertex_config("3.3.3.3.4"), "3^4.4");
    assert_eq!(display_vertex_config("4.6.8"), "4.6.8");
}

#[test]
fn describe_normalises_metrics() {
    let catalog = Catalog::new().unwrap();
    let info = describe(catalog.get("cube").unwrap()).unwrap();
    assert_eq!(info.solid_type, SolidType::Platonic);
    assert_eq!(info.conway, "C");
    assert_eq!((info.vertices, info.edges, info.faces), (8, 12, 6));
    assert_eq!(info.faces_by_type.get("square"), Some(&6));
    assert_eq!(info.vertex_configuration.get("4.4.4"), Some(&8));
    assert!((info.volume - 1.0).abs() < 1e-9);
    assert!((info.surface_area - 6.0).abs() < 1e-9);
    assert!((info.sphericity - 0.524).abs() < 1e-9);
    assert_eq!(info.order, 48);
}

#[test]
fn describe_runs_on_every_catalog_solid() {
    let catalog = Catalog::new().unwrap();
    for p in catalog.solids() {
        let info = describe(p).unwrap_or_else(|e| panic!("{}: {e}", p.name()));
        assert_eq!(info.faces, p.num_faces(), "{}", p.name());
    }
    let snub = describe(catalog.get("snub dodecahedron").unwrap()).unwrap();
    assert_eq!((snub.symmetry_name.as_str(), snub.order), ("chiral icosahedral", 60));
    let j92 = describe(catalog.get("triangular hebesphenorotunda").unwrap()).unwrap();
    assert_eq!((j92.conway.as_str(), j92.order), ("J92", 6));
}

#[test]
fn names_escape_and_notate() {
    use names::{escape_name, get_alternate_names, to_conway_notation};
    assert_eq!(escape_name("pentagonal prism"), "pentagonal-prism");
    assert_eq!(unescape_name("pentagonal-prism"), "pentagonal prism");
    assert_eq!(to_conway_notation("cuboctahedron").unwrap(), "aC");
    assert_eq!(to_conway_notation("decagonal-antiprism").unwrap(), "A10");
    assert_eq!(to_conway_notation("elongated pentagonal gyrobicupola").unwrap(), "J39");
    assert_eq!(get_alternate_names("cuboctahedron"), vec!["triangular gyrobicupola"]);
    assert!(get_alternate_names("square cupola").is_empty());
    assert!(matches!(to_conway_notation("blob"), Err(PolyError::UnknownSolid(_))));
}
