use super::*;
use crate::classification::names::get_type;

fn table() -> RelationTable {
    RelationTable::standard()
}

#[test]
fn symbols_parse_and_print() {
    for op in Operation::ALL {
        assert_eq!(op.symbol().parse::<Operation>().unwrap(), op);
    }
    assert!(matches!("x".parse::<Operation>(), Err(PolyError::Parse(_))));
    assert_eq!("u5".parse::<CapKind>().unwrap(), CapKind::U5);
    assert_eq!("gyro".parse::<Gyrate>().unwrap(), Gyrate::Gyro);
}

#[test]
fn operations_of_a_solid() {
    let t = table();
    let ops: Vec<Operation> = t.get_operations("cuboctahedron").into_iter().collect();
    assert_eq!(
        ops,
        vec![Operation::Diminish, Operation::Gyrate, Operation::Elongate, Operation::Gyroelongate]
    );
    assert_eq!(
        t.get_operations("cube").into_iter().collect::<Vec<_>>(),
        vec![Operation::Augment]
    );
    assert!(t.get_operations("snub cube").is_empty());
}

#[test]
fn every_name_classifies() {
    for name in table().names() {
        assert!(get_type(name).is_ok(), "{name}");
    }
}

#[test]
fn augment_edges_name_their_cap() {
    let t = table();
    for e in t.edges() {
        if e.op == Operation::Augment {
            assert!(e.using.is_some(), "{e:?}");
        } else if e.using.is_some() {
            // Only a solid with two kinds of peak says which one goes.
            assert_eq!(e.op, Operation::Diminish, "{e:?}");
        }
    }
}

#[test]
fn peak_operations_take_no_caller_options() {
    let t = table();
    let choices = t.option_choices("gyrate rhombicosidodecahedron", Operation::Gyrate);
    assert_eq!(choices, vec![Options::default()]);
    let choices = t.option_choices("pentagonal gyrocupolarotunda", Operation::Diminish);
    assert_eq!(choices, vec![Options::default()]);
    let o = Options {
        gyrate: None,
        using: Some(CapKind::R5),
    };
    let c = t.get_relations("pentagonal gyrocupolarotunda", Operation::Diminish);
    assert_eq!(resolve("x", Operation::Diminish, &c, &o, None).unwrap().to, "pentagonal cupola");
}

#[test]
fn rhombicosidodecahedron_family_is_closed_under_gyration() {
    let t = table();
    for e in t.edges().iter().filter(|e| e.from.ends_with("rhombicosidodecahedron")) {
        assert!(e.to.ends_with("rhombicosidodecahedron"), "{e:?}");
        assert!(e.gyrate.is_some(), "{e:?}");
        if e.op == Operation::Gyrate {
            // Gyrating the same cupola again undoes the step.
            let undo = if e.gyrate == Some(Gyrate::Gyro) { Gyrate::Ortho } else { Gyrate::Gyro };
            assert!(
                t.get_relations(&e.to, Operation::Gyrate)
                    .iter()
                    .any(|r| r.to == e.from && r.gyrate == Some(undo)),
                "{e:?}"
            );
        }
    }
}

#[test]
fn defaults_fill_shared_fields_only() {
    let t = table();
    // One cap kind, two twists.
    let o = t.default_options("triangular cupola", Operation::Augment);
    assert_eq!(o.using, Some(CapKind::U3));
    assert_eq!(o.gyrate, None);
    // Pyramid or prism cap, depending on the face.
    let o = t.default_options("pentagonal prism", Operation::Augment);
    assert_eq!(o, Options::default());
    assert_eq!(t.option_choices("pentagonal prism", Operation::Augment).len(), 2);
    assert_eq!(t.option_choices("triangular cupola", Operation::Augment).len(), 2);
    assert_eq!(t.option_choices("octahedron", Operation::Diminish), vec![Options::default()]);
}

#[test]
fn resolve_narrows_to_one_target() {
    let t = table();
    let c = t.get_relations("triangular cupola", Operation::Augment);
    let ortho = Options {
        gyrate: Some(Gyrate::Ortho),
        using: None,
    };
    let e = resolve("triangular cupola", Operation::Augment, &c, &ortho, None).unwrap();
    assert_eq!(e.to, "triangular orthobicupola");

    let err = resolve("triangular cupola", Operation::Augment, &c, &Options::default(), None)
        .unwrap_err();
    match err {
        PolyError::AmbiguousOptions { candidates, .. } => {
            assert_eq!(candidates, vec!["cuboctahedron", "triangular orthobicupola"])
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn resolve_uses_alignment() {
    let t = table();
    let name = "augmented dodecahedron";
    let c = t.get_relations(name, Operation::Augment);
    let o = Options::default();
    let para = resolve(name, Operation::Augment, &c, &o, Some(Align::Para)).unwrap();
    let meta = resolve(name, Operation::Augment, &c, &o, Some(Align::Meta)).unwrap();
    assert_eq!(para.to, "parabiaugmented dodecahedron");
    assert_eq!(meta.to, "metabiaugmented dodecahedron");
}

#[test]
fn resolve_without_match_is_unsupported() {
    let t = table();
    let c = t.get_relations("cube", Operation::Augment);
    let o = Options {
        gyrate: None,
        using: Some(CapKind::R5),
    };
    assert!(matches!(
        resolve("cube", Operation::Augment, &c, &o, None),
        Err(PolyError::UnsupportedOperation { .. })
    ));
    assert!(matches!(
        resolve("cube", Operation::Gyrate, &[], &Options::default(), None),
        Err(PolyError::UnsupportedOperation { .. })
    ));
}

#[test]
fn every_reverse_has_a_forward() {
    let t = table();
    for e in t.edges() {
        let forward = match e.op {
            Operation::ShortenPrism => Operation::Elongate,
            Operation::ShortenAntiprism => Operation::Gyroelongate,
            _ => continue,
        };
        assert!(
            t.get_relations(&e.to, forward).iter().any(|f| f.to == e.from),
            "{e:?}"
        );
    }
}
