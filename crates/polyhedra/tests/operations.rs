//! Whole-catalog properties of the operation engine.

use std::sync::OnceLock;

use polyhedra::prelude::*;
use proptest::prelude::*;

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog::new().expect("catalog builds"))
}

/// Every (argument, options) pair worth trying for `op` on `poly`.
fn draws(c: &Catalog, op: Operation, poly: &Polyhedron) -> Vec<(Argument, Options)> {
    let choices = c.relations().option_choices(poly.name(), op);
    eligible_arguments(c, op, poly)
        .into_iter()
        .flat_map(|arg| choices.iter().map(move |o| (arg.clone(), *o)))
        .collect()
}

fn fits(poly: &Polyhedron, arg: &Argument, options: &Options) -> bool {
    match (arg, options.using) {
        (Argument::Face(f), Some(cap)) => cap.base_sides() == poly.faces()[*f].len(),
        _ => true,
    }
}

#[test]
fn closure_over_the_relation_table() {
    let c = catalog();
    let mut applied = 0;
    for name in c.names() {
        let poly = c.get(name).unwrap();
        for op in c.relations().get_operations(name) {
            let draws = draws(c, op, poly);
            assert!(!draws.is_empty(), "{name} {op}: no eligible argument");
            for (arg, options) in draws.iter().filter(|(a, o)| fits(poly, a, o)) {
                let q = apply_operation(c, op, poly, arg, options)
                    .unwrap_or_else(|e| panic!("{name} {op} {arg:?} {options:?}: {e}"));
                assert!(is_proper_polyhedron(&q), "{name} {op} -> {}", q.name());
                validate(c, &q).unwrap_or_else(|e| panic!("{name} {op}: {e}"));
                assert!(
                    c.relations().get_relations(name, op).iter().any(|e| e.to == q.name()),
                    "{name} {op} -> {} is not a table target",
                    q.name()
                );
                applied += 1;
            }
        }
    }
    assert!(applied > 500, "only {applied} applications");
}

#[test]
fn every_table_target_is_reached() {
    let c = catalog();
    for edge in c.relations().edges() {
        let poly = c.get(&edge.from).unwrap();
        let reached = draws(c, edge.op, poly)
            .iter()
            .filter_map(|(a, o)| apply_operation(c, edge.op, poly, a, o).ok())
            .any(|q| q.name() == edge.to);
        assert!(reached, "{} {} {} never produced", edge.from, edge.op, edge.to);
    }
}

#[test]
fn diminish_undoes_augment() {
    let c = catalog();
    for name in c.names() {
        let poly = c.get(name).unwrap();
        for (arg, options) in draws(c, Operation::Augment, poly) {
            if !fits(poly, &arg, &options) {
                continue;
            }
            let Ok(q) = apply_operation(c, Operation::Augment, poly, &arg, &options) else {
                continue;
            };
            let back = q.peaks().into_iter().any(|peak| {
                apply_operation(c, Operation::Diminish, &q, &Argument::Peak(peak), &Options::default())
                    .is_ok_and(|r| r.name() == name && is_same(&r, poly))
            });
            assert!(back, "{name} + {arg:?} -> {} does not diminish back", q.name());
        }
    }
}

#[test]
fn gyrate_is_an_involution() {
    let c = catalog();
    for name in c.names() {
        if !c.relations().get_operations(name).contains(&Operation::Gyrate) {
            continue;
        }
        let poly = c.get(name).unwrap();
        for peak in poly.peaks() {
            let none = Options::default();
            let q = apply_operation(c, Operation::Gyrate, poly, &Argument::Peak(peak), &none).unwrap();
            let twice = q.peaks().into_iter().any(|p2| {
                apply_operation(c, Operation::Gyrate, &q, &Argument::Peak(p2), &none)
                    .is_ok_and(|r| is_same(&r, poly))
            });
            assert!(twice, "{name}: gyrating twice does not return");
        }
    }
}

#[test]
fn can_augment_after_diminish_matches_table() {
    let c = catalog();
    for name in c.names() {
        if !c.relations().get_operations(name).contains(&Operation::Diminish) {
            continue;
        }
        let poly = c.get(name).unwrap();
        for peak in poly.peaks() {
            let q = apply_operation(c, Operation::Diminish, poly, &Argument::Peak(peak), &Options::default())
                .unwrap();
            let back = c
                .relations()
                .get_relations(q.name(), Operation::Augment)
                .iter()
                .any(|e| e.to == name);
            let can = q.f_indices().any(|f| can_augment(c, &q, f));
            assert_eq!(back, can, "{name} - -> {}", q.name());
        }
    }
}

#[test]
fn augment_example() {
    let c = catalog();
    let p = c.get("pentagonal-prism").unwrap();
    let f = p.f_indices().find(|&f| p.faces()[f].len() == 4).unwrap();
    let q = apply_operation(c, Operation::Augment, p, &Argument::Face(f), &Options::default()).unwrap();
    assert!(is_same(&q, c.get("augmented pentagonal prism").unwrap()));
    assert!(is_proper_polyhedron(&q));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_walks_stay_in_the_catalog(seed in any::<u64>(), start in any::<prop::sample::Index>()) {
        let c = catalog();
        let names: Vec<&str> = c.names().collect();
        let start = names[start.index(names.len())];
        let walk = random_walk(c, start, 6, ReplayToken { seed, index: 0 }).unwrap();
        for step in &walk {
            prop_assert!(validate(c, &step.result).is_ok(), "{} {}", step.op, step.result.name());
        }
    }
}
