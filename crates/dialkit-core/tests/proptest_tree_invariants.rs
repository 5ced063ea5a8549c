//! Property-based invariant tests for normalization, the state store and
//! the update propagator.
//!
//! Invariants exercised over randomized control trees:
//!
//! 1. Unique ids + registered types → normalization succeeds and the
//!    flattened snapshot holds exactly the value-bearing ids.
//! 2. Author-supplied values win over defaults; absent values fall back to
//!    the registered default.
//! 3. Any duplicated id anywhere in the tree fails construction.
//! 4. Shallow merge touches exactly the patched fields.
//! 5. The repaint set is a subset of the changed ids and never contains a
//!    node whose ancestor is also a member.
//! 6. Child order survives normalization.

use std::sync::Arc;

use dialkit_core::{
    ControlSpec, ControlTypeDef, Fields, Panel, PanelError, PanelOptions, Registry, TreeNode,
    Update,
};
use proptest::prelude::*;
use serde_json::json;

fn registry() -> Registry {
    let mut registry = Registry::new();
    let mut range = Fields::new();
    range.insert("value".into(), json!(0));
    range.insert("min".into(), json!(0));
    range.insert("max".into(), json!(100));
    range.insert("step".into(), json!(1));
    registry.register(ControlTypeDef::new("range", Arc::new(()), range));

    let mut toggle = Fields::new();
    toggle.insert("value".into(), json!(false));
    registry.register(ControlTypeDef::new("toggle", Arc::new(()), toggle));

    let mut group = Fields::new();
    group.insert("expanded".into(), json!(true));
    registry.register(ControlTypeDef::new("group", Arc::new(()), group));
    registry
}

// ── Tree generation ─────────────────────────────────────────────────────

/// Shape of one generated node: leaf kind or group arity, plus whether a
/// leaf carries an author-supplied value.
#[derive(Debug, Clone)]
enum Shape {
    Range { value: Option<i64> },
    Toggle,
    Group(Vec<Shape>),
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        (proptest::option::of(-1000i64..1000)).prop_map(|value| Shape::Range { value }),
        Just(Shape::Toggle),
    ];
    leaf.prop_recursive(3, 24, 5, |inner| {
        proptest::collection::vec(inner, 0..5).prop_map(Shape::Group)
    })
}

/// Build a spec tree with globally unique ids (`n0`, `n1`, …).
fn build(shape: &Shape, counter: &mut usize) -> ControlSpec {
    let id = format!("n{counter}");
    *counter += 1;
    match shape {
        Shape::Range { value } => {
            let spec = ControlSpec::new(id, "range");
            match value {
                Some(v) => spec.value(*v),
                None => spec,
            }
        }
        Shape::Toggle => ControlSpec::new(id, "toggle"),
        Shape::Group(children) => {
            let mut spec = ControlSpec::new(id, "group");
            for child in children {
                spec = spec.child(build(child, counter));
            }
            spec
        }
    }
}

fn collect_ids(node: &TreeNode, out: &mut Vec<String>) {
    out.push(node.id().to_owned());
    for child in node.children() {
        collect_ids(child, out);
    }
}

fn has_member_ancestor(root: &TreeNode, set: &dialkit_core::InvalidationSet, id: &str) -> bool {
    fn walk(node: &TreeNode, set: &dialkit_core::InvalidationSet, id: &str, covered: bool) -> bool {
        if node.id() == id {
            return covered;
        }
        let covered = covered || set.contains(node.id());
        node.children()
            .iter()
            .any(|child| walk(child, set, id, covered))
    }
    walk(root, set, id, false)
}

proptest! {
    #[test]
    fn unique_ids_normalize_and_snapshot_matches(shape in shape_strategy()) {
        let mut counter = 0;
        let spec = build(&shape, &mut counter);
        let panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();

        let mut ids = Vec::new();
        collect_ids(panel.root(), &mut ids);
        prop_assert_eq!(ids.len(), counter);

        let values = panel.get();
        for id in &ids {
            let state = panel.state(id).unwrap();
            // Snapshot membership is exactly "state carries a value field".
            prop_assert_eq!(values.contains_key(id), state.value().is_some());
        }
    }

    #[test]
    fn author_value_wins_default_fills(shape in shape_strategy()) {
        let mut counter = 0;
        let spec = build(&shape, &mut counter);
        let panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();

        fn check(spec: &ControlSpec, panel: &Panel) {
            let state = panel.state(&spec.id).unwrap();
            match spec.control.as_str() {
                "range" => match spec.fields.get("value") {
                    Some(v) => assert_eq!(state.value().unwrap(), v),
                    None => assert_eq!(state.value().unwrap(), 0),
                },
                "toggle" => {
                    assert_eq!(state.value().unwrap(), &serde_json::Value::Bool(false));
                }
                _ => {
                    assert_eq!(state.as_bool("expanded"), Some(true));
                    assert!(state.value().is_none());
                }
            }
            for child in &spec.nodes {
                check(child, panel);
            }
        }
        check(&spec, &panel);
    }

    #[test]
    fn any_duplicate_id_fails(shape in shape_strategy(), dup_seed in any::<prop::sample::Index>()) {
        let mut counter = 0;
        let mut spec = build(&shape, &mut counter);
        // Skip trees too small to hold a duplicate pair.
        prop_assume!(counter >= 2);

        // Rename the root to collide with one of its descendants.
        let victim = format!("n{}", 1 + dup_seed.index(counter - 1));
        spec.id = victim.clone();

        let err = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap_err();
        prop_assert_eq!(err, PanelError::DuplicateId { id: victim });
    }

    #[test]
    fn merge_touches_exactly_the_patched_fields(patch_min in -50i64..50, value in -50i64..50) {
        let spec = ControlSpec::new("root", "group")
            .child(ControlSpec::new("a", "range").value(7).field("max", 20));
        let mut panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();
        let before = panel.state("a").unwrap().clone();

        panel.set(
            &Update::new()
                .field("a", "min", patch_min)
                .value("a", value),
        ).unwrap();

        let after = panel.state("a").unwrap();
        prop_assert_eq!(after.get("min").unwrap(), patch_min);
        prop_assert_eq!(after.value().unwrap(), value);
        // Every field not named in the patch is bit-identical.
        for (key, old) in before.fields() {
            if key != "min" && key != "value" {
                prop_assert_eq!(after.get(key).unwrap(), old);
            }
        }
    }

    #[test]
    fn repaint_set_is_minimal(shape in shape_strategy(), picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..6)) {
        let mut counter = 0;
        let spec = build(&shape, &mut counter);
        let mut panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();

        let mut ids = Vec::new();
        collect_ids(panel.root(), &mut ids);

        let mut update = Update::new();
        let mut targeted = Vec::new();
        for pick in &picks {
            let id = &ids[pick.index(ids.len())];
            targeted.push(id.clone());
            update = update.field(id.clone(), "poked", 1);
        }

        let root = panel.root().clone();
        let dirty = panel.set(&update).unwrap();

        for id in dirty.iter() {
            // Subset of the targeted ids...
            prop_assert!(targeted.iter().any(|t| t.as_str() == id));
            // ...and never shadowed by an invalidated ancestor.
            prop_assert!(!has_member_ancestor(&root, &dirty, id));
        }
        // Every targeted id is either a member or covered by one.
        for id in &targeted {
            prop_assert!(dirty.contains(id) || has_member_ancestor(&root, &dirty, id));
        }
    }

    #[test]
    fn child_order_survives_normalization(n in 1usize..8) {
        let mut spec = ControlSpec::new("root", "group");
        let expected: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
        for id in &expected {
            spec = spec.child(ControlSpec::new(id.clone(), "range"));
        }
        let panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();

        let order: Vec<&str> = panel.root().children().iter().map(TreeNode::id).collect();
        prop_assert_eq!(order, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
