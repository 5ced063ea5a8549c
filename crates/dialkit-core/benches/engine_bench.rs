//! Engine benchmarks: normalization, targeted updates, invalidation.

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dialkit_core::{ControlSpec, ControlTypeDef, Fields, Panel, PanelOptions, Registry, Update};
use serde_json::json;

fn registry() -> Registry {
    let mut registry = Registry::new();
    let mut range = Fields::new();
    range.insert("value".into(), json!(0));
    range.insert("min".into(), json!(0));
    range.insert("max".into(), json!(100));
    range.insert("step".into(), json!(1));
    registry.register(ControlTypeDef::new("range", Arc::new(()), range));

    let mut group = Fields::new();
    group.insert("expandable".into(), json!(true));
    group.insert("expanded".into(), json!(true));
    registry.register(ControlTypeDef::new("group", Arc::new(()), group));
    registry
}

/// A panel of `groups` groups with `per_group` ranges each.
fn wide_spec(groups: usize, per_group: usize) -> ControlSpec {
    let mut root = ControlSpec::new("root", "group");
    for g in 0..groups {
        let mut group = ControlSpec::new(format!("g{g}"), "group");
        for c in 0..per_group {
            group = group.child(
                ControlSpec::new(format!("g{g}c{c}"), "range")
                    .value(c as i64)
                    .field("max", 1000),
            );
        }
        root = root.child(group);
    }
    root
}

fn bench_normalize(c: &mut Criterion) {
    let registry = registry();
    let spec = wide_spec(16, 16);
    c.bench_function("normalize_256_controls", |b| {
        b.iter(|| {
            let panel =
                Panel::with_registry(black_box(&spec), PanelOptions::default(), registry.clone())
                    .unwrap();
            black_box(panel.get().len())
        });
    });
}

fn bench_set_single(c: &mut Criterion) {
    let spec = wide_spec(16, 16);
    let mut panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();
    let update = Update::new().value("g7c7", 42);
    c.bench_function("set_single_of_256", |b| {
        b.iter(|| {
            let dirty = panel.set(black_box(&update)).unwrap();
            black_box(dirty.len())
        });
    });
}

fn bench_set_batch_with_cover(c: &mut Criterion) {
    let spec = wide_spec(16, 16);
    let mut panel = Panel::with_registry(&spec, PanelOptions::default(), registry()).unwrap();
    // A collapsed group plus every one of its children: the group covers
    // them all, so the repaint set stays at one entry.
    let mut update = Update::new().field("g3", "expanded", false);
    for ch in 0..16 {
        update = update.value(format!("g3c{ch}"), 1);
    }
    c.bench_function("set_batch_composite_cover", |b| {
        b.iter(|| {
            let dirty = panel.set(black_box(&update)).unwrap();
            black_box(dirty.len())
        });
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_set_single,
    bench_set_batch_with_cover
);
criterion_main!(benches);
