#![forbid(unsafe_code)]

//! Built-in control types for DialKit.
//!
//! One module per control type. Each contributes a [`ControlTypeDef`] —
//! its registered defaults plus a [`Paint`] capability, the concrete render
//! capability for the built-in set — and, where the control is
//! interactive, helpers that turn a user gesture into the partial update
//! the host routes back through the panel.
//!
//! [`register_builtins`] installs the whole set into the process-wide
//! catalog exactly once; [`builtin_registry`] builds an isolated catalog
//! for embedders and tests that avoid process-wide state.

use std::sync::{Arc, Once};

use dialkit_core::registry::{self, ControlTypeDef};
use dialkit_core::{NodeState, TreeNode, Value};
use unicode_width::UnicodeWidthStr;

pub mod button;
pub mod buttons;
pub mod color;
pub mod display;
pub mod graph;
pub mod group;
pub mod number;
pub mod pad2;
pub mod range;
pub mod select;
pub mod text;
pub mod text_panel;
pub mod toggle;

pub use text_panel::TextPanel;

/// Paint context for one control row.
#[derive(Debug)]
pub struct PaintCtx<'a> {
    /// Structural node being painted.
    pub node: &'a TreeNode,
    /// The node's current merged state.
    pub state: &'a NodeState,
}

/// Render capability registered for the built-in control set.
///
/// Paints one control as a single row of panel text. The engine stores
/// this behind its opaque capability handle; rendering layers downcast it
/// back via [`ControlTypeDef::render_as`].
pub struct Paint {
    paint: fn(&PaintCtx<'_>) -> String,
}

impl Paint {
    /// Wrap a paint function.
    #[must_use]
    pub fn new(paint: fn(&PaintCtx<'_>) -> String) -> Self {
        Self { paint }
    }

    /// Paint one row.
    #[must_use]
    pub fn paint(&self, ctx: &PaintCtx<'_>) -> String {
        (self.paint)(ctx)
    }
}

fn definitions() -> Vec<ControlTypeDef> {
    vec![
        button::def(),
        buttons::def(),
        color::def(),
        display::def(),
        graph::def(),
        group::def(),
        number::def(),
        pad2::def(),
        range::def(),
        select::def(),
        text::def(),
        toggle::def(),
    ]
}

/// Install the built-in control set into the process-wide catalog.
///
/// Idempotent; safe to call from multiple entry points.
pub fn register_builtins() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        for def in definitions() {
            registry::register_def(def);
        }
    });
}

/// An isolated catalog holding exactly the built-in control set.
#[must_use]
pub fn builtin_registry() -> dialkit_core::Registry {
    let mut registry = dialkit_core::Registry::new();
    for def in definitions() {
        registry.register(def);
    }
    registry
}

/// Display-name policy shared by every built-in control.
///
/// The configured `label` wins; a missing label falls back to the node id;
/// an explicitly empty or null label hides the name entirely.
#[must_use]
pub fn display_name<'a>(node: &'a TreeNode, state: &'a NodeState) -> Option<&'a str> {
    match state.get("label") {
        Some(Value::Null) => None,
        Some(Value::String(label)) if label.is_empty() => None,
        Some(Value::String(label)) => Some(label),
        _ => Some(node.id()),
    }
}

/// Pad `text` to `cols` display columns (width-aware, never truncates).
#[must_use]
pub fn pad(text: &str, cols: usize) -> String {
    let width = UnicodeWidthStr::width(text);
    let mut out = String::from(text);
    for _ in width..cols {
        out.push(' ');
    }
    out
}

/// Label column width used by the built-in paints.
pub(crate) const LABEL_COLS: usize = 12;

/// Paint the `label  rest` shape shared by most value controls.
pub(crate) fn labeled(ctx: &PaintCtx<'_>, rest: &str) -> String {
    match display_name(ctx.node, ctx.state) {
        Some(name) => format!("{} {rest}", pad(name, LABEL_COLS)),
        None => rest.to_owned(),
    }
}

/// Step through an `options` list with wraparound, relative to the current
/// `value`. `None` when the state has no usable options.
pub(crate) fn cycle_options(state: &NodeState, direction: i64) -> Option<Value> {
    let options = state.get("options")?.as_array()?;
    if options.is_empty() {
        return None;
    }
    let len = options.len() as i64;
    let current = state
        .value()
        .and_then(|value| options.iter().position(|option| option == value));
    let next = match current {
        Some(index) => (index as i64 + direction).rem_euclid(len),
        None if direction >= 0 => 0,
        None => len - 1,
    };
    Some(options[next as usize].clone())
}

/// A ten-cell meter for a ratio in `[0, 1]`.
#[must_use]
pub fn meter(ratio: f64) -> String {
    const CELLS: usize = 10;
    let filled = (ratio.clamp(0.0, 1.0) * CELLS as f64).round() as usize;
    let mut out = String::with_capacity(CELLS + 2);
    out.push('[');
    for cell in 0..CELLS {
        out.push(if cell < filled { '█' } else { '·' });
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_core::{ControlSpec, Panel, PanelOptions};

    #[test]
    fn builtin_registry_holds_the_full_set() {
        let registry = builtin_registry();
        for name in [
            "button", "buttons", "color", "display", "graph", "group", "number", "pad2", "range",
            "select", "text", "toggle",
        ] {
            assert!(registry.contains(name), "missing builtin `{name}`");
        }
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn every_builtin_capability_is_a_paint() {
        let registry = builtin_registry();
        let spec = ControlSpec::new("g", "group").child(ControlSpec::new("r", "range"));
        let panel = Panel::with_registry(&spec, PanelOptions::default(), registry).unwrap();

        for id in ["g", "r"] {
            let node = panel.root().find(id).unwrap();
            let def = panel.registry().resolve(node.control()).unwrap();
            let paint = def.render_as::<Paint>().expect("builtin registers Paint");
            let line = paint.paint(&PaintCtx {
                node,
                state: panel.state(id).unwrap(),
            });
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn display_name_policy() {
        let registry = builtin_registry();
        let spec = ControlSpec::new("root", "group")
            .child(ControlSpec::new("named", "text").label("speed"))
            .child(ControlSpec::new("bare", "text"))
            .child(ControlSpec::new("hidden", "text").label(""));
        let panel = Panel::with_registry(&spec, PanelOptions::default(), registry).unwrap();

        let name = |id: &str| {
            display_name(panel.root().find(id).unwrap(), panel.state(id).unwrap())
                .map(str::to_owned)
        };
        assert_eq!(name("named").as_deref(), Some("speed"));
        assert_eq!(name("bare").as_deref(), Some("bare"));
        assert_eq!(name("hidden"), None);
    }

    #[test]
    fn meter_is_clamped() {
        assert_eq!(meter(0.0), "[··········]");
        assert_eq!(meter(1.0), "[██████████]");
        assert_eq!(meter(2.5), "[██████████]");
        assert_eq!(meter(-1.0), "[··········]");
        assert_eq!(meter(0.5), "[█████·····]");
    }

    #[test]
    fn pad_is_width_aware() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("toolong", 4), "toolong");
        // Wide glyphs count as two columns.
        assert_eq!(pad("日本", 6), "日本  ");
    }
}
