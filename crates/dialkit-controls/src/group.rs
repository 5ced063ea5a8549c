//! Group container control.
//!
//! The composite grouping construct: children render inside it in authored
//! order, and the whole subtree can be collapsed behind the header when the
//! group is expandable. Collapsing is just a field write — the engine's
//! propagator invalidates the group alone and the renderer's recursion does
//! the rest.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update};
use serde_json::json;

use crate::{Paint, PaintCtx, display_name};

/// Registered type name.
pub const NAME: &str = "group";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("layout".into(), json!("block"));
    fields.insert("expandable".into(), json!(true));
    fields.insert("expanded".into(), json!(true));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// Whether the group currently shows its children.
#[must_use]
pub fn expanded(state: &NodeState) -> bool {
    state.as_bool("expanded").unwrap_or(true)
}

/// Whether the group reacts to expand/collapse gestures.
#[must_use]
pub fn expandable(state: &NodeState) -> bool {
    state.as_bool("expandable").unwrap_or(true)
}

/// The partial update for an expand/collapse gesture on the header.
///
/// `None` when the group is not expandable.
#[must_use]
pub fn toggle_expanded(id: &str, state: &NodeState) -> Option<Update> {
    if !expandable(state) {
        return None;
    }
    Some(Update::new().field(id, "expanded", !expanded(state)))
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let icon = match (expandable(ctx.state), expanded(ctx.state)) {
        (false, _) => "",
        (true, true) => "▾ ",
        (true, false) => "▸ ",
    };
    match display_name(ctx.node, ctx.state) {
        Some(name) => format!("{icon}{name}"),
        None => icon.trim_end().to_owned(),
    }
}
