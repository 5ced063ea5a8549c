//! Boolean checkbox control.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update};
use serde_json::json;

use crate::{Paint, PaintCtx, display_name};

/// Registered type name.
pub const NAME: &str = "toggle";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!(false));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// The partial update for a flip gesture.
#[must_use]
pub fn flip(id: &str, state: &NodeState) -> Update {
    let on = state.as_bool("value").unwrap_or(false);
    Update::new().value(id, !on)
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let mark = if ctx.state.as_bool("value").unwrap_or(false) {
        "[x]"
    } else {
        "[ ]"
    };
    match display_name(ctx.node, ctx.state) {
        Some(name) => format!("{mark} {name}"),
        None => mark.to_owned(),
    }
}
