//! Momentary action button.
//!
//! Carries no `value`, so it never appears in the flattened snapshot; hosts
//! observe presses through the `presses` counter on its state.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update};
use serde_json::json;

use crate::{Paint, PaintCtx};

/// Registered type name.
pub const NAME: &str = "button";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("text".into(), json!(""));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// The partial update for a press gesture (bumps the `presses` counter).
#[must_use]
pub fn press(id: &str, state: &NodeState) -> Update {
    let presses = state.as_f64("presses").unwrap_or(0.0);
    Update::new().field(id, "presses", presses + 1.0)
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let text = match ctx.state.as_str("text") {
        Some(text) if !text.is_empty() => text,
        _ => ctx.node.id(),
    };
    format!("[ {text} ]")
}
