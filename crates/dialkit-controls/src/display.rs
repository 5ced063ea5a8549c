//! Read-only display control.
//!
//! Shows a value without offering any interaction. The `format` field picks
//! the presentation: `text` (plain), `monospace`, or `block`; unknown
//! formats degrade to plain text.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, Value};
use serde_json::json;

use crate::{Paint, PaintCtx};

/// Registered type name.
pub const NAME: &str = "display";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!(""));
    fields.insert("format".into(), json!("text"));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let value = match ctx.state.value() {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    match ctx.state.as_str("format") {
        Some("monospace") => format!("`{value}`"),
        Some("block") => format!("▌ {value}"),
        _ => value,
    }
}
