//! Free-form text control.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, Value};
use serde_json::json;

use crate::{Paint, PaintCtx, labeled};

/// Registered type name.
pub const NAME: &str = "text";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!(""));
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
    labeled(ctx, &format!("\"{value}\""))
}
