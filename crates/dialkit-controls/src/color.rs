//! Hex color swatch control.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::Fields;
use serde_json::json;

use crate::{Paint, PaintCtx, labeled};

/// Registered type name.
pub const NAME: &str = "color";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!("#000000"));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let hex = ctx.state.as_str("value").unwrap_or("#000000");
    labeled(ctx, &format!("■ {hex}"))
}
