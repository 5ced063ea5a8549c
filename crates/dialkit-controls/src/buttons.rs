//! One-of-options button row control.
//!
//! Same selection model as `select`, painted as a row of buttons with the
//! current choice highlighted.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update, Value};
use serde_json::json;

use crate::{Paint, PaintCtx, cycle_options, labeled};

/// Registered type name.
pub const NAME: &str = "buttons";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), Value::Null);
    fields.insert("options".into(), json!([]));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// The partial update for a cycle gesture. `None` without options.
#[must_use]
pub fn cycle(id: &str, state: &NodeState, direction: i64) -> Option<Update> {
    cycle_options(state, direction).map(|next| Update::new().value(id, next))
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let current = ctx.state.value();
    let row = ctx
        .state
        .get("options")
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .map(|option| {
                    let text = match option {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    };
                    if Some(option) == current {
                        format!("[{text}]")
                    } else {
                        format!("({text})")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();
    labeled(ctx, &row)
}
