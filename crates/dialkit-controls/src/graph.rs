//! Read-only value monitor.
//!
//! Paints the current value as a meter between `min` and `max`. Hosts feed
//! it from their own loop (`panel.set`); the control itself keeps no
//! history.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::Fields;
use serde_json::json;

use crate::{Paint, PaintCtx, labeled, meter};

/// Registered type name.
pub const NAME: &str = "graph";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!(0));
    fields.insert("min".into(), json!(0));
    fields.insert("max".into(), json!(1));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let min = ctx.state.as_f64("min").unwrap_or(0.0);
    let max = ctx.state.as_f64("max").unwrap_or(1.0);
    let value = ctx.state.as_f64("value").unwrap_or(min);
    let ratio = if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    };
    labeled(ctx, &format!("{} {value:.3}", meter(ratio)))
}
