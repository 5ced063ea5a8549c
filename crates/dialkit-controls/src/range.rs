//! Bounded slider control.
//!
//! Carries `min`/`max`/`step` alongside the value. Gestures move by one
//! step and clamp to the bounds; direct `set` writes are taken as-is (the
//! engine does not second-guess host data).

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update};
use serde_json::json;

use crate::{Paint, PaintCtx, labeled, meter};

/// Registered type name.
pub const NAME: &str = "range";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!(0));
    fields.insert("min".into(), json!(0));
    fields.insert("max".into(), json!(100));
    fields.insert("step".into(), json!(1));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// The partial update for a one-step gesture in `direction` (±1),
/// clamped to `[min, max]`.
#[must_use]
pub fn nudge(id: &str, state: &NodeState, direction: f64) -> Update {
    let min = state.as_f64("min").unwrap_or(0.0);
    let max = state.as_f64("max").unwrap_or(100.0);
    let step = state.as_f64("step").unwrap_or(1.0);
    let value = state.as_f64("value").unwrap_or(min);
    let next = (value + direction * step).clamp(min, max);
    Update::new().value(id, next)
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let min = ctx.state.as_f64("min").unwrap_or(0.0);
    let max = ctx.state.as_f64("max").unwrap_or(100.0);
    let value = ctx.state.as_f64("value").unwrap_or(min);
    let ratio = if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    };
    labeled(ctx, &format!("{} {value} ({min}..{max})", meter(ratio)))
}
