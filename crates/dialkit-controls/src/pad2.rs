//! Two-axis pad control.
//!
//! The value is an `{x, y}` pair in `[-1, 1]` on each axis. Like every
//! composite field value it is replaced wholesale on merge, never combined
//! key-by-key — a gesture therefore always writes the full pair.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update};
use serde_json::json;

use crate::{Paint, PaintCtx, labeled};

/// Registered type name.
pub const NAME: &str = "pad2";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!({"x": 0.0, "y": 0.0}));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// The current `(x, y)` pair, with missing axes reading as zero.
#[must_use]
pub fn axes(state: &NodeState) -> (f64, f64) {
    let read = |axis: &str| {
        state
            .value()
            .and_then(|value| value.get(axis))
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    };
    (read("x"), read("y"))
}

/// The partial update for a directional gesture, moving by `(dx, dy)` and
/// clamping each axis to `[-1, 1]`.
#[must_use]
pub fn nudge(id: &str, state: &NodeState, dx: f64, dy: f64) -> Update {
    let (x, y) = axes(state);
    let next = json!({
        "x": (x + dx).clamp(-1.0, 1.0),
        "y": (y + dy).clamp(-1.0, 1.0),
    });
    Update::new().value(id, next)
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let (x, y) = axes(ctx.state);
    labeled(ctx, &format!("(x {x:+.2}, y {y:+.2})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_core::{ControlSpec, Panel, PanelOptions};

    #[test]
    fn nudge_writes_the_whole_pair() {
        let spec = ControlSpec::new("p", "pad2").value(json!({"x": 1.0, "y": 0.5}));
        let mut panel =
            Panel::with_registry(&spec, PanelOptions::default(), crate::builtin_registry())
                .unwrap();

        let update = nudge("p", panel.state("p").unwrap(), 0.5, -0.25);
        panel.set(&update).unwrap();
        assert_eq!(axes(panel.state("p").unwrap()), (1.0, 0.25));
    }

    #[test]
    fn missing_axes_read_as_zero() {
        let spec = ControlSpec::new("p", "pad2").value(json!({"x": 0.75}));
        let panel =
            Panel::with_registry(&spec, PanelOptions::default(), crate::builtin_registry())
                .unwrap();
        assert_eq!(axes(panel.state("p").unwrap()), (0.75, 0.0));
    }
}
