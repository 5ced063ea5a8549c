//! Numeric entry control.
//!
//! A bare number without range semantics; use `range` when the value has
//! meaningful bounds.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update};
use serde_json::json;

use crate::{Paint, PaintCtx, labeled};

/// Registered type name.
pub const NAME: &str = "number";

/// Registered defaults.
#[must_use]
pub fn defaults() -> Fields {
    let mut fields = Fields::new();
    fields.insert("value".into(), json!(0));
    fields
}

pub(crate) fn def() -> ControlTypeDef {
    ControlTypeDef::new(NAME, Arc::new(Paint::new(paint)), defaults())
}

/// The partial update for a +1/-1 gesture.
#[must_use]
pub fn nudge(id: &str, state: &NodeState, direction: f64) -> Update {
    let value = state.as_f64("value").unwrap_or(0.0);
    Update::new().value(id, value + direction)
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let value = ctx.state.as_f64("value").unwrap_or(0.0);
    labeled(ctx, &format!("{value}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_core::{ControlSpec, Panel, PanelOptions};

    #[test]
    fn nudge_moves_by_one() {
        let spec = ControlSpec::new("n", "number").value(41);
        let mut panel =
            Panel::with_registry(&spec, PanelOptions::default(), crate::builtin_registry())
                .unwrap();

        let update = nudge("n", panel.state("n").unwrap(), 1.0);
        panel.set(&update).unwrap();
        assert_eq!(panel.state("n").unwrap().as_f64("value"), Some(42.0));
    }
}
