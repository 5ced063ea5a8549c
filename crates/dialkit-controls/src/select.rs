//! One-of-options dropdown control.

use std::sync::Arc;

use dialkit_core::registry::ControlTypeDef;
use dialkit_core::{Fields, NodeState, Update, Value};
use serde_json::json;

use crate::{Paint, PaintCtx, cycle_options, labeled};

/// Registered type name.
pub const NAME: &str = "select";

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

/// The partial update for a cycle gesture (±1 through the options, with
/// wraparound). `None` when there are no options to cycle through.
#[must_use]
pub fn cycle(id: &str, state: &NodeState, direction: i64) -> Option<Update> {
    cycle_options(state, direction).map(|next| Update::new().value(id, next))
}

fn paint(ctx: &PaintCtx<'_>) -> String {
    let current = match ctx.state.value() {
        Some(Value::String(choice)) => choice.clone(),
        Some(Value::Null) | None => "—".to_owned(),
        Some(other) => other.to_string(),
    };
    labeled(ctx, &format!("‹ {current} ›"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_core::{ControlSpec, Panel, PanelOptions};
    use serde_json::json;

    fn panel() -> Panel {
        let spec = ControlSpec::new("s", "select").field("options", json!(["A", "B", "C"]));
        Panel::with_registry(&spec, PanelOptions::default(), crate::builtin_registry()).unwrap()
    }

    #[test]
    fn cycle_starts_at_the_first_option() {
        let mut panel = panel();
        let update = cycle("s", panel.state("s").unwrap(), 1).unwrap();
        panel.set(&update).unwrap();
        assert_eq!(panel.get()["s"], "A");
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let mut panel = panel();
        panel.set(&Update::new().value("s", "C")).unwrap();

        let update = cycle("s", panel.state("s").unwrap(), 1).unwrap();
        panel.set(&update).unwrap();
        assert_eq!(panel.get()["s"], "A");

        let update = cycle("s", panel.state("s").unwrap(), -1).unwrap();
        panel.set(&update).unwrap();
        assert_eq!(panel.get()["s"], "C");
    }

    #[test]
    fn no_options_means_no_gesture() {
        let spec = ControlSpec::new("s", "select");
        let panel =
            Panel::with_registry(&spec, PanelOptions::default(), crate::builtin_registry())
                .unwrap();
        assert!(cycle("s", panel.state("s").unwrap(), 1).is_none());
    }
}
