//! Declarative control specs.
//!
//! A [`ControlSpec`] is the author-supplied description of one control: an
//! id, a control type name, optional child specs (for composite types such
//! as groups), and any number of type-specific configuration fields
//! (`label`, `value`, `min`, `max`, `options`, …). Specs are plain data —
//! they exist only transiently during panel construction and are never
//! mutated by the engine.
//!
//! The serde representation is the project's one wire format: a JSON object
//! tree with required `id` and `type`, an optional `nodes` array, and every
//! other key captured as a type-specific field.
//!
//! # Example
//!
//! ```
//! use dialkit_core::spec::ControlSpec;
//!
//! let spec = ControlSpec::new("root", "group")
//!     .child(ControlSpec::new("speed", "range").value(1.0).field("max", 5.0))
//!     .child(ControlSpec::new("tint", "color").value("#000000"));
//!
//! assert_eq!(spec.nodes.len(), 2);
//! assert_eq!(spec.nodes[0].fields["max"], 5.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered map of type-specific configuration fields.
///
/// Values are [`serde_json::Value`], so a field supplied by a spec replaces
/// the corresponding default wholesale — composite values such as an
/// `{x, y}` pair are never merged key-by-key.
pub type Fields = BTreeMap<String, Value>;

/// One node of a declarative panel description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSpec {
    /// Node id; must be unique across the entire tree, at any depth.
    pub id: String,
    /// Name of a registered control type.
    #[serde(rename = "type")]
    pub control: String,
    /// Ordered child specs. Only meaningful for composite control types;
    /// order is preserved exactly as authored (it is the rendering order).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<ControlSpec>,
    /// Every non-structural field: `label`, `value`, and whatever the
    /// control type understands.
    #[serde(flatten)]
    pub fields: Fields,
}

impl ControlSpec {
    /// Create a spec for a node of the given control type.
    #[must_use]
    pub fn new(id: impl Into<String>, control: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            control: control.into(),
            nodes: Vec::new(),
            fields: Fields::new(),
        }
    }

    /// Set a type-specific configuration field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set the display label.
    #[must_use]
    pub fn label(self, label: impl Into<String>) -> Self {
        self.field("label", label.into())
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(self, value: impl Into<Value>) -> Self {
        self.field("value", value)
    }

    /// Append a child spec.
    #[must_use]
    pub fn child(mut self, node: ControlSpec) -> Self {
        self.nodes.push(node);
        self
    }

    /// Set the children from a vec.
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<ControlSpec>) -> Self {
        self.nodes = nodes;
        self
    }

    /// Parse a spec from its JSON wire form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the spec to its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_routes_fields() {
        let spec = ControlSpec::new("speed", "range")
            .label("speed")
            .value(1.5)
            .field("min", 0)
            .field("max", 5);

        assert_eq!(spec.id, "speed");
        assert_eq!(spec.control, "range");
        assert_eq!(spec.fields["label"], "speed");
        assert_eq!(spec.fields["value"], 1.5);
        assert_eq!(spec.fields["min"], 0);
        assert_eq!(spec.fields["max"], 5);
        assert!(spec.nodes.is_empty());
    }

    #[test]
    fn wire_format_round_trips() {
        let json = r##"{
            "id": "root",
            "type": "group",
            "label": "settings",
            "nodes": [
                {"id": "a", "type": "range", "value": 10, "min": 0, "max": 20},
                {"id": "b", "type": "pad2", "value": {"x": 1, "y": 0.5}}
            ]
        }"##;

        let spec = ControlSpec::from_json(json).unwrap();
        assert_eq!(spec.control, "group");
        assert_eq!(spec.fields["label"], "settings");
        assert_eq!(spec.nodes.len(), 2);
        assert_eq!(spec.nodes[1].fields["value"], json!({"x": 1, "y": 0.5}));

        let back = ControlSpec::from_json(&spec.to_json().unwrap()).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn nodes_key_is_optional_on_the_wire() {
        let spec = ControlSpec::from_json(r#"{"id": "t", "type": "toggle", "value": true}"#).unwrap();
        assert!(spec.nodes.is_empty());
        assert!(!spec.to_json().unwrap().contains("nodes"));
    }
}
