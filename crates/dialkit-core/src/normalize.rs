//! Spec normalization.
//!
//! Turns an author-supplied [`ControlSpec`] tree into the canonical runtime
//! pair: the immutable [`TreeNode`] skeleton and the flat id → [`NodeState`]
//! map. The walk is depth-first and left-to-right, and fails fast on the
//! first problem it meets — no partial recovery, no second error.
//!
//! Per node:
//!
//! 1. Resolve the control type against the registry
//!    ([`PanelError::UnknownControlType`] if absent — resolution is eager,
//!    never lazy or forward).
//! 2. Shallow-merge configuration: start from the type's defaults, then lay
//!    every spec field on top. A spec field replaces the default wholesale,
//!    composite values included.
//! 3. Insert the merged state under the node's id
//!    ([`PanelError::DuplicateId`] if the id was already seen anywhere in
//!    the tree — uniqueness is global, not per-branch).
//! 4. Recurse into children in authored order.

use crate::error::{PanelError, Result};
use crate::registry::Registry;
use crate::spec::ControlSpec;
use crate::state::{NodeState, StateMap};
use crate::tree::TreeNode;

/// Normalize a spec tree against a registry.
///
/// On success the returned state map holds exactly one entry per node in
/// the returned tree.
pub fn normalize(spec: &ControlSpec, registry: &Registry) -> Result<(TreeNode, StateMap)> {
    let mut states = StateMap::new();
    let root = walk(spec, registry, &mut states)?;
    Ok((root, states))
}

fn walk(spec: &ControlSpec, registry: &Registry, states: &mut StateMap) -> Result<TreeNode> {
    let def = registry
        .resolve(&spec.control)
        .ok_or_else(|| PanelError::UnknownControlType {
            id: spec.id.clone(),
            control: spec.control.clone(),
        })?;

    if states.contains_key(&spec.id) {
        return Err(PanelError::DuplicateId {
            id: spec.id.clone(),
        });
    }

    // Defaults first, author overrides on top. The structural fields (id,
    // type, nodes) live on the spec struct itself, so `spec.fields` is
    // already exactly the set routed into state.
    let mut fields = def.defaults().clone();
    for (key, value) in &spec.fields {
        fields.insert(key.clone(), value.clone());
    }
    states.insert(spec.id.clone(), NodeState::new(fields));

    let mut children = Vec::with_capacity(spec.nodes.len());
    for child in &spec.nodes {
        children.push(walk(child, registry, states)?);
    }

    Ok(TreeNode::new(spec.id.clone(), spec.control.clone(), children))
}
