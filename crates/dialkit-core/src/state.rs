//! Reactive state store.
//!
//! The store owns the flat id → [`NodeState`] map produced by normalization
//! and is the single source of truth the rendering layer reads. Lookup is
//! O(1) by id regardless of tree depth — state is deliberately flat, never
//! a nested tree of mutable objects; that is what makes partial updates and
//! global duplicate-id detection tractable.
//!
//! # Update contract
//!
//! [`StateStore::apply`] takes a batch of per-id partial field maps and
//! shallow-merges each into the existing state: fields named in the patch
//! replace the old field wholesale, fields not named are left untouched.
//! Merges are synchronous — a snapshot taken immediately after observes
//! every one of them, and no partial merge is ever observable in between.
//!
//! | Situation            | Default policy            | Strict mode            |
//! |----------------------|---------------------------|------------------------|
//! | Known id, patch      | merged, reported          | merged, reported       |
//! | Unknown id           | entry dropped (traced)    | whole batch rejected   |
//! | Empty patch          | skipped, not reported     | skipped, not reported  |
//!
//! Strict mode validates every target id before applying anything, so a
//! rejected batch leaves the store untouched.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use smallvec::SmallVec;

use crate::error::{PanelError, Result};
use crate::logging::trace;
use crate::spec::Fields;

/// Merged runtime configuration for one node: the type's defaults overlaid
/// with the author's spec fields and every subsequent update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeState {
    fields: Fields,
}

impl NodeState {
    pub(crate) fn new(fields: Fields) -> Self {
        Self { fields }
    }

    /// All current fields.
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Look up a single field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The node's primary `value` field, when it carries one.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.get("value")
    }

    /// A field coerced to `f64`, when present and numeric.
    #[must_use]
    pub fn as_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// A field coerced to `bool`, when present and boolean.
    #[must_use]
    pub fn as_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// A field coerced to `&str`, when present and a string.
    #[must_use]
    pub fn as_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// The display label, when one was configured.
    ///
    /// An empty or null label is the author's way of hiding the label
    /// entirely; the id fallback is the rendering layer's concern.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.as_str("label")
    }

    /// Shallow-merge a patch: later write replaces, untouched fields stay.
    pub(crate) fn merge(&mut self, patch: &Fields) {
        for (key, value) in patch {
            self.fields.insert(key.clone(), value.clone());
        }
    }
}

/// Flat id → state mapping.
pub type StateMap = HashMap<String, NodeState>;

/// Changed-id list produced by one `apply` batch.
pub(crate) type AppliedIds = SmallVec<[String; 8]>;

/// A batch of partial per-node updates, keyed by node id.
///
/// # Example
///
/// ```
/// use dialkit_core::state::Update;
///
/// let update = Update::new()
///     .value("speed", 1.5)
///     .field("speed", "max", 10)
///     .value("paused", true);
/// assert_eq!(update.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    entries: BTreeMap<String, Fields>,
}

impl Update {
    /// Create an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch one field of one node.
    #[must_use]
    pub fn field(
        mut self,
        id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.entries
            .entry(id.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Patch a node's primary `value` field.
    #[must_use]
    pub fn value(self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.field(id, "value", value)
    }

    /// Merge a whole field map into one node's entry.
    #[must_use]
    pub fn fields(mut self, id: impl Into<String>, fields: Fields) -> Self {
        self.entries.entry(id.into()).or_default().extend(fields);
        self
    }

    /// Number of targeted nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch targets no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the per-node patches in id order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Fields)> {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, Fields>> for Update {
    fn from(entries: BTreeMap<String, Fields>) -> Self {
        Self { entries }
    }
}

/// Deferred update mailbox from the rendering layer back into the panel.
///
/// Render hooks run under the panel's exclusive borrow, so interaction
/// handlers cannot call `set` re-entrantly. Instead they push batches here
/// and the host drains the queue into `set` between passes.
#[derive(Debug, Default)]
pub struct UpdateQueue {
    pending: Vec<Update>,
}

impl UpdateQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a batch.
    pub fn push(&mut self, update: Update) {
        self.pending.push(update);
    }

    /// Drain every pending batch in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = Update> + '_ {
        self.pending.drain(..)
    }

    /// Whether anything is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Owner of the flat state map.
#[derive(Debug, Default)]
pub struct StateStore {
    states: StateMap,
}

impl StateStore {
    pub(crate) fn new(states: StateMap) -> Self {
        Self { states }
    }

    /// Current state of one node.
    #[must_use]
    pub fn state(&self, id: &str) -> Option<&NodeState> {
        self.states.get(id)
    }

    /// Number of nodes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate all `(id, state)` pairs, in no guaranteed order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &NodeState)> {
        self.states.iter()
    }

    /// Flattened value snapshot: one entry per node whose state carries a
    /// `value` field. Composite nodes without a value of their own are
    /// omitted; their children appear individually by id.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.states
            .iter()
            .filter_map(|(id, state)| state.value().map(|value| (id.clone(), value.clone())))
            .collect()
    }

    /// Apply a batch, returning the ids whose state was merged, in batch
    /// (id) order.
    pub(crate) fn apply(&mut self, update: &Update, strict: bool) -> Result<AppliedIds> {
        if strict {
            for (id, _) in update.entries() {
                if !self.states.contains_key(id) {
                    return Err(PanelError::UnknownTarget { id: id.clone() });
                }
            }
        }

        let mut applied = AppliedIds::new();
        for (id, patch) in update.entries() {
            if patch.is_empty() {
                continue;
            }
            match self.states.get_mut(id) {
                Some(state) => {
                    state.merge(patch);
                    applied.push(id.clone());
                }
                None => {
                    trace!(id = %id, "dropping update for unknown node id");
                }
            }
        }
        Ok(applied)
    }
}
