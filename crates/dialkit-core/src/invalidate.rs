//! Update propagation.
//!
//! Given the ids a `set` batch actually merged, [`compute`] decides the
//! minimal set of tree nodes a renderer must repaint:
//!
//! - A changed leaf invalidates itself.
//! - A changed composite invalidates itself, and that implicitly covers its
//!   whole subtree — the renderer's recursive walk re-renders through the
//!   children against the same, now-current state map. Directly-changed
//!   descendants of an invalidated composite are therefore pruned from the
//!   result.
//! - Ancestors of a changed node are never invalidated on its behalf; there
//!   is no automatic bubbling upward, which keeps invalidation proportional
//!   to what changed rather than to tree depth.
//!
//! Ids absent from the tree never appear in the result.

use std::collections::{BTreeSet, HashSet};

use crate::tree::TreeNode;

/// The set of node ids a renderer must repaint after one `set` batch.
///
/// Iteration order is sorted by id; renderers that care about paint order
/// should walk the tree and test membership instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationSet {
    ids: BTreeSet<String>,
}

impl InvalidationSet {
    /// An invalidation covering a single node.
    #[must_use]
    pub fn single(id: impl Into<String>) -> Self {
        let mut ids = BTreeSet::new();
        ids.insert(id.into());
        Self { ids }
    }

    /// Whether nothing needs repainting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of nodes to repaint.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether `id` must repaint directly.
    ///
    /// Note that a node can still be repainted as part of an invalidated
    /// ancestor's subtree without being a member here.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate the member ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    fn insert(&mut self, id: String) {
        self.ids.insert(id);
    }
}

/// Compute the minimal repaint set for `changed` against `root`.
#[must_use]
pub fn compute(changed: &[String], root: &TreeNode) -> InvalidationSet {
    let mut out = InvalidationSet::default();
    if changed.is_empty() {
        return out;
    }
    let changed: HashSet<&str> = changed.iter().map(String::as_str).collect();
    walk(root, &changed, false, &mut out);
    out
}

fn walk(node: &TreeNode, changed: &HashSet<&str>, covered: bool, out: &mut InvalidationSet) {
    let hit = changed.contains(node.id());
    if hit && !covered {
        out.insert(node.id().to_owned());
    }
    // A hit composite repaints its subtree through the renderer's own
    // recursion, so everything below it is covered.
    let covers_children = covered || (hit && node.is_composite());
    for child in node.children() {
        walk(child, changed, covers_children, out);
    }
}
