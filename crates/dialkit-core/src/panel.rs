//! Panel façade.
//!
//! A [`Panel`] binds the three engine pieces — the immutable [`TreeNode`]
//! root, the [`StateStore`], and the update propagator — into the one object
//! handed to callers, and owns the render-trigger hook at the boundary to
//! the external rendering layer.
//!
//! # Rendering boundary
//!
//! The engine performs no rendering itself. A host attaches a hook with
//! [`Panel::attach_renderer`]; the hook receives a [`RenderPass`] — the
//! state map, the tree, the registry snapshot (for capability lookups), the
//! panel's class names, and the dirty set — once on attach (a full pass
//! rooted at the tree root) and once per effective `set` batch thereafter.
//! The renderer walks composites recursively in authored child order,
//! reading node state by id; repainting a composite repaints through its
//! children against the same, now-current state.
//!
//! # Re-entrancy
//!
//! `set` is merge-then-notify and must not be re-entered before it returns.
//! The hook runs under the panel's exclusive borrow, so a recursive `set`
//! from inside a render pass does not compile; interaction handlers push
//! into an [`UpdateQueue`] instead and the host drains it between passes.
//!
//! [`UpdateQueue`]: crate::state::UpdateQueue

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::Result;
use crate::invalidate::{self, InvalidationSet};
use crate::logging::{debug, trace};
use crate::normalize::normalize;
use crate::registry::{self, Registry};
use crate::spec::ControlSpec;
use crate::state::{NodeState, StateStore, Update};
use crate::tree::TreeNode;

/// Construction options for [`Panel::create`].
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    /// Presentation class names handed through to the rendering layer
    /// (theme selection); the engine does not interpret them.
    pub class_names: Vec<String>,
    /// Reject `set` batches that target ids the tree does not contain,
    /// instead of silently dropping the offending entries.
    pub strict: bool,
}

impl PanelOptions {
    /// Options with a set of presentation class names.
    #[must_use]
    pub fn with_class_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            class_names: names.into_iter().map(Into::into).collect(),
            strict: false,
        }
    }
}

/// Borrowed view of everything a renderer needs for one pass.
#[derive(Debug)]
pub struct RenderPass<'a> {
    /// The single source of truth for node configuration.
    pub store: &'a StateStore,
    /// The structural skeleton to walk.
    pub root: &'a TreeNode,
    /// Control type catalog for render-capability lookups.
    pub registry: &'a Registry,
    /// The panel's presentation class names.
    pub class_names: &'a [String],
    /// Nodes that must repaint. On the initial pass this is the root id,
    /// which covers the whole tree.
    pub dirty: &'a InvalidationSet,
}

/// Render-trigger hook supplied by the host.
pub type RenderHook = Box<dyn FnMut(&RenderPass<'_>)>;

/// A live control panel: fixed tree shape, mutable per-node state.
pub struct Panel {
    root: TreeNode,
    store: StateStore,
    registry: Registry,
    class_names: Vec<String>,
    strict: bool,
    hook: Option<RenderHook>,
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The render hook is an opaque closure; only its presence is observable.
        f.debug_struct("Panel")
            .field("root", &self.root)
            .field("store", &self.store)
            .field("registry", &self.registry)
            .field("class_names", &self.class_names)
            .field("strict", &self.strict)
            .field("hook", &self.hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

impl Panel {
    /// Build a panel from a declarative spec against the process-wide
    /// control type catalog.
    ///
    /// Construction is all-or-nothing: on error no panel exists.
    pub fn create(spec: &ControlSpec, options: PanelOptions) -> Result<Self> {
        Self::with_registry(spec, options, registry::global())
    }

    /// Build a panel against an explicit catalog (isolated from the
    /// process-wide one).
    pub fn with_registry(
        spec: &ControlSpec,
        options: PanelOptions,
        registry: Registry,
    ) -> Result<Self> {
        let (root, states) = normalize(spec, &registry)?;
        debug!(root = %root.id(), nodes = states.len(), "panel created");
        Ok(Self {
            root,
            store: StateStore::new(states),
            registry,
            class_names: options.class_names,
            strict: options.strict,
            hook: None,
        })
    }

    /// The structural root.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// The state store.
    #[must_use]
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// The registry snapshot this panel resolves against.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The panel's presentation class names.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Current state of one node.
    #[must_use]
    pub fn state(&self, id: &str) -> Option<&NodeState> {
        self.store.state(id)
    }

    /// Flattened value snapshot: id → current `value` for every
    /// value-bearing node.
    #[must_use]
    pub fn get(&self) -> BTreeMap<String, Value> {
        self.store.snapshot()
    }

    /// Apply a batch of partial per-node updates.
    ///
    /// Merges every entry, computes the minimal repaint set, invokes the
    /// render hook (if attached), and returns the repaint set. An empty
    /// batch changes nothing and triggers nothing.
    pub fn set(&mut self, update: &Update) -> Result<InvalidationSet> {
        let applied = self.store.apply(update, self.strict)?;
        if applied.is_empty() {
            return Ok(InvalidationSet::default());
        }

        let dirty = invalidate::compute(&applied, &self.root);
        trace!(applied = applied.len(), dirty = dirty.len(), "set applied");
        if let Some(hook) = self.hook.as_mut() {
            if !dirty.is_empty() {
                hook(&RenderPass {
                    store: &self.store,
                    root: &self.root,
                    registry: &self.registry,
                    class_names: &self.class_names,
                    dirty: &dirty,
                });
            }
        }
        Ok(dirty)
    }

    /// Attach the render-trigger hook and run an initial full pass.
    ///
    /// Replaces any previously attached hook.
    pub fn attach_renderer(&mut self, mut hook: impl FnMut(&RenderPass<'_>) + 'static) {
        let dirty = InvalidationSet::single(self.root.id());
        hook(&RenderPass {
            store: &self.store,
            root: &self.root,
            registry: &self.registry,
            class_names: &self.class_names,
            dirty: &dirty,
        });
        self.hook = Some(Box::new(hook));
    }

    /// Release the panel. Tree and state are dropped together; further use
    /// is statically impossible.
    pub fn dispose(self) {
        debug!(root = %self.root.id(), "panel disposed");
    }
}
