//! Control type registry.
//!
//! The registry is the process-wide catalog mapping a control type name to
//! its render capability and default configuration. It is populated once per
//! type at load time (before any panel referencing the type is created) and
//! read by the normalizer thereafter; there is no removal.
//!
//! Re-registering under an existing name replaces the prior entry —
//! last registration wins. This permits type redefinition during interactive
//! development, but it means registration order is observable.
//!
//! [`Registry`] is also an ordinary value type: tests and embedders that do
//! not want process-wide state can build an isolated catalog and hand it to
//! [`Panel::with_registry`].
//!
//! [`Panel::with_registry`]: crate::panel::Panel::with_registry

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, RwLock};

use crate::logging::debug;
use crate::spec::Fields;

/// Opaque render capability handle.
///
/// The core stores and hands this through to the rendering layer without
/// interpreting it; its shape is entirely a contract between whoever
/// registers the control type and whoever renders it.
pub type RenderCapability = Arc<dyn Any + Send + Sync>;

/// A registered control type: name, render capability, defaults.
#[derive(Clone)]
pub struct ControlTypeDef {
    name: String,
    render: RenderCapability,
    defaults: Arc<Fields>,
}

impl ControlTypeDef {
    /// Bundle a control type definition.
    ///
    /// `defaults` must contain only statically known fields for the type;
    /// the registry never mutates it.
    #[must_use]
    pub fn new(name: impl Into<String>, render: RenderCapability, defaults: Fields) -> Self {
        Self {
            name: name.into(),
            render,
            defaults: Arc::new(defaults),
        }
    }

    /// The registry key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque render capability.
    #[must_use]
    pub fn render(&self) -> &RenderCapability {
        &self.render
    }

    /// Downcast the render capability to the concrete type a rendering
    /// layer expects. Returns `None` when the capability was registered
    /// with a different concrete type.
    #[must_use]
    pub fn render_as<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.render.downcast_ref::<T>()
    }

    /// The default configuration merged under every spec of this type.
    #[must_use]
    pub fn defaults(&self) -> &Fields {
        &self.defaults
    }
}

impl fmt::Debug for ControlTypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The capability is opaque; only its presence is observable.
        f.debug_struct("ControlTypeDef")
            .field("name", &self.name)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// A catalog of control type definitions.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashMap<String, ControlTypeDef>,
}

impl Registry {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a definition. Re-registering an existing name replaces the
    /// prior entry (last registration wins).
    pub fn register(&mut self, def: ControlTypeDef) {
        let name = def.name().to_owned();
        if self.types.insert(name.clone(), def).is_some() {
            debug!(control = %name, "control type re-registered, last write wins");
        }
    }

    /// Look up a definition by type name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&ControlTypeDef> {
        self.types.get(name)
    }

    /// Whether a type name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

static GLOBAL: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Register a control type in the process-wide catalog.
///
/// Third parties add new control types purely by calling this before
/// constructing any panel that references `name`.
pub fn register(name: impl Into<String>, render: RenderCapability, defaults: Fields) {
    let def = ControlTypeDef::new(name, render, defaults);
    GLOBAL
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .register(def);
}

/// Register a pre-built definition in the process-wide catalog.
pub fn register_def(def: ControlTypeDef) {
    GLOBAL
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .register(def);
}

/// Snapshot the process-wide catalog.
///
/// Panels clone the catalog at construction, so later `register` calls
/// affect only panels created afterwards.
#[must_use]
pub fn global() -> Registry {
    GLOBAL
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}
