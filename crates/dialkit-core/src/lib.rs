#![forbid(unsafe_code)]

//! DialKit control tree engine.
//!
//! Callers describe a tree of named, typed controls as plain data; the
//! engine maintains live state for every control, exposes bulk read/write
//! access to that state, and signals a pluggable rendering layer with the
//! minimal repaint scope whenever state changes.
//!
//! ```text
//! ControlSpec tree ──▶ normalize ──▶ (TreeNode, id → NodeState)
//!                                          │
//!                                          ▼
//!                                        Panel ◀── set(Update)
//!                                          │
//!                                          ▼
//!                               InvalidationSet ──▶ render hook
//! ```
//!
//! # Key Components
//!
//! - [`registry`] — process-wide catalog of control types (render
//!   capability + defaults); last registration wins.
//! - [`normalize`] — pure spec → runtime-tree transformation with global
//!   duplicate-id detection and eager type resolution.
//! - [`state`] — flat reactive state store with shallow-merge updates.
//! - [`invalidate`] — minimal repaint-scope computation (no upward
//!   bubbling; composites cover their subtrees).
//! - [`panel`] — the façade binding tree, store and render hook.
//!
//! Everything is single-threaded, cooperative and synchronous: `normalize`,
//! `get` and `set` run to completion before returning, and no partial merge
//! is ever observable.
//!
//! # Example
//!
//! ```
//! use dialkit_core::{ControlSpec, Fields, Panel, PanelOptions, Update, registry};
//! use std::sync::Arc;
//!
//! let mut defaults = Fields::new();
//! defaults.insert("value".into(), 0.into());
//! defaults.insert("min".into(), 0.into());
//! defaults.insert("max".into(), 100.into());
//! registry::register("range", Arc::new(()), defaults);
//! registry::register("group", Arc::new(()), Fields::new());
//!
//! let spec = ControlSpec::new("root", "group")
//!     .child(ControlSpec::new("speed", "range").value(10).field("max", 20));
//!
//! let mut panel = Panel::create(&spec, PanelOptions::default()).unwrap();
//! assert_eq!(panel.get()["speed"], 10);
//!
//! panel.set(&Update::new().value("speed", 15)).unwrap();
//! assert_eq!(panel.get()["speed"], 15);
//! ```

pub mod error;
pub mod invalidate;
mod logging;
pub mod normalize;
pub mod panel;
pub mod registry;
pub mod spec;
pub mod state;
pub mod tree;

pub use error::{PanelError, Result};
pub use invalidate::InvalidationSet;
pub use panel::{Panel, PanelOptions, RenderHook, RenderPass};
pub use registry::{ControlTypeDef, Registry, RenderCapability};
pub use spec::{ControlSpec, Fields};
pub use state::{NodeState, StateMap, StateStore, Update, UpdateQueue};
pub use tree::TreeNode;

/// The dynamic field value type (re-exported from `serde_json`).
pub use serde_json::Value;
