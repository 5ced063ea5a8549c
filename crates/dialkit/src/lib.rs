#![forbid(unsafe_code)]

//! DialKit public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the engine and the built-in control set, and offers
//! [`create`] / [`create_with`] entry points that make sure the built-in
//! controls are registered before the panel is constructed.
//!
//! # Example
//!
//! ```
//! use dialkit::{ControlSpec, Update};
//!
//! let spec = ControlSpec::new("root", "group")
//!     .child(ControlSpec::new("speed", "range").value(1).field("max", 5))
//!     .child(ControlSpec::new("paused", "toggle"));
//!
//! let mut panel = dialkit::create(&spec).unwrap();
//! assert_eq!(panel.get()["speed"], 1);
//! assert_eq!(panel.get()["paused"], false);
//!
//! panel.set(&Update::new().value("speed", 3)).unwrap();
//! assert_eq!(panel.get()["speed"], 3);
//! ```

// --- Engine re-exports -----------------------------------------------------

pub use dialkit_core::{
    ControlSpec, ControlTypeDef, Fields, InvalidationSet, NodeState, Panel, PanelError,
    PanelOptions, Registry, RenderCapability, RenderHook, RenderPass, Result, StateMap,
    StateStore, TreeNode, Update, UpdateQueue, Value,
};

// --- Controls re-exports ---------------------------------------------------

pub use dialkit_controls::{Paint, PaintCtx, TextPanel, display_name, register_builtins};

/// Build a panel from a declarative spec with default options.
///
/// Registers the built-in control set first (idempotent), then constructs
/// the panel against the process-wide catalog, so specs may freely mix
/// built-in and third-party registered types.
pub fn create(spec: &ControlSpec) -> Result<Panel> {
    create_with(spec, PanelOptions::default())
}

/// Build a panel from a declarative spec with explicit options.
pub fn create_with(spec: &ControlSpec, options: PanelOptions) -> Result<Panel> {
    dialkit_controls::register_builtins();
    Panel::create(spec, options)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    //! Day-to-day imports.
    pub use crate::{
        ControlSpec, Panel, PanelError, PanelOptions, Result, TextPanel, Update, UpdateQueue,
    };
    pub use dialkit_core as core;
    pub use dialkit_controls as controls;
}
