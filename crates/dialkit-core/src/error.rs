//! Error types for panel construction and updates.
//!
//! All failures are detected synchronously: construction is all-or-nothing
//! (no partial panel is ever returned), and there is no retry surface —
//! every operation is a local, pure computation over in-memory structures.

use std::fmt;

/// Errors produced while constructing or updating a [`Panel`].
///
/// [`Panel`]: crate::panel::Panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// A node references a control type that was never registered.
    ///
    /// Fatal to panel construction; normalization aborts at the first
    /// offending node in depth-first, left-to-right order.
    UnknownControlType {
        /// Id of the node carrying the unresolved type.
        id: String,
        /// The type name that failed to resolve.
        control: String,
    },
    /// Two nodes in the same spec share an id, at any nesting depth.
    ///
    /// Fatal to panel construction.
    DuplicateId {
        /// The id that appeared more than once.
        id: String,
    },
    /// A strict-mode `set` targeted an id the tree does not contain.
    ///
    /// Only raised when [`PanelOptions::strict`] is enabled; the default
    /// policy drops the offending entry and applies the rest of the batch.
    ///
    /// [`PanelOptions::strict`]: crate::panel::PanelOptions::strict
    UnknownTarget {
        /// The id no node answers to.
        id: String,
    },
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::UnknownControlType { id, control } => {
                write!(f, "node `{id}` references unregistered control type `{control}`")
            }
            PanelError::DuplicateId { id } => {
                write!(f, "duplicate node id `{id}`")
            }
            PanelError::UnknownTarget { id } => {
                write!(f, "update targets unknown node id `{id}`")
            }
        }
    }
}

impl std::error::Error for PanelError {}

/// Result type for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;
