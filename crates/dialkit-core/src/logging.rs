//! Logging support.
//!
//! Re-exports the `tracing` macros the engine emits when the `tracing`
//! feature is enabled. When the feature is disabled, no-op shims are
//! substituted so call sites compile away entirely.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod noop {
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
    pub(crate) use trace;
}

#[cfg(not(feature = "tracing"))]
pub(crate) use noop::{debug, trace};
