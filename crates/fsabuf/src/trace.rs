//! Logging shim over `tracing`.
//!
//! With the `tracing` feature enabled the macros forward to the `tracing`
//! crate. Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
