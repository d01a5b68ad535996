//! Logging macros shared across crates.
//!
//! Plain levels go through `tracing` directly. [`success!`](crate::success) only adds a
//! dedicated target so terminal formatters can render it differently from a
//! regular `INFO` line.

/// Target used by [`success!`](crate::success) events.
pub const SUCCESS_TARGET: &str = "reportkit::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}
