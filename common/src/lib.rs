//! # Reportkit Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`config`]**: Run configuration assembled by the command line front end.
//! * **[`error`]**: The error kinds raised while assembling a report.
//! * **[`macros`]**: Logging helpers on top of `tracing`.

pub mod config;
pub mod error;
pub mod macros;

pub use error::{ReportError, Result, Violation};

#[doc(hidden)]
pub use tracing;
