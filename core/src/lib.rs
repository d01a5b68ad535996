//! # Reportkit Core
//!
//! Assembles highly configurable reports without giant constructors or open setters.
//!
//! ## Construction Protocol
//! * **[`builder`]**: [`ReportBuilder`] accumulates configuration through chained calls
//!   and validates it once, at [`ReportBuilder::build`].
//! * **[`report`]**: [`ReportConfig`] is the finished, read-only result.
//! * **[`director`]**: Canned recipes that drive a builder through a fixed sequence.
//!
//! ```
//! use chrono::NaiveDate;
//! use reportkit_core::ReportBuilder;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//!
//! let report = ReportBuilder::new()
//!     .title("Monthly Sales")
//!     .format("PDF")
//!     .period(start, end)
//!     .add_column("Product")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(report.columns(), ["Product"]);
//! ```

pub mod builder;
pub mod director;
pub mod render;
pub mod report;

pub use builder::ReportBuilder;
pub use director::Preset;
pub use report::ReportConfig;
