//! End-to-end scenarios across the reportkit crates.

mod logging;
mod report;
