#![cfg(test)]
use reportkit_common::success;
use reportkit_core::Preset;

/// This crate has no direct `tracing` dependency; the macro must resolve it
/// through `reportkit-common`.
#[test]
fn success_macro_expands_without_local_tracing() {
    let preset: Preset = Preset::MonthlyPdf;
    success!("Preset '{preset}' assembled");
    success!(count = 3, "reports generated");
}
