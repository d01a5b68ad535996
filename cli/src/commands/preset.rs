use reportkit_common::{config::Config, success};
use reportkit_core::{Preset, ReportBuilder};

use crate::commands::emit_report;
use crate::terminal::print;

pub fn preset(preset: Preset, inspect: bool, cfg: &Config) -> anyhow::Result<()> {
    let report = preset.apply(&mut ReportBuilder::new())?;
    success!("Preset '{preset}' assembled");

    print::header(&format!("{preset} report"), cfg.quiet);
    emit_report(&report, inspect, cfg)
}
