pub mod build;
pub mod demo;
pub mod preset;

use clap::{ArgAction, Parser, Subcommand};
use reportkit_common::config::Config;
use reportkit_core::{Preset, ReportConfig};

use crate::terminal::{format, print};
use build::BuildArgs;

#[derive(Parser)]
#[command(name = "reportkit")]
#[command(about = "Assemble and preview configurable reports.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (-q hides banner and headers, -qq also hides log lines)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one of the built-in report presets
    #[command(alias = "p")]
    Preset {
        /// Preset name, see `reportkit presets`
        preset: Preset,
        /// Also list every configured field
        #[arg(long)]
        inspect: bool,
    },
    /// Assemble a report from command line options
    #[command(alias = "b")]
    Build(BuildArgs),
    /// Generate the three sample sales reports
    #[command(alias = "d")]
    Demo,
    /// List the built-in presets
    Presets,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            no_color: self.no_color,
        }
    }
}

/// Writes the report rendering to stdout, followed by the full field listing
/// when `inspect` is set.
pub fn emit_report(report: &ReportConfig, inspect: bool, cfg: &Config) -> anyhow::Result<()> {
    report.generate()?;

    if inspect {
        print::header("configuration", cfg.quiet);
        print::aligned_block(format::report_to_details(report));
    }

    Ok(())
}

pub fn list_presets() {
    for preset in Preset::ALL {
        print::print_status(preset.name());
    }
}
