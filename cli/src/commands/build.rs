use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use reportkit_common::{config::Config, success};
use reportkit_core::ReportBuilder;

use crate::commands::emit_report;
use crate::terminal::print;

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Output format, e.g. PDF, Excel, HTML
    #[arg(long)]
    pub format: Option<String>,

    /// First day of the period (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of the period (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Header text, enables the header
    #[arg(long)]
    pub header: Option<String>,

    /// Footer text, enables the footer
    #[arg(long)]
    pub footer: Option<String>,

    /// Chart type, enables charts
    #[arg(long)]
    pub chart: Option<String>,

    /// Include a summary section
    #[arg(long)]
    pub summary: bool,

    /// Column to include; repeat for more columns
    #[arg(long = "column", value_name = "NAME")]
    pub columns: Vec<String>,

    /// Filter expression; repeat for more filters
    #[arg(long = "filter", value_name = "EXPR")]
    pub filters: Vec<String>,

    #[arg(long, value_name = "FIELD")]
    pub sort_by: Option<String>,

    #[arg(long, value_name = "FIELD")]
    pub group_by: Option<String>,

    /// Include totals
    #[arg(long)]
    pub totals: bool,

    #[arg(long)]
    pub orientation: Option<String>,

    #[arg(long)]
    pub page_size: Option<String>,

    /// Number the pages
    #[arg(long)]
    pub page_numbers: bool,

    /// Path to the company logo
    #[arg(long, value_name = "PATH")]
    pub company_logo: Option<String>,

    #[arg(long)]
    pub watermark: Option<String>,

    /// Also list every configured field
    #[arg(long)]
    pub inspect: bool,
}

impl BuildArgs {
    /// Replays the given options onto `builder`. Options left out are not touched.
    pub fn configure(self, builder: &mut ReportBuilder) {
        if let Some(title) = self.title {
            builder.title(title);
        }
        if let Some(format) = self.format {
            builder.format(format);
        }
        if let (Some(start), Some(end)) = (self.from, self.to) {
            builder.period(start, end);
        }
        if let Some(header) = self.header {
            builder.header(header);
        }
        if let Some(footer) = self.footer {
            builder.footer(footer);
        }
        if let Some(chart) = self.chart {
            builder.chart(chart);
        }
        if self.summary {
            builder.summary();
        }
        builder.columns(self.columns).filters(self.filters);
        if let Some(field) = self.sort_by {
            builder.sort_by(field);
        }
        if let Some(field) = self.group_by {
            builder.group_by(field);
        }
        if self.totals {
            builder.totals();
        }
        if let Some(orientation) = self.orientation {
            builder.orientation(orientation);
        }
        if let Some(page_size) = self.page_size {
            builder.page_size(page_size);
        }
        if self.page_numbers {
            builder.page_numbers();
        }
        if let Some(path) = self.company_logo {
            builder.company_logo(path);
        }
        if let Some(text) = self.watermark {
            builder.watermark(text);
        }
    }
}

pub fn build(args: BuildArgs, cfg: &Config) -> anyhow::Result<()> {
    let inspect: bool = args.inspect;
    let mut builder = ReportBuilder::new();
    args.configure(&mut builder);

    let report = builder.build().context("could not assemble the report")?;
    success!("Report '{}' assembled", report.title());

    print::header("report", cfg.quiet);
    emit_report(&report, inspect, cfg)
}
