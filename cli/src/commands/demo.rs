use chrono::NaiveDate;
use colored::*;
use reportkit_common::config::Config;
use reportkit_core::{ReportBuilder, ReportConfig, director};

use crate::rprint;
use crate::terminal::{colors, print};

/// Reproduces the sample run: one report through the director, two assembled
/// inline with the builder.
pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let reports: Vec<ReportConfig> = vec![
        director::monthly_pdf(&mut ReportBuilder::new())?,
        quarterly_excel()?,
        yearly_html()?,
    ];

    print::header("sales reports", cfg.quiet);
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            rprint!();
        }
        report.generate()?;
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        let count: ColoredString = format!("{} reports", reports.len()).bold().green();
        let output: ColoredString =
            format!("Demo complete: {count} generated").color(colors::TEXT_DEFAULT);
        print::centerln(&output.to_string());
    }

    Ok(())
}

// Inline builder chains, kept apart from the director recipes they mirror.
fn quarterly_excel() -> anyhow::Result<ReportConfig> {
    let report = ReportBuilder::new()
        .title("Relatório Trimestral")
        .format("Excel")
        .period(date(2024, 1, 1)?, date(2024, 3, 31)?)
        .header("Consolidado Trimestral")
        .add_column("Vendedor")
        .add_column("Região")
        .add_column("Total")
        .chart("Line")
        .group_by("Região")
        .totals()
        .build()?;

    Ok(report)
}

fn yearly_html() -> anyhow::Result<ReportConfig> {
    let report = ReportBuilder::new()
        .title("Vendas Anuais")
        .format("HTML")
        .period(date(2024, 1, 1)?, date(2024, 12, 31)?)
        .header("Painel Executivo")
        .footer("Uso interno")
        .add_column("Produto")
        .add_column("Quantidade")
        .add_column("Valor")
        .chart("Pie")
        .add_filter("Canal=Online")
        .summary()
        .totals()
        .orientation("Landscape")
        .build()?;

    Ok(report)
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("invalid date {year}-{month}-{day}"))
}
