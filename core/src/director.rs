//! # Report Director
//!
//! Canned report recipes. Each recipe drives a [`ReportBuilder`] through a fixed
//! sequence of calls and finishes with [`ReportBuilder::build`], so it fails in
//! exactly the same ways a hand-written chain would.
//!
//! [`Preset`] names the recipes so they can be picked at runtime (for example
//! from the command line).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use reportkit_common::{ReportError, Result};

use crate::builder::ReportBuilder;
use crate::report::ReportConfig;

const JAN_1: NaiveDate = date(2024, 1, 1);
const JAN_31: NaiveDate = date(2024, 1, 31);
const MAR_31: NaiveDate = date(2024, 3, 31);
const DEC_31: NaiveDate = date(2024, 12, 31);

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid preset date"),
    }
}

/// Monthly sales report in PDF for January 2024.
pub fn monthly_pdf(builder: &mut ReportBuilder) -> Result<ReportConfig> {
    builder
        .title("Vendas Mensais")
        .format("PDF")
        .period(JAN_1, JAN_31)
        .header("Relatório de Vendas")
        .footer("Confidencial")
        .add_column("Produto")
        .add_column("Quantidade")
        .add_column("Valor")
        .chart("Bar")
        .add_filter("Status=Ativo")
        .sort_by("Valor")
        .group_by("Categoria")
        .totals()
        .orientation("Portrait")
        .page_size("A4")
        .page_numbers()
        .watermark("Confidencial")
        .build()
}

/// Quarterly spreadsheet consolidated per region, Q1 2024.
pub fn quarterly_excel(builder: &mut ReportBuilder) -> Result<ReportConfig> {
    builder
        .title("Relatório Trimestral")
        .format("Excel")
        .period(JAN_1, MAR_31)
        .header("Consolidado Trimestral")
        .add_column("Vendedor")
        .add_column("Região")
        .add_column("Total")
        .chart("Line")
        .group_by("Região")
        .totals()
        .build()
}

/// Yearly executive dashboard in HTML for 2024, online channel only.
pub fn yearly_html(builder: &mut ReportBuilder) -> Result<ReportConfig> {
    builder
        .title("Vendas Anuais")
        .format("HTML")
        .period(JAN_1, DEC_31)
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
        .build()
}

/// A named director recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    MonthlyPdf,
    QuarterlyExcel,
    YearlyHtml,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::MonthlyPdf, Preset::QuarterlyExcel, Preset::YearlyHtml];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::MonthlyPdf => "monthly-pdf",
            Preset::QuarterlyExcel => "quarterly-excel",
            Preset::YearlyHtml => "yearly-html",
        }
    }

    /// Drives `builder` through this preset's recipe.
    pub fn apply(&self, builder: &mut ReportBuilder) -> Result<ReportConfig> {
        match self {
            Preset::MonthlyPdf => monthly_pdf(builder),
            Preset::QuarterlyExcel => quarterly_excel(builder),
            Preset::YearlyHtml => yearly_html(builder),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ReportError;

    /// Accepts names case-insensitively, with `-` or `_` as separator
    /// (`monthly-pdf`, `Monthly_PDF`, ...).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");

        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| ReportError::UnknownPreset(s.to_string()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
