//! # Diagnostic Rendering
//!
//! Produces the human-readable summary of a finished report. The output is meant
//! for people reading a terminal, not for machines.
//!
//! Only a subset of the configuration is surfaced. Summary, totals, orientation,
//! page size, page numbers, logo, watermark and sort key never appear in the
//! output; the CLI's `--inspect` flag lists the full configuration instead.

use std::fmt;
use std::io::{self, Write};

use chrono::NaiveDate;

use crate::report::{ReportConfig, is_blank};

/// `dd/mm/yyyy`
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub const SUCCESS_LINE: &str = "Report generated successfully!";

impl ReportConfig {
    /// Writes the rendering to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }

    /// Writes the rendering to standard output.
    pub fn generate(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.render(&mut lock)
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Generating report: {} ===", self.title())?;
        writeln!(f, "Format: {}", self.format())?;
        writeln!(
            f,
            "Period: {} to {}",
            format_date(self.period_start()),
            format_date(self.period_end())
        )?;

        if self.include_header() {
            writeln!(f, "Header: {}", self.header_text())?;
        }

        if self.include_charts() {
            writeln!(f, "Chart: {}", self.chart_type())?;
        }

        writeln!(f, "Columns: {}", self.columns().join(", "))?;

        if !self.filters().is_empty() {
            writeln!(f, "Filters: {}", self.filters().join(", "))?;
        }

        if !is_blank(self.group_by()) {
            writeln!(f, "Grouped by: {}", self.group_by())?;
        }

        if self.include_footer() {
            writeln!(f, "Footer: {}", self.footer_text())?;
        }

        writeln!(f, "{SUCCESS_LINE}")
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ReportBuilder;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn minimal() -> ReportBuilder {
        let mut builder = ReportBuilder::new();
        builder
            .title("Inventory")
            .format("HTML")
            .period(date(2024, 3, 5), date(2024, 11, 30))
            .add_column("Sku");
        builder
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 1, 9)), "09/01/2024");
    }

    #[test]
    fn test_minimal_rendering_has_only_mandatory_lines() {
        let report = minimal().build().unwrap();
        let lines: Vec<String> = report.to_string().lines().map(String::from).collect();

        assert_eq!(
            lines,
            [
                "=== Generating report: Inventory ===",
                "Format: HTML",
                "Period: 05/03/2024 to 30/11/2024",
                "Columns: Sku",
                SUCCESS_LINE,
            ]
        );
    }

    #[test]
    fn test_optional_lines_follow_fixed_order() {
        let mut builder = minimal();
        builder
            .footer("Internal")
            .group_by("Region")
            .add_filter("Channel=Online")
            .add_filter("Year=2024")
            .chart("Pie")
            .header("Board Pack")
            .add_column("Qty");
        let output = builder.build().unwrap().to_string();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            [
                "=== Generating report: Inventory ===",
                "Format: HTML",
                "Period: 05/03/2024 to 30/11/2024",
                "Header: Board Pack",
                "Chart: Pie",
                "Columns: Sku, Qty",
                "Filters: Channel=Online, Year=2024",
                "Grouped by: Region",
                "Footer: Internal",
                SUCCESS_LINE,
            ]
        );
    }

    #[test]
    fn test_unrendered_fields_stay_hidden() {
        let mut builder = minimal();
        builder
            .summary()
            .totals()
            .page_numbers()
            .sort_by("Sku")
            .orientation("Landscape")
            .page_size("Letter")
            .company_logo("logo.png")
            .watermark("Secret")
            .group_by("   ");
        let output = builder.build().unwrap().to_string();

        assert_eq!(output.lines().count(), 5);
        for hidden in ["Landscape", "Letter", "logo.png", "Secret", "Grouped by"] {
            assert!(!output.contains(hidden), "unexpected {hidden} in output");
        }
    }

    #[test]
    fn test_render_into_writer() {
        let report = minimal().build().unwrap();
        let mut buf: Vec<u8> = Vec::new();
        report.render(&mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }
}
