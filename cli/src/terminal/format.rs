use crate::terminal::colors;
use colored::*;
use reportkit_core::ReportConfig;
use reportkit_core::render::format_date;

type Detail = (String, ColoredString);

/// Every configured field of `report`, in declaration order.
pub fn report_to_details(report: &ReportConfig) -> Vec<Detail> {
    vec![
        detail("Title", text(report.title())),
        detail("Format", text(report.format())),
        detail(
            "Period",
            format!(
                "{} to {}",
                format_date(report.period_start()),
                format_date(report.period_end())
            )
            .color(colors::ACCENT),
        ),
        detail("Header", toggled(report.include_header(), report.header_text())),
        detail("Footer", toggled(report.include_footer(), report.footer_text())),
        detail("Chart", toggled(report.include_charts(), report.chart_type())),
        detail("Summary", flag(report.include_summary())),
        detail("Columns", list(report.columns())),
        detail("Filters", list(report.filters())),
        detail("Sort by", text(report.sort_by())),
        detail("Group by", text(report.group_by())),
        detail("Totals", flag(report.include_totals())),
        detail("Orientation", text(report.orientation())),
        detail("Page size", text(report.page_size())),
        detail("Page numbers", flag(report.include_page_numbers())),
        detail("Logo", text(report.company_logo())),
        detail("Watermark", text(report.watermark())),
    ]
}

fn detail(key: &str, value: ColoredString) -> Detail {
    (key.to_string(), value)
}

fn text(value: &str) -> ColoredString {
    if value.trim().is_empty() {
        "-".color(colors::UNSET)
    } else {
        value.color(colors::TEXT_DEFAULT)
    }
}

fn flag(enabled: bool) -> ColoredString {
    if enabled {
        "yes".color(colors::ENABLED)
    } else {
        "no".color(colors::DISABLED)
    }
}

fn toggled(enabled: bool, value: &str) -> ColoredString {
    if enabled { text(value) } else { flag(false) }
}

fn list(values: &[String]) -> ColoredString {
    if values.is_empty() {
        "-".color(colors::UNSET)
    } else {
        values.join(", ").color(colors::TEXT_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportkit_core::{Preset, ReportBuilder};

    fn plain(details: &[Detail], key: &str) -> String {
        details
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| (**v).to_string())
            .unwrap()
    }

    #[test]
    fn test_details_cover_unrendered_fields() {
        let report = Preset::YearlyHtml.apply(&mut ReportBuilder::new()).unwrap();
        let details = report_to_details(&report);

        assert_eq!(details.len(), 17);
        assert_eq!(plain(&details, "Period"), "01/01/2024 to 31/12/2024");
        assert_eq!(plain(&details, "Summary"), "yes");
        assert_eq!(plain(&details, "Orientation"), "Landscape");
        assert_eq!(plain(&details, "Page size"), "A4");
        assert_eq!(plain(&details, "Page numbers"), "no");
        assert_eq!(plain(&details, "Columns"), "Produto, Quantidade, Valor");
        assert_eq!(plain(&details, "Sort by"), "-");
        assert_eq!(plain(&details, "Logo"), "-");
    }

    #[test]
    fn test_disabled_header_shows_as_off() {
        let report = Preset::QuarterlyExcel.apply(&mut ReportBuilder::new()).unwrap();
        let details = report_to_details(&report);

        assert_eq!(plain(&details, "Header"), "Consolidado Trimestral");
        assert_eq!(plain(&details, "Footer"), "no");
    }
}
