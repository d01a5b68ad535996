//! # Report Model
//!
//! [`ReportConfig`] is the finished report handed out by the builder. Its fields
//! are private and only readable through accessors, so a caller can never hold a
//! half-configured report.
//!
//! While a report is being assembled its state lives in [`ReportDraft`], which is
//! visible to this crate only. The draft tracks the period with `Option` so an
//! unset bound is distinguishable from any real date.

use chrono::NaiveDate;
use reportkit_common::Violation;

pub const DEFAULT_ORIENTATION: &str = "Portrait";
pub const DEFAULT_PAGE_SIZE: &str = "A4";

/// A complete, validated report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    title: String,
    format: String,
    period_start: NaiveDate,
    period_end: NaiveDate,
    include_header: bool,
    header_text: String,
    include_footer: bool,
    footer_text: String,
    include_charts: bool,
    chart_type: String,
    include_summary: bool,
    columns: Vec<String>,
    filters: Vec<String>,
    sort_by: String,
    group_by: String,
    include_totals: bool,
    orientation: String,
    page_size: String,
    include_page_numbers: bool,
    company_logo: String,
    watermark: String,
}

impl ReportConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renderer identifier, e.g. `"PDF"`, `"Excel"` or `"HTML"`.
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn period_start(&self) -> NaiveDate {
        self.period_start
    }

    pub fn period_end(&self) -> NaiveDate {
        self.period_end
    }

    /// Both period bounds as `(start, end)`.
    pub fn period(&self) -> (NaiveDate, NaiveDate) {
        (self.period_start, self.period_end)
    }

    pub fn include_header(&self) -> bool {
        self.include_header
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn include_footer(&self) -> bool {
        self.include_footer
    }

    pub fn footer_text(&self) -> &str {
        &self.footer_text
    }

    pub fn include_charts(&self) -> bool {
        self.include_charts
    }

    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }

    pub fn include_summary(&self) -> bool {
        self.include_summary
    }

    /// Columns in the order they were added.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Filter expressions in the order they were added.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn group_by(&self) -> &str {
        &self.group_by
    }

    pub fn include_totals(&self) -> bool {
        self.include_totals
    }

    pub fn orientation(&self) -> &str {
        &self.orientation
    }

    pub fn page_size(&self) -> &str {
        &self.page_size
    }

    pub fn include_page_numbers(&self) -> bool {
        self.include_page_numbers
    }

    pub fn company_logo(&self) -> &str {
        &self.company_logo
    }

    pub fn watermark(&self) -> &str {
        &self.watermark
    }
}

/// In-progress report state, mutated only by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportDraft {
    title: String,
    format: String,
    period_start: Option<NaiveDate>,
    period_end: Option<NaiveDate>,
    include_header: bool,
    header_text: String,
    include_footer: bool,
    footer_text: String,
    include_charts: bool,
    chart_type: String,
    include_summary: bool,
    columns: Vec<String>,
    filters: Vec<String>,
    sort_by: String,
    group_by: String,
    include_totals: bool,
    orientation: String,
    page_size: String,
    include_page_numbers: bool,
    company_logo: String,
    watermark: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            format: String::new(),
            period_start: None,
            period_end: None,
            include_header: false,
            header_text: String::new(),
            include_footer: false,
            footer_text: String::new(),
            include_charts: false,
            chart_type: String::new(),
            include_summary: false,
            columns: Vec::new(),
            filters: Vec::new(),
            sort_by: String::new(),
            group_by: String::new(),
            include_totals: false,
            orientation: String::from(DEFAULT_ORIENTATION),
            page_size: String::from(DEFAULT_PAGE_SIZE),
            include_page_numbers: false,
            company_logo: String::new(),
            watermark: String::new(),
        }
    }
}

impl ReportDraft {
    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_format(&mut self, format: String) {
        self.format = format;
    }

    pub(crate) fn set_period(&mut self, start: NaiveDate, end: NaiveDate) {
        self.period_start = Some(start);
        self.period_end = Some(end);
    }

    pub(crate) fn set_header(&mut self, header_text: String) {
        self.include_header = true;
        self.header_text = header_text;
    }

    pub(crate) fn set_footer(&mut self, footer_text: String) {
        self.include_footer = true;
        self.footer_text = footer_text;
    }

    pub(crate) fn set_chart(&mut self, chart_type: String) {
        self.include_charts = true;
        self.chart_type = chart_type;
    }

    pub(crate) fn set_summary(&mut self, include_summary: bool) {
        self.include_summary = include_summary;
    }

    pub(crate) fn add_column(&mut self, column: String) {
        self.columns.push(column);
    }

    pub(crate) fn add_filter(&mut self, filter: String) {
        self.filters.push(filter);
    }

    pub(crate) fn set_sort_by(&mut self, sort_by: String) {
        self.sort_by = sort_by;
    }

    pub(crate) fn set_group_by(&mut self, group_by: String) {
        self.group_by = group_by;
    }

    pub(crate) fn set_totals(&mut self, include_totals: bool) {
        self.include_totals = include_totals;
    }

    pub(crate) fn set_orientation(&mut self, orientation: String) {
        self.orientation = orientation;
    }

    pub(crate) fn set_page_size(&mut self, page_size: String) {
        self.page_size = page_size;
    }

    pub(crate) fn set_page_numbers(&mut self, include_page_numbers: bool) {
        self.include_page_numbers = include_page_numbers;
    }

    pub(crate) fn set_company_logo(&mut self, company_logo: String) {
        self.company_logo = company_logo;
    }

    pub(crate) fn set_watermark(&mut self, watermark: String) {
        self.watermark = watermark;
    }

    /// Runs the finalization checks in order: title, format, period, columns.
    ///
    /// Returns the period bounds on success so the caller does not have to
    /// unwrap them a second time.
    pub(crate) fn validate(&self) -> Result<(NaiveDate, NaiveDate), Violation> {
        if is_blank(&self.title) {
            return Err(Violation::MissingTitle);
        }

        if is_blank(&self.format) {
            return Err(Violation::MissingFormat);
        }

        let (Some(start), Some(end)) = (self.period_start, self.period_end) else {
            return Err(Violation::MissingPeriod);
        };

        if self.columns.is_empty() {
            return Err(Violation::NoColumns);
        }

        Ok((start, end))
    }

    /// Moves every field into a finished [`ReportConfig`].
    pub(crate) fn into_report(self, period_start: NaiveDate, period_end: NaiveDate) -> ReportConfig {
        ReportConfig {
            title: self.title,
            format: self.format,
            period_start,
            period_end,
            include_header: self.include_header,
            header_text: self.header_text,
            include_footer: self.include_footer,
            footer_text: self.footer_text,
            include_charts: self.include_charts,
            chart_type: self.chart_type,
            include_summary: self.include_summary,
            columns: self.columns,
            filters: self.filters,
            sort_by: self.sort_by,
            group_by: self.group_by,
            include_totals: self.include_totals,
            orientation: self.orientation,
            page_size: self.page_size,
            include_page_numbers: self.include_page_numbers,
            company_logo: self.company_logo,
            watermark: self.watermark,
        }
    }
}

/// Empty or whitespace-only.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
