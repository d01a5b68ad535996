//! # Report Builder
//!
//! Fluent construction of a [`ReportConfig`].
//!
//! Every configuration method takes `&mut self` and hands the same builder back,
//! so calls can be chained in any order and any number of times. Scalar settings
//! keep the last value written; columns and filters accumulate in call order.
//! Nothing is checked until [`ReportBuilder::build`].
//!
//! A builder produces at most one report. After a successful build the draft is
//! gone: further configuration is ignored and another `build` fails with
//! [`ReportError::AlreadyBuilt`]. A *failed* build leaves the draft in place so
//! the missing pieces can be supplied before trying again.

use chrono::NaiveDate;
use reportkit_common::{ReportError, Result};
use tracing::{debug, warn};

use crate::report::{ReportConfig, ReportDraft};

#[derive(Debug, Default)]
pub struct ReportBuilder {
    draft: ReportDraft,
    built: bool,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        let title = title.into();
        self.edit(|draft| draft.set_title(title))
    }

    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        let format = format.into();
        self.edit(|draft| draft.set_format(format))
    }

    /// Sets both bounds of the reporting period at once.
    ///
    /// The bounds are not compared; an end before the start is accepted.
    pub fn period(&mut self, start: NaiveDate, end: NaiveDate) -> &mut Self {
        self.edit(|draft| draft.set_period(start, end))
    }

    /// Sets the header text and enables the header.
    pub fn header(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.edit(|draft| draft.set_header(text))
    }

    /// Sets the footer text and enables the footer.
    pub fn footer(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.edit(|draft| draft.set_footer(text))
    }

    /// Sets the chart type and enables charts.
    pub fn chart(&mut self, chart_type: impl Into<String>) -> &mut Self {
        let chart_type = chart_type.into();
        self.edit(|draft| draft.set_chart(chart_type))
    }

    pub fn summary(&mut self) -> &mut Self {
        self.edit(|draft| draft.set_summary(true))
    }

    /// Appends one column. Duplicates are kept.
    pub fn add_column(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.edit(|draft| draft.add_column(name))
    }

    /// Appends every column yielded by `names`, in order.
    pub fn columns<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_column(name);
        }
        self
    }

    /// Appends one filter expression, e.g. `"Status=Active"`.
    pub fn add_filter(&mut self, expr: impl Into<String>) -> &mut Self {
        let expr = expr.into();
        self.edit(|draft| draft.add_filter(expr))
    }

    /// Appends every filter yielded by `exprs`, in order.
    pub fn filters<I, S>(&mut self, exprs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for expr in exprs {
            self.add_filter(expr);
        }
        self
    }

    pub fn sort_by(&mut self, field: impl Into<String>) -> &mut Self {
        let field = field.into();
        self.edit(|draft| draft.set_sort_by(field))
    }

    pub fn group_by(&mut self, field: impl Into<String>) -> &mut Self {
        let field = field.into();
        self.edit(|draft| draft.set_group_by(field))
    }

    pub fn totals(&mut self) -> &mut Self {
        self.edit(|draft| draft.set_totals(true))
    }

    pub fn orientation(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.edit(|draft| draft.set_orientation(value))
    }

    pub fn page_size(&mut self, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        self.edit(|draft| draft.set_page_size(value))
    }

    pub fn page_numbers(&mut self) -> &mut Self {
        self.edit(|draft| draft.set_page_numbers(true))
    }

    /// Path or reference to the company logo.
    pub fn company_logo(&mut self, path: impl Into<String>) -> &mut Self {
        let path = path.into();
        self.edit(|draft| draft.set_company_logo(path))
    }

    pub fn watermark(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.edit(|draft| draft.set_watermark(text))
    }

    /// Validates the accumulated configuration and hands out the report.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. title is not blank
    /// 2. format is not blank
    /// 3. both period bounds were set
    /// 4. at least one column was added
    ///
    /// # Errors
    /// * [`ReportError::ConfigurationInvalid`] with the first failed check.
    /// * [`ReportError::AlreadyBuilt`] if this builder already produced a report.
    pub fn build(&mut self) -> Result<ReportConfig> {
        if self.built {
            return Err(ReportError::AlreadyBuilt);
        }

        let (start, end) = self.draft.validate().inspect_err(|violation| {
            debug!(%violation, "report validation failed");
        })?;

        let draft = std::mem::take(&mut self.draft);
        self.built = true;

        let report = draft.into_report(start, end);
        debug!(
            title = report.title(),
            format = report.format(),
            columns = report.columns().len(),
            "report assembled"
        );

        Ok(report)
    }

    /// Whether this builder already handed out its report.
    pub fn is_built(&self) -> bool {
        self.built
    }

    fn edit(&mut self, op: impl FnOnce(&mut ReportDraft)) -> &mut Self {
        if self.built {
            warn!("ignoring configuration on a report builder that was already built");
        } else {
            op(&mut self.draft);
        }
        self
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
