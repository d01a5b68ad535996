use colored::*;
use reportkit_common::config::Config;
use reportkit_common::macros::SUCCESS_TARGET;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

pub struct ReportkitFormatter;

impl<S, N> FormatEvent<S, N> for ReportkitFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Raw terminal output, no prefix.
        if meta.target() == PRINT_TARGET {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[✓]", |s| s.bright_green().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the quiet level, but
/// never the print target.
pub fn init_logging(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    let env_directives: Option<String> = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter: EnvFilter = build_filter(env_directives.as_deref(), cfg.quiet);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!cfg.no_color)
        .event_format(ReportkitFormatter)
        .init();
}

/// Combines `env_directives` (or the quiet-level default) with an `info`
/// directive for [`PRINT_TARGET`]. Unparsable env directives fall back to the default.
fn build_filter(env_directives: Option<&str>, quiet: u8) -> EnvFilter {
    let print_directive: String = format!("{PRINT_TARGET}=info");
    let base: String = env_directives
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .map(String::from)
        .unwrap_or_else(|| default_directives(quiet));

    EnvFilter::try_new(format!("{base},{print_directive}")).unwrap_or_else(|_| {
        EnvFilter::new(format!("{},{print_directive}", default_directives(quiet)))
    })
}

fn default_directives(quiet: u8) -> String {
    match quiet {
        0 | 1 => String::from("info"),
        _ => String::from("warn"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(0), "info");
        assert_eq!(default_directives(1), "info");
        assert_eq!(default_directives(2), "warn");
    }

    #[test]
    fn test_filter_keeps_print_target_for_quiet_levels() {
        for quiet in 0..=2 {
            let filter: String = build_filter(None, quiet).to_string();
            assert!(filter.contains("reportkit::print=info"), "quiet {quiet}: {filter}");
        }
    }

    #[test]
    fn test_env_directives_keep_print_target() {
        let filter: String = build_filter(Some("warn"), 0).to_string();

        assert!(filter.contains("warn"), "env directive dropped: {filter}");
        assert!(filter.contains("reportkit::print=info"), "print target dropped: {filter}");
    }

    #[test]
    fn test_blank_env_directives_use_quiet_default() {
        let filter: String = build_filter(Some("  "), 2).to_string();

        assert!(filter.contains("warn"));
        assert!(filter.contains("reportkit::print=info"));
    }
}
