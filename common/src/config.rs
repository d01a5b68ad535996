#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `1` drops the banner and section headers, `2` also drops informational
    /// log lines. Generated reports are always written.
    pub quiet: u8,
    /// Disables ANSI styling for terminal output.
    pub no_color: bool,
}
