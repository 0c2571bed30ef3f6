//! Console output: severity threshold, stream routing and output format.

use catalog_repair::{Reporter, Severity};

/// Minimum severity printed when `--quiet` is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum QuietLevel {
    Info,
    Warn,
    Error,
}

impl From<QuietLevel> for Severity {
    fn from(level: QuietLevel) -> Self {
        match level {
            QuietLevel::Info => Severity::Info,
            QuietLevel::Warn => Severity::Warn,
            QuietLevel::Error => Severity::Error,
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON document on stdout
    Json,
}

/// Output flags shared by both binaries.
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Suppress messages below the given level (no value means info)
    #[arg(
        short,
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "info"
    )]
    pub quiet: Option<QuietLevel>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl OutputArgs {
    /// Reporter honouring these flags.
    ///
    /// JSON output owns stdout, so informational messages are dropped.
    pub fn reporter(&self) -> ConsoleReporter {
        let threshold = self.quiet.map(Severity::from).unwrap_or(Severity::Info);
        let threshold = match self.format {
            OutputFormat::Text => threshold,
            OutputFormat::Json => threshold.max(Severity::Warn),
        };
        ConsoleReporter::new(threshold)
    }
}

/// Prints `info` to stdout and `warn`/`error` to stderr, skipping anything
/// below the threshold.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    threshold: Severity,
}

impl ConsoleReporter {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn shows(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        if !self.shows(severity) {
            return;
        }
        match severity {
            Severity::Info => println!("{}", message),
            Severity::Warn | Severity::Error => eprintln!("{}", message),
        }
    }
}
