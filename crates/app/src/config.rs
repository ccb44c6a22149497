//! Configuration

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub(crate) log_format: LogFormat,
}

/// Cart settings.
#[derive(Debug, Args)]
pub(crate) struct CartConfig {
    /// User whose cart is built
    #[arg(long, env = "GROCER_USER", default_value = "demo", global = true)]
    pub(crate) user: String,

    /// Currency used for display, overriding the basket's own currency
    #[arg(long, env = "GROCER_CURRENCY", global = true)]
    pub(crate) currency: Option<String>,

    /// Basket YAML file listing brands and picks
    #[arg(long, env = "GROCER_BASKET", global = true)]
    pub(crate) basket: Option<std::path::PathBuf>,
}
