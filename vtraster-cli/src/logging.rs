use tracing::Level;
use tracing_subscriber::filter::EnvFilter;

/// Logging configuration for the CLI: a single console level, overridable by
/// `VTRASTER_LOG_LEVEL` or the standard `RUST_LOG` filter syntax.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub console_level: Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console_level: Level::WARN }
    }
}

impl LoggingConfig {
    /// Builds a configuration from `VTRASTER_LOG_LEVEL`, falling back to the
    /// default level when unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("VTRASTER_LOG_LEVEL") {
            if let Ok(parsed_level) = level.parse::<Level>() {
                config.console_level = parsed_level;
            }
        }

        config
    }
}

/// Initializes a stderr-only tracing subscriber driven by `RUST_LOG`, falling
/// back to `config.console_level` when the environment variable is unset.
pub fn init_logging(config: LoggingConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(config.console_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
