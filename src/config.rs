//! Logging configuration and initialization.

use clap::ValueEnum;
use eyre::eyre;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Filter directives in effect: `RUST_LOG` wins over the configured level.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global tracing subscriber. Logs are written to stderr.
    pub fn init(&self) -> eyre::Result<()> {
        let builder = fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr);

        match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Pretty => builder.try_init(),
        }
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}
