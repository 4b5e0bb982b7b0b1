use clap::Parser;
use clap::ValueEnum;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Debug, Clone, Parser)]
pub struct TracingCliArgs {
    /// Overrides the level from the config file
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl TracingCliArgs {
    /// Installs the global subscriber. Events go to stderr, stdout is reserved
    /// for program output.
    pub fn init(&self, fallback: LevelFilter) -> Result<(), anyhow::Error> {
        let level = self.log_level.map(LevelFilter::from).unwrap_or(fallback);
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();

        Ok(tracing::subscriber::set_global_default(subscriber)?)
    }
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::LogLevel;

    #[test]
    fn test_level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::WARN);
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
