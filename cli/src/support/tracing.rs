use std::str::FromStr;

use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Tracing levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid tracing level '{s}'. Valid levels are: error, warn, info, debug, trace"
            )),
        }
    }
}

impl From<TracingLevel> for LevelFilter {
    fn from(level: TracingLevel) -> Self {
        match level {
            TracingLevel::Error => Self::ERROR,
            TracingLevel::Warn => Self::WARN,
            TracingLevel::Info => Self::INFO,
            TracingLevel::Debug => Self::DEBUG,
            TracingLevel::Trace => Self::TRACE,
        }
    }
}

impl TracingLevel {
    /// Install a stderr subscriber filtered at this level
    ///
    /// stdout carries the normalized output, so log lines never go there.
    pub fn init_stderr_tracing(self) {
        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);

        Registry::default()
            .with(LevelFilter::from(self))
            .with(stderr_layer)
            .init();

        tracing::debug!(level = ?self, "Tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels_case_insensitively() {
        assert_eq!("DEBUG".parse::<TracingLevel>(), Ok(TracingLevel::Debug));
        assert_eq!("warn".parse::<TracingLevel>(), Ok(TracingLevel::Warn));
        assert!("verbose".parse::<TracingLevel>().is_err());
    }

    #[test]
    fn test_levels_map_to_level_filters() {
        for (level, filter) in [
            (TracingLevel::Error, LevelFilter::ERROR),
            (TracingLevel::Warn, LevelFilter::WARN),
            (TracingLevel::Info, LevelFilter::INFO),
            (TracingLevel::Debug, LevelFilter::DEBUG),
            (TracingLevel::Trace, LevelFilter::TRACE),
        ] {
            assert_eq!(LevelFilter::from(level), filter);
        }
    }

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(LevelFilter::from(TracingLevel::default()), LevelFilter::WARN);
    }
}
