//! Interpreter settings.

use log::LevelFilter;

/// Environment variable that enables the debug trace.
pub const TRACE_VAR: &str = "HYBRID_TRACE";
/// Environment variable that sets the log level.
pub const LOG_VAR: &str = "HYBRID_LOG";

/// Settings for a single run of the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether to print the source, tokens, and tables before program output.
    pub trace: bool,
    /// Maximum level of log messages to show.
    pub log_level: LevelFilter,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            trace: cfg!(feature = "trace"),
            log_level: LevelFilter::Warn,
        }
    }
}
impl Config {
    /// Returns the default settings, overridden by `HYBRID_TRACE` and
    /// `HYBRID_LOG` where they are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Returns the default settings, overridden by whatever variables `lookup`
    /// returns a value for.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut ret = Self::default();
        if let Some(value) = lookup(TRACE_VAR) {
            ret.trace = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        if let Some(level) = lookup(LOG_VAR).and_then(|value| value.trim().parse().ok()) {
            ret.log_level = level;
        }
        ret
    }
}
