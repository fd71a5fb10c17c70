//! speakhuman Logging
//!
//! Diagnostics for the speakhuman crates. Formatters stay silent unless
//! asked: catalog loading and locale switches report at `debug`, per-call
//! decisions (chosen unit, suppressed units) at `trace`, and catalog entries
//! that had to be ignored at `warn`.
//!
//! ```rust
//! use speakhuman_log::{debug, warn};
//!
//! debug!("Loaded catalog for {}", "de_DE");
//! warn!(target: "speakhuman::catalog", "Ignoring plural form {}", "dual");
//! ```
//!
//! # Environment Variables
//!
//! - `SPEAKHUMAN_LOG_LEVEL=trace|debug|info|warn|error|off`
//! - `SPEAKHUMAN_DEBUG=1` - shorthand for `SPEAKHUMAN_LOG_LEVEL=debug`
//! - `SPEAKHUMAN_LOG_FORMAT=pretty|json|facade`
//!
//! With `facade`, records go through the [`log`] crate so the host
//! application's logger decides where they end up.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::env;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity of a record, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Nothing is emitted.
    Off = 5,
}

const LEVELS: [Level; 6] = [
    Level::Trace,
    Level::Debug,
    Level::Info,
    Level::Warn,
    Level::Error,
    Level::Off,
];

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// Counterpart in the `log` facade; `Off` has none.
    pub fn to_facade(self) -> Option<log::Level> {
        Some(match self {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error => log::Level::Error,
            Level::Off => return None,
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "off" | "none" => Ok(Level::Off),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Where and how records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// `HH:MM:SS.mmm LEVEL [target] message` on stderr
    Pretty,
    /// One JSON object per line on stderr
    Json,
    /// Handed to the `log` crate
    Facade,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Output::Pretty),
            "json" => Ok(Output::Json),
            "facade" | "log" => Ok(Output::Facade),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Settings read once from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub level: Level,
    pub output: Output,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: Level::Warn,
            output: Output::Json,
        }
    }
}

impl Settings {
    /// Reads `SPEAKHUMAN_*` variables; unparsable values keep the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let debug = env::var("SPEAKHUMAN_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let level = env::var("SPEAKHUMAN_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let output = env::var("SPEAKHUMAN_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.output);

        Self { level, output }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(|| {
    let settings = Settings::from_env();
    THRESHOLD.store(settings.level as u8, Ordering::SeqCst);
    settings
});

// Runtime threshold; starts from SETTINGS.level and may be changed by set_level.
static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// The environment-derived settings.
pub fn settings() -> &'static Settings {
    &SETTINGS
}

/// Current threshold.
pub fn level() -> Level {
    Lazy::force(&SETTINGS);
    let raw = THRESHOLD.load(Ordering::Relaxed);
    LEVELS
        .into_iter()
        .find(|l| *l as u8 == raw)
        .unwrap_or(Level::Off)
}

/// Override the threshold at runtime.
pub fn set_level(level: Level) {
    Lazy::force(&SETTINGS);
    THRESHOLD.store(level as u8, Ordering::SeqCst);
}

#[inline]
pub fn enabled(level: Level) -> bool {
    level != Level::Off && level >= self::level()
}

#[derive(Serialize)]
struct Record<'a> {
    timestamp: String,
    level: &'static str,
    target: &'a str,
    message: &'a str,
}

#[doc(hidden)]
pub fn emit(level: Level, target: &str, message: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }

    match settings().output {
        Output::Facade => {
            if let Some(level) = level.to_facade() {
                log::log!(target: target, level, "{}", message);
            }
        }
        Output::Pretty => {
            let now = chrono::Local::now();
            let _ = writeln!(
                std::io::stderr().lock(),
                "{} {:5} [{}] {}",
                now.format("%H:%M:%S%.3f"),
                level.as_str(),
                target,
                message
            );
        }
        Output::Json => {
            let message = message.to_string();
            let record = Record {
                timestamp: chrono::Utc::now().to_rfc3339(),
                level: level.as_str(),
                target,
                message: &message,
            };
            if let Ok(line) = serde_json::to_string(&record) {
                let _ = writeln!(std::io::stderr().lock(), "{}", line);
            }
        }
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, target: $target:expr, $($arg:tt)+) => {
        if $crate::enabled($level) {
            $crate::emit($level, $target, format_args!($($arg)+));
        }
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::__emit!($level, target: module_path!(), $($arg)+)
    };
}

/// Per-call detail: chosen units, thresholds crossed.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Trace, $($arg)+) };
}

/// Catalog loads and locale switches.
///
/// ```rust
/// use speakhuman_log::debug;
///
/// debug!("Activated locale {}", "fr_FR");
/// debug!(target: "speakhuman::context", "Restored default locale");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__emit!($crate::Level::Error, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!(" WARNING ".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("none".parse::<Level>(), Ok(Level::Off));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_output_parsing() {
        assert_eq!("json".parse::<Output>(), Ok(Output::Json));
        assert_eq!("log".parse::<Output>(), Ok(Output::Facade));
        assert!("xml".parse::<Output>().is_err());
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!enabled(Level::Off));
        assert_eq!(Level::Off.to_facade(), None);
        assert_eq!(Level::Trace.to_facade(), Some(log::Level::Trace));
    }

    #[test]
    fn test_threshold_filters_lower_levels() {
        let original = level();

        set_level(Level::Error);
        assert_eq!(level(), Level::Error);
        assert!(!enabled(Level::Warn));
        assert!(enabled(Level::Error));

        set_level(original);
    }

    #[test]
    fn test_macros_expand() {
        trace!("unit {}", "hours");
        debug!(target: "speakhuman::catalog", "loaded {}", "de_DE");
        info!("info");
        warn!("ignored {} entries", 2);
        error!(target: "test", "{} and {}", 1, 2);
    }
}
