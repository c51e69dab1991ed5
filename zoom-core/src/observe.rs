//! Observability hook for the resampling engine
//!
//! The engine never talks to a logging backend directly: it reports progress
//! through an injected [`Observer`]. [`TracingObserver`] forwards records to
//! the `tracing` ecosystem, [`NullObserver`] drops them.

use std::fmt;
use std::str::FromStr;

/// Record severity, also used as a verbosity threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Threshold only: nothing passes
    Off,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parse a verbosity name: trace, debug, info, warn, error, critical, off
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" | "err" | "critical" => Ok(Level::Error),
            "off" => Ok(Level::Off),
            other => Err(format!("unknown verbosity level '{}'", other)),
        }
    }
}

/// Sink for engine progress records
pub trait Observer: Send + Sync {
    fn record(&self, level: Level, message: &str);
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn record(&self, _level: Level, _message: &str) {}
}

/// Observer forwarding records to `tracing` events
///
/// Records below `verbosity` are dropped before reaching the subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    verbosity: Level,
}

impl TracingObserver {
    pub fn new(verbosity: Level) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Level {
        self.verbosity
    }

    fn enabled(&self, level: Level) -> bool {
        level != Level::Off && self.verbosity != Level::Off && level >= self.verbosity
    }
}

impl Observer for TracingObserver {
    fn record(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }

        match level {
            Level::Trace => tracing::trace!(target: "spectral_zoom", "{}", message),
            Level::Debug => tracing::debug!(target: "spectral_zoom", "{}", message),
            Level::Info => tracing::info!(target: "spectral_zoom", "{}", message),
            Level::Warn => tracing::warn!(target: "spectral_zoom", "{}", message),
            Level::Error => tracing::error!(target: "spectral_zoom", "{}", message),
            Level::Off => {}
        }
    }
}
