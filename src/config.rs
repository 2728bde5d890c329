// ABOUTME: Startup configuration for the bridge - site, operator, verbosity
// ABOUTME: and the CLI program to invoke. Built once and injected.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Default external program.
pub const DEFAULT_PROGRAM: &str = "acli";

/// Verbosity of the server's diagnostic log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide settings, resolved once at startup.
///
/// `site` and `email` identify the Jira instance and operator for logging;
/// they are not threaded into the argument vectors.
#[derive(Debug, Clone)]
pub struct Config {
    pub site: Option<String>,
    pub email: Option<String>,
    pub log_level: LogLevel,
    pub program: String,
}

impl Config {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Jira site.
    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Set the operator email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set the external program to invoke.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: None,
            email: None,
            log_level: LogLevel::default(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }
}
