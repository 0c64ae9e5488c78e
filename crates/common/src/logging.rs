//! Provides utilities to initialize logging.
use std::env;

use tracing::*;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer,
};

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "DIAMOND_SVC_LABEL";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,

    /// Whether to write through the test harness so that output is captured per test.
    test_writer: bool,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set.
    pub const fn new(whoami: String) -> Self {
        Self {
            whoami,
            test_writer: false,
        }
    }

    /// Creates a new instance with the whoami string set to the provided
    /// string.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Creates an instance suited to unit tests, whose output is captured by the test harness.
    pub fn for_tests() -> Self {
        Self {
            whoami: get_whoami_string("(diamond-tests)"),
            test_writer: true,
        }
    }

    /// Returns the whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(diamond)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// # Panics
///
/// If a global subscriber has already been installed.
pub fn init(config: LoggerConfig) {
    if let Err(err) = try_init(config) {
        panic!("logging already initialized: {err}");
    }
}

/// Like [`init`], but fails instead of panicking if a global subscriber has already been
/// installed.
///
/// Test suites call this from every test that wants logs, and ignore the error.
pub fn try_init(config: LoggerConfig) -> Result<(), TryInitError> {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    let log_file = env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");

    let format = tracing_subscriber::fmt::format()
        .with_file(log_file)
        .with_line_number(log_line_num);

    if config.test_writer {
        let stdout_sub = tracing_subscriber::fmt::layer()
            .compact()
            .event_format(format)
            .with_test_writer()
            .with_filter(filt);

        tracing_subscriber::registry().with(stdout_sub).try_init()?;
    } else {
        let stdout_sub = tracing_subscriber::fmt::layer()
            .compact()
            .event_format(format)
            .with_filter(filt);

        tracing_subscriber::registry().with(stdout_sub).try_init()?;
    }

    info!(whoami = %config.whoami, "logging started");

    Ok(())
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
