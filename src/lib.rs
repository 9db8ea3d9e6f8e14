//! CORB - CPU Rust Bench
//!
//! A cross-platform CPU benchmark that drives a prime sieve workload on
//! one or many workers for a fixed duration and reports a throughput
//! derived score.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod config;
pub mod models;
pub mod runner;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum CorbError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Benchmark execution error
    BenchmarkError(String),
    /// Worker management error
    WorkerError(String),
    /// Logical CPU detection error
    CpuDetectError(String),
    /// Result serialization error
    SerializationError(String),
}

impl fmt::Display for CorbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorbError::IoError(err) => write!(f, "I/O error: {}", err),
            CorbError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CorbError::BenchmarkError(msg) => write!(f, "Benchmark error: {}", msg),
            CorbError::WorkerError(msg) => write!(f, "Worker error: {}", msg),
            CorbError::CpuDetectError(msg) => write!(f, "CPU detection error: {}", msg),
            CorbError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for CorbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorbError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CorbError {
    fn from(err: std::io::Error) -> Self {
        CorbError::IoError(err)
    }
}

impl From<serde_json::Error> for CorbError {
    fn from(err: serde_json::Error) -> Self {
        CorbError::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for CorbError {
    fn from(err: toml::de::Error) -> Self {
        CorbError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CorbError {
    fn from(err: toml::ser::Error) -> Self {
        CorbError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for CORB operations
pub type Result<T> = std::result::Result<T, CorbError>;

// Common types and constants
pub const APP_NAME: &str = "corb";
pub const CONFIG_FILE: &str = "corb.toml";
/// Upper limit of the sieve every worker computes each iteration.
pub const SIEVE_BOUND: usize = 1000;
/// Opaque normalization factor applied to the summed iteration count.
pub const SCORE_DIVISOR: u64 = 10_000;
