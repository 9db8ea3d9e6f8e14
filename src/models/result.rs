//! Benchmark result data models
//!
//! Contains the structure for storing and serializing the outcome of a
//! benchmark run.

use crate::config::BenchmarkConfig;
use crate::util::units::calculate_iterations_per_second;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete benchmark result containing configuration, counters, and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Timestamp when the benchmark was executed
    pub timestamp: DateTime<Utc>,
    /// Configuration used for this benchmark
    pub config: BenchmarkConfig,
    /// Total sieve iterations completed across all workers
    pub total_iterations: u64,
    /// Normalized score derived from the iteration count
    pub score: u64,
    /// Measured wall-clock time of the run
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
}

impl BenchmarkResult {
    /// Create a new benchmark result stamped with the current time
    pub fn new(
        config: BenchmarkConfig,
        total_iterations: u64,
        score: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            total_iterations,
            score,
            elapsed,
        }
    }

    /// Aggregate iteration throughput across all workers
    pub fn iterations_per_second(&self) -> f64 {
        calculate_iterations_per_second(self.total_iterations, self.elapsed)
    }

    /// Get a human-readable summary of the benchmark result
    pub fn summary(&self) -> String {
        format!(
            "{} - {} workers - {} iterations - score {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.config.worker_count,
            self.total_iterations,
            self.score
        )
    }
}

// Custom serde module for Duration serialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_nanos().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nanos = u128::deserialize(deserializer)?;
        Ok(Duration::from_nanos(nanos as u64))
    }
}
