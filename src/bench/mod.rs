//! Benchmark engine module
//!
//! Contains the sieve workload, worker orchestration,
//! and score aggregation.

pub mod harness;
pub mod sieve;

// Re-export commonly used types
pub use harness::{BenchmarkHarness, ProgressUpdate};
pub use sieve::SieveWorker;
