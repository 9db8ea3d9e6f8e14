//! Benchmark harness and worker orchestration
//!
//! Drives one sieve worker per requested concurrency level on its own
//! blocking task for a fixed wall-clock window, broadcasts a single stop
//! signal at the deadline, joins every task before the counters are read,
//! and aggregates the iteration counts into the reported score.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::bench::sieve::SieveWorker;
use crate::{CorbError, Result, SCORE_DIVISOR, SIEVE_BOUND};

/// Progress update sent during benchmark execution
///
/// Carries wall-clock information only; worker state is never shared
/// while the run is in flight.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Elapsed time since the run started, capped at the run window
    pub elapsed: Duration,
    /// Total run window
    pub total: Duration,
    /// Number of running workers
    pub workers: usize,
}

impl ProgressUpdate {
    /// Calculate completion percentage (0.0 to 1.0)
    pub fn completion_percentage(&self) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            self.elapsed.as_secs_f64() / self.total.as_secs_f64()
        }
    }

    /// Time left in the run window
    pub fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.elapsed)
    }
}

/// Benchmark harness coordinating a fixed set of sieve workers
pub struct BenchmarkHarness {
    workers: Vec<SieveWorker>,
}

impl BenchmarkHarness {
    /// Create a harness with one worker per requested concurrency level,
    /// all sieving up to [`SIEVE_BOUND`].
    pub fn new(worker_count: usize) -> Result<Self> {
        Self::with_bound(worker_count, SIEVE_BOUND)
    }

    /// Create a harness whose workers sieve up to a custom limit.
    pub fn with_bound(worker_count: usize, bound: usize) -> Result<Self> {
        if worker_count == 0 {
            return Err(CorbError::ConfigError(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        let mut workers = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            workers.push(SieveWorker::new(bound)?);
        }

        Ok(Self { workers })
    }

    /// Number of workers owned by this harness.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Run every worker for the given wall-clock window.
    ///
    /// Each worker loops on its own blocking task and polls the shared
    /// stop flag before every iteration, so the stop never interrupts an
    /// iteration in flight. The driver ticks progress updates onto
    /// `progress_tx` while sleeping out the window (a dropped receiver is
    /// ignored), then broadcasts the stop exactly once and joins every
    /// task before returning. Returns the measured elapsed time.
    pub async fn run(
        &mut self,
        duration: Duration,
        progress_tx: mpsc::Sender<ProgressUpdate>,
    ) -> Result<Duration> {
        let stop = Arc::new(AtomicBool::new(false));
        let worker_total = self.workers.len();
        let start = Instant::now();

        let mut handles: Vec<JoinHandle<SieveWorker>> = Vec::with_capacity(worker_total);
        for mut worker in self.workers.drain(..) {
            let stop = Arc::clone(&stop);
            handles.push(tokio::task::spawn_blocking(move || {
                while !stop.load(Ordering::Acquire) {
                    worker.run_iteration();
                }
                worker
            }));
        }

        // The timed window opens only once every worker is running.
        let deadline = tokio::time::Instant::now() + duration;
        let mut ticker = tokio::time::interval(Duration::from_millis(100));
        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => break,
                _ = ticker.tick() => {
                    let update = ProgressUpdate {
                        elapsed: start.elapsed().min(duration),
                        total: duration,
                        workers: worker_total,
                    };
                    let _ = progress_tx.try_send(update);
                }
            }
        }

        stop.store(true, Ordering::Release);

        // Counters are only read from workers whose task has returned.
        for handle in handles {
            let worker = handle
                .await
                .map_err(|e| CorbError::WorkerError(format!("Worker join failed: {}", e)))?;
            self.workers.push(worker);
        }

        Ok(start.elapsed())
    }

    /// Sum of completed iterations across all workers.
    pub fn total_iterations(&self) -> u64 {
        self.workers.iter().map(|w| w.iterations()).sum()
    }

    /// Normalized benchmark score: `floor(total_iterations / 10000)`.
    pub fn score(&self) -> u64 {
        self.total_iterations() / SCORE_DIVISOR
    }
}
