//! Prime sieve workload
//!
//! Implements the per-worker Sieve of Eratosthenes computation with
//! reusable scratch state, so steady-state iterations perform no
//! allocation that would distort the measured throughput.

use crate::{CorbError, Result};

/// Capacity hint for the prime output vector.
///
/// `n / ln n` underestimates the prime count, so a fixed slack is added
/// on top; the vector must never grow once the first iteration has
/// warmed it up.
fn prime_capacity_hint(bound: usize) -> usize {
    if bound < 4 {
        return bound;
    }
    let n = bound as f64;
    (n / n.ln() * 1.3).ceil() as usize
}

/// A single benchmark worker owning one sieve computation's scratch state.
///
/// Each call to [`run_iteration`](SieveWorker::run_iteration) recomputes
/// the full prime list up to `bound` and bumps the iteration counter.
/// The worker is exclusively owned by one execution path for its entire
/// life; the counter is the only value consumed after the run.
#[derive(Debug)]
pub struct SieveWorker {
    /// Sieve upper limit, fixed at construction
    bound: usize,
    /// Candidate flags indexed 0..=bound; indices 0 and 1 are never consulted
    candidates: Vec<bool>,
    /// Primes found by the most recent iteration, in increasing order
    primes: Vec<u64>,
    /// Completed iterations since construction
    iterations: u64,
}

impl SieveWorker {
    /// Create a worker for the given sieve upper limit.
    ///
    /// Fails with a configuration error when `bound` is zero.
    pub fn new(bound: usize) -> Result<Self> {
        if bound == 0 {
            return Err(CorbError::ConfigError(
                "Sieve bound must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            bound,
            candidates: vec![false; bound + 1],
            primes: Vec::with_capacity(prime_capacity_hint(bound)),
            iterations: 0,
        })
    }

    /// Run one full sieve iteration.
    ///
    /// Resets the scratch state, performs the classic `p * p` marking
    /// pass, collects the surviving candidates in increasing order and
    /// increments the iteration counter by exactly one.
    pub fn run_iteration(&mut self) {
        self.primes.clear();

        for flag in &mut self.candidates[2..] {
            *flag = true;
        }

        let mut p = 2;
        while p * p <= self.bound {
            if self.candidates[p] {
                let mut multiple = p * p;
                while multiple <= self.bound {
                    self.candidates[multiple] = false;
                    multiple += p;
                }
            }
            p += 1;
        }

        for i in 2..=self.bound {
            if self.candidates[i] {
                self.primes.push(i as u64);
            }
        }

        self.iterations += 1;
    }

    /// Number of completed iterations.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Primes found by the most recent iteration.
    ///
    /// Empty until the first call to [`run_iteration`](SieveWorker::run_iteration).
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Sieve upper limit this worker was constructed with.
    pub fn bound(&self) -> usize {
        self.bound
    }
}
