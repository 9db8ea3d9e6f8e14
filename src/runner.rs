//! Logical CPU detection and the one-shot benchmark runner.
//!
//! Detection shells out to the platform's CPU-count utility; the runner
//! wires a progress bar to the harness and packages the final result.

use std::process::Command;
use std::str;

use crate::bench::harness::{BenchmarkHarness, ProgressUpdate};
use crate::config::BenchmarkConfig;
use crate::models::BenchmarkResult;
use crate::util::units::format_duration;
use crate::{CorbError, Result};

/// Detect the number of logical processors on the system.
///
/// Shells out to `nproc` on Linux and `sysctl -n hw.logicalcpu` on
/// macOS. Other platforms are unsupported and report a detection error.
pub fn detect_logical_cpus() -> Result<usize> {
    let output = logical_cpu_command()?
        .output()
        .map_err(|e| CorbError::CpuDetectError(format!("Failed to run CPU count command: {}", e)))?;

    parse_cpu_count(&output.stdout)
}

#[cfg(target_os = "linux")]
fn logical_cpu_command() -> Result<Command> {
    Ok(Command::new("nproc"))
}

#[cfg(target_os = "macos")]
fn logical_cpu_command() -> Result<Command> {
    let mut cmd = Command::new("sysctl");
    cmd.args(["-n", "hw.logicalcpu"]);
    Ok(cmd)
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn logical_cpu_command() -> Result<Command> {
    Err(CorbError::CpuDetectError(format!(
        "Unsupported platform: {}",
        std::env::consts::OS
    )))
}

/// Parse the output of the platform CPU-count utility.
fn parse_cpu_count(output: &[u8]) -> Result<usize> {
    let text = str::from_utf8(output)
        .map_err(|e| CorbError::CpuDetectError(format!("Non-UTF-8 command output: {}", e)))?;

    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        return Err(CorbError::CpuDetectError(
            "CPU count command produced no output".to_string(),
        ));
    }

    let count: usize = trimmed.parse().map_err(|_| {
        CorbError::CpuDetectError(format!(
            "Logical processor count could not be parsed: {}",
            trimmed
        ))
    })?;

    if count == 0 {
        return Err(CorbError::CpuDetectError(
            "Logical processor count reported as 0".to_string(),
        ));
    }

    Ok(count)
}

/// Run the configured benchmark once and stream progress to the console.
pub async fn run_benchmark(config: BenchmarkConfig) -> Result<BenchmarkResult> {
    config.validate()?;

    let mut harness = BenchmarkHarness::new(config.worker_count)?;
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let pb = indicatif::ProgressBar::new(config.duration.as_millis() as u64);
    pb.set_style(
        indicatif::ProgressStyle::with_template("{spinner} [{bar:40}] {msg}").unwrap(),
    );

    let handle = tokio::spawn(async move {
        while let Some(ProgressUpdate { elapsed, total, .. }) = rx.recv().await {
            pb.set_position(elapsed.as_millis() as u64);
            pb.set_message(format!(
                "{} / {}",
                format_duration(elapsed),
                format_duration(total)
            ));
        }
        pb.finish_and_clear();
    });

    let elapsed = harness.run(config.duration, tx).await?;
    handle.await.ok();

    Ok(BenchmarkResult::new(
        config,
        harness.total_iterations(),
        harness.score(),
        elapsed,
    ))
}
