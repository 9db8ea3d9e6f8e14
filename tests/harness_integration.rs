use corb::bench::harness::BenchmarkHarness;
use corb::config::BenchmarkConfig;
use corb::runner::run_benchmark;
use corb::SCORE_DIVISOR;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_run_returns_promptly_after_window() {
    let mut harness = BenchmarkHarness::new(1).expect("harness create");
    let (tx, _rx) = mpsc::channel(16);

    let window = Duration::from_millis(100);
    let elapsed = harness.run(window, tx).await.expect("run");

    assert!(elapsed >= window);
    // Bounded overshoot: joining one worker must not take seconds.
    assert!(elapsed < Duration::from_secs(2), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_counters_frozen_after_run() {
    let mut harness = BenchmarkHarness::new(2).expect("harness create");
    let (tx, _rx) = mpsc::channel(16);

    harness
        .run(Duration::from_millis(100), tx)
        .await
        .expect("run");

    let snapshot = harness.total_iterations();
    assert!(snapshot > 0);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(harness.total_iterations(), snapshot);
}

#[tokio::test]
async fn test_multi_worker_run_drives_all_workers() {
    let worker_count = 4;
    let mut harness = BenchmarkHarness::new(worker_count).expect("harness create");
    let (tx, _rx) = mpsc::channel(16);

    harness
        .run(Duration::from_millis(200), tx)
        .await
        .expect("run");

    assert_eq!(harness.worker_count(), worker_count);
    // A 200ms window yields thousands of bound-1000 iterations per
    // worker on any hardware; the sum must reflect all of them.
    assert!(harness.total_iterations() as usize >= worker_count);
    assert_eq!(harness.score(), harness.total_iterations() / SCORE_DIVISOR);
}

#[tokio::test]
async fn test_run_benchmark_end_to_end() {
    let config = BenchmarkConfig::default()
        .with_worker_count(2)
        .with_duration(Duration::from_millis(150));

    let result = run_benchmark(config).await.expect("benchmark run");

    assert!(result.elapsed >= Duration::from_millis(150));
    assert!(result.total_iterations > 0);
    assert_eq!(result.score, result.total_iterations / SCORE_DIVISOR);
    assert!(result.iterations_per_second() > 0.0);
}
