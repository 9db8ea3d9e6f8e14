use clap::Parser;
use corb::config::BenchmarkConfig;
use corb::runner::{detect_logical_cpus, run_benchmark};
use corb::util::units::{format_count, format_rate};
use corb::Result;
use std::time::Duration;

const LOGO: &str = r" ██████╗  ██████╗ ██████╗ ██████╗
██╔════╝ ██╔═══██╗██╔══██╗██╔══██╗
██║      ██║   ██║██████╔╝██████╔╝
██║      ██║   ██║██╔══██╗██╔══██╗
╚██████╗ ╚██████╔╝██║  ██║██████╔╝
 ╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚═════╝ ";

/// Prime sieve CPU benchmark
#[derive(Debug, Parser)]
#[command(name = "corb", version, about = "Prime sieve CPU benchmark")]
struct Cli {
    /// Number of workers. Not providing this will run a single worker.
    #[arg(long)]
    proc: Option<usize>,

    /// Run the benchmark on all detected logical processors (cores).
    #[arg(long)]
    all: bool,

    /// Benchmark duration, e.g. "30s" or "500ms".
    #[arg(long, value_parser = humantime::parse_duration)]
    duration: Option<Duration>,

    /// Print the result as JSON instead of the summary lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("\n{}\n", LOGO);

    // Config file supplies defaults; flags override.
    let mut config = BenchmarkConfig::load().unwrap_or_default();
    if let Some(duration) = cli.duration {
        config = config.with_duration(duration);
    }

    if cli.all {
        let cores = detect_logical_cpus()?;
        println!("Logical processors detected - {}\n", cores);
        config = config.with_worker_count(cores);
    } else if let Some(proc) = cli.proc {
        println!("Logical processors - {}\n", proc);
        config = config.with_worker_count(proc);
    } else if config.worker_count == 1 {
        println!("Running single core benchmark.\n");
    } else {
        println!("Logical processors - {}\n", config.worker_count);
    }

    println!("Running prime sieve benchmark");

    let result = run_benchmark(config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "\nTotal iterations - {} ({})",
            format_count(result.total_iterations),
            format_rate(result.iterations_per_second())
        );
        println!(
            "Overall duration - {:.6} seconds",
            result.elapsed.as_secs_f64()
        );
        println!("Score - {}\n", result.score);
    }

    Ok(())
}
