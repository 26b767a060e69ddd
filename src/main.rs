use anyhow::Context;
use clap::Parser;
use colored::*;
use penguin_report::cli::Args;
use penguin_report::{PenguinConfig, RunSummary};
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();
    setup_logging(args.log_level());

    let config = args.to_config();
    debug!("Run configuration: {:?}", config);

    match run(&config) {
        Ok(summary) => {
            print_summary(&summary);
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(config: &PenguinConfig) -> anyhow::Result<RunSummary> {
    penguin_report::run(config).with_context(|| {
        format!(
            "failed to build penguin report from {}",
            config.input_path.display()
        )
    })
}

/// Set up structured logging to stderr, overridable with RUST_LOG
fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("penguin_report={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_summary(summary: &RunSummary) {
    println!("\n{}", "Penguin Report Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Rows loaded:".bright_cyan(),
        summary.rows_loaded.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Species:".bright_cyan(),
        summary.species_count.to_string().bright_white()
    );
    if summary.species_without_data > 0 {
        println!(
            "  {} {}",
            "Species without bill depths:".bright_yellow(),
            summary.species_without_data.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {}",
        "Penguin records:".bright_cyan(),
        summary.penguin_records.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Above-average bill depths:".bright_cyan(),
        summary.above_average.to_string().bright_white().bold()
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        summary.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Report:".bright_cyan(),
        summary.report_path.display()
    );
}
