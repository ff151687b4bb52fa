use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use polyclean::cli::Cli;
use polyclean::io::clean_file;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_directive()))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let report = clean_file(&cli.input, &cli.output, &cli.options())
        .with_context(|| format!("cleaning {}", cli.input.display()))?;

    if !cli.quiet {
        for feature in &report.features {
            println!(
                "Feature {}: {} consecutive duplicates removed",
                feature.feature_index, feature.removed
            );
        }
    }

    println!();
    println!("Cleaned {} geometries.", report.cleaned);
    println!(
        "Total consecutive duplicates removed: {}",
        report.total_removed()
    );
    if report.stats.rings_closed > 0 {
        println!("Rings closed: {}", report.stats.rings_closed);
    }
    if report.stats.degenerate_rings > 0 {
        println!(
            "Rings with fewer than 4 coordinates: {}",
            report.stats.degenerate_rings
        );
    }
    println!("Output saved to {}", cli.output.display());
    Ok(())
}
