use crate::cli::BenchArgs;
use crate::config::BenchFileConfig;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use ljclust::core::potential::LjParams;
use ljclust::engine::bench::{BenchRecord, write_csv};
use ljclust::engine::progress::ProgressReporter;
use ljclust::workflows;
use tracing::info;

pub fn run(args: BenchArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => BenchFileConfig::from_file(path)?,
        None => BenchFileConfig::default(),
    };
    let (spec, output) = file_config.merge_with_cli(&args)?;

    info!(
        "Benchmarking {} backends over {} cluster sizes.",
        spec.backends.len(),
        spec.sizes.len()
    );
    println!(
        "Benchmarking {} backends over cluster sizes {:?}...",
        spec.backends.len(),
        spec.sizes
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let records = workflows::bench::run(&spec, &LjParams::default(), &reporter)?;

    print_summary(&records);

    if let Some(path) = output {
        write_csv(&records, &path)?;
        println!("✓ Benchmark records written to {}", path.display());
    }
    Ok(())
}

fn print_summary(records: &[BenchRecord]) {
    println!(
        "{:<10} {:>8} {:>12} {:>12} {:>14}",
        "backend", "natoms", "mean (s)", "min (s)", "energy"
    );
    for record in records {
        println!(
            "{:<10} {:>8} {:>12.6} {:>12.6} {:>14.4}",
            record.backend, record.natoms, record.mean_s, record.min_s, record.energy
        );
    }
}
