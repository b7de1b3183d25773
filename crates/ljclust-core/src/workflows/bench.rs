use crate::core::cluster::Cluster;
use crate::core::potential::LjParams;
use crate::engine::bench::{BenchRecord, TimingStats, verify_consistency};
use crate::engine::config::BenchSpec;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::time::Instant;
use tracing::{debug, info, instrument};

#[instrument(skip_all, name = "bench_workflow")]
pub fn run(
    spec: &BenchSpec,
    params: &LjParams,
    reporter: &ProgressReporter,
) -> Result<Vec<BenchRecord>, EngineError> {
    let total_runs = (spec.sizes.len() * spec.backends.len()) as u64;
    reporter.report(Progress::SweepStart { total_runs });
    info!(
        "Benchmark sweep: {} cluster sizes x {} backends, {} iterations each.",
        spec.sizes.len(),
        spec.backends.len(),
        spec.iterations
    );

    let mut records = Vec::with_capacity(total_runs as usize);
    for &natoms in &spec.sizes {
        let cluster = Cluster::generate(natoms, spec.radius, spec.seed)?;
        debug!("Generated {natoms} atom cluster (radius {}).", spec.radius);

        let mut energies = Vec::with_capacity(spec.backends.len());
        for backend in &spec.backends {
            reporter.report(Progress::RunStart {
                backend: backend.name(),
                natoms,
            });
            let evaluator = backend.evaluator();

            for _ in 0..spec.warmup {
                let _ = evaluator.energy(&cluster, params);
            }

            let mut samples = Vec::with_capacity(spec.iterations);
            let mut energy = 0.0;
            for _ in 0..spec.iterations {
                let start = Instant::now();
                energy = evaluator.energy(&cluster, params);
                samples.push(start.elapsed());
            }
            reporter.report(Progress::RunFinish);

            // The builder refuses zero iterations, so samples is non-empty.
            let Some(stats) = TimingStats::from_samples(&samples) else {
                continue;
            };
            debug!(
                "{} n={}: mean {:.6} s, min {:.6} s",
                backend, natoms, stats.mean_s, stats.min_s
            );
            records.push(BenchRecord {
                backend: backend.name(),
                natoms,
                iterations: spec.iterations,
                mean_s: stats.mean_s,
                min_s: stats.min_s,
                max_s: stats.max_s,
                std_dev_s: stats.std_dev_s,
                energy,
            });
            energies.push((backend.name(), energy));
        }
        verify_consistency(&energies, natoms)?;
        reporter.report(Progress::Message(format!(
            "{natoms} atoms: cross-backend energies agree"
        )));
    }

    reporter.report(Progress::SweepFinish);
    info!("Benchmark sweep finished with {} records.", records.len());
    Ok(records)
}
