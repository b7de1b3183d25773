use crate::core::cluster::Cluster;
use crate::engine::config::EnergyConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Vector3;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct EnergySolution {
    pub backend: &'static str,
    pub natoms: usize,
    pub energy: f64,
    pub forces: Option<Vec<Vector3<f64>>>,
    pub elapsed: Duration,
}

#[instrument(skip_all, name = "energy_workflow", fields(backend = %config.backend, natoms = cluster.len()))]
pub fn run(
    cluster: &Cluster,
    config: &EnergyConfig,
    reporter: &ProgressReporter,
) -> Result<EnergySolution, EngineError> {
    reporter.report(Progress::SweepStart { total_runs: 1 });
    reporter.report(Progress::RunStart {
        backend: config.backend.name(),
        natoms: cluster.len(),
    });
    info!(
        "Evaluating a {} atom cluster with the '{}' backend.",
        cluster.len(),
        config.backend
    );

    let evaluator = config.backend.evaluator();
    let start = Instant::now();
    let (energy, forces) = if config.compute_forces {
        let report = evaluator.energy_and_forces(cluster, &config.params);
        (report.energy, Some(report.forces))
    } else {
        (evaluator.energy(cluster, &config.params), None)
    };
    let elapsed = start.elapsed();

    reporter.report(Progress::RunFinish);
    reporter.report(Progress::SweepFinish);
    info!(
        "Total energy: {:.4} ({:.3e} s)",
        energy,
        elapsed.as_secs_f64()
    );

    Ok(EnergySolution {
        backend: config.backend.name(),
        natoms: cluster.len(),
        energy,
        forces,
        elapsed,
    })
}
