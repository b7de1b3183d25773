use crate::core::cluster::Cluster;
use crate::core::potential::{LjParams, lennard_jones, lennard_jones_gradient};
use crate::engine::evaluator::{EnergyEvaluator, EnergyReport};
use nalgebra::Vector3;
use rayon::prelude::*;

/// Row-parallel reduction: each particle's full interaction row is computed
/// on one thread and the row sums are reduced. Every unordered pair is
/// therefore counted twice and the total halved, which keeps the force
/// accumulation lock-free.
pub struct ParallelEvaluator;

impl EnergyEvaluator for ParallelEvaluator {
    fn energy(&self, cluster: &Cluster, params: &LjParams) -> f64 {
        let positions = cluster.positions();
        let doubled: f64 = positions
            .par_iter()
            .map(|pi| {
                positions
                    .iter()
                    .map(|pj| {
                        lennard_jones((pj - pi).norm_squared(), params.epsilon, params.sigma)
                    })
                    .sum::<f64>()
            })
            .sum();
        doubled / 2.0
    }

    fn energy_and_forces(&self, cluster: &Cluster, params: &LjParams) -> EnergyReport {
        let positions = cluster.positions();
        let rows: Vec<(f64, Vector3<f64>)> = positions
            .par_iter()
            .map(|pi| {
                let mut row_energy = 0.0;
                let mut force = Vector3::zeros();
                for pj in positions {
                    let diff = pj - pi;
                    let dist_sq = diff.norm_squared();
                    row_energy += lennard_jones(dist_sq, params.epsilon, params.sigma);
                    force += lennard_jones_gradient(dist_sq, params.epsilon, params.sigma) * diff;
                }
                (row_energy, force)
            })
            .collect();

        let energy = rows.iter().map(|(e, _)| e).sum::<f64>() / 2.0;
        let forces = rows.into_iter().map(|(_, f)| f).collect();
        EnergyReport { energy, forces }
    }
}
