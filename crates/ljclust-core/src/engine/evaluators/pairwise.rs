use crate::core::cluster::Cluster;
use crate::core::potential::{LjParams, lennard_jones, lennard_jones_gradient};
use crate::engine::evaluator::{EnergyEvaluator, EnergyReport};
use itertools::Itertools;
use nalgebra::Vector3;

/// Scalar upper-triangular loop: each unordered pair is visited exactly
/// once. The force path exploits Newton's third law and writes the pair
/// force to both particles.
pub struct PairwiseEvaluator;

impl EnergyEvaluator for PairwiseEvaluator {
    fn energy(&self, cluster: &Cluster, params: &LjParams) -> f64 {
        let positions = cluster.positions();
        (0..positions.len())
            .tuple_combinations()
            .map(|(i, j)| {
                let dist_sq = (positions[j] - positions[i]).norm_squared();
                lennard_jones(dist_sq, params.epsilon, params.sigma)
            })
            .sum()
    }

    fn energy_and_forces(&self, cluster: &Cluster, params: &LjParams) -> EnergyReport {
        let positions = cluster.positions();
        let mut total = 0.0;
        let mut forces = vec![Vector3::zeros(); positions.len()];
        for (i, j) in (0..positions.len()).tuple_combinations() {
            let diff = positions[j] - positions[i];
            let dist_sq = diff.norm_squared();
            total += lennard_jones(dist_sq, params.epsilon, params.sigma);
            let pair_force = lennard_jones_gradient(dist_sq, params.epsilon, params.sigma) * diff;
            forces[i] += pair_force;
            forces[j] -= pair_force;
        }
        EnergyReport {
            energy: total,
            forces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::potential::lennard_jones;

    #[test]
    fn two_particles_match_the_kernel() {
        let cluster = Cluster::from_flat(&[0.0, 0.0, 0.0, 0.0, 2.0, 0.0]).unwrap();
        let params = LjParams::default();
        let energy = PairwiseEvaluator.energy(&cluster, &params);
        assert!((energy - lennard_jones(4.0, 1.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn triangular_loop_counts_each_pair_once() {
        // Three particles on a line at 0, 2, 4: pairs at r^2 = 4, 4, 16.
        let cluster = Cluster::from_flat(&[0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 4.0, 0.0, 0.0]).unwrap();
        let params = LjParams::default();
        let expected = 2.0 * lennard_jones(4.0, 1.0, 1.0) + lennard_jones(16.0, 1.0, 1.0);
        let energy = PairwiseEvaluator.energy(&cluster, &params);
        assert!((energy - expected).abs() < 1e-12);
    }

    #[test]
    fn forces_on_a_pair_are_equal_and_opposite() {
        let cluster = Cluster::from_flat(&[0.0, 0.0, 0.0, 0.0, 0.0, 1.5]).unwrap();
        let report = PairwiseEvaluator.energy_and_forces(&cluster, &LjParams::default());
        assert!((report.forces[0] + report.forces[1]).norm() < 1e-12);
        assert!(report.forces[0].z > 0.0);
    }
}
