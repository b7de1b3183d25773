use crate::core::cluster::Cluster;
use crate::core::potential::{LjParams, lennard_jones, lennard_jones_gradient};
use crate::engine::evaluator::{EnergyEvaluator, EnergyReport};
use nalgebra::Vector3;

/// Full-matrix evaluation: every ordered pair is visited and the energy sum
/// is halved. The self-pair lands on the minimum-separation mask and
/// contributes nothing, so no diagonal branch is needed in the inner loop.
pub struct DenseEvaluator;

impl EnergyEvaluator for DenseEvaluator {
    fn energy(&self, cluster: &Cluster, params: &LjParams) -> f64 {
        let positions = cluster.positions();
        let mut total = 0.0;
        for pi in positions {
            for pj in positions {
                let dist_sq = (pj - pi).norm_squared();
                total += lennard_jones(dist_sq, params.epsilon, params.sigma);
            }
        }
        total / 2.0
    }

    fn energy_and_forces(&self, cluster: &Cluster, params: &LjParams) -> EnergyReport {
        let positions = cluster.positions();
        let mut total = 0.0;
        let mut forces = vec![Vector3::zeros(); positions.len()];
        for (i, pi) in positions.iter().enumerate() {
            for pj in positions {
                let diff = pj - pi;
                let dist_sq = diff.norm_squared();
                total += lennard_jones(dist_sq, params.epsilon, params.sigma);
                forces[i] += lennard_jones_gradient(dist_sq, params.epsilon, params.sigma) * diff;
            }
        }
        EnergyReport {
            energy: total / 2.0,
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
        let cluster = Cluster::from_flat(&[0.0, 0.0, 0.0, 1.5, 0.0, 0.0]).unwrap();
        let params = LjParams::default();
        let expected = lennard_jones(2.25, 1.0, 1.0);
        let energy = DenseEvaluator.energy(&cluster, &params);
        assert!((energy - expected).abs() < 1e-12);
    }

    #[test]
    fn forces_on_a_pair_are_equal_and_opposite() {
        let cluster = Cluster::from_flat(&[0.0, 0.0, 0.0, 1.5, 0.0, 0.0]).unwrap();
        let report = DenseEvaluator.energy_and_forces(&cluster, &LjParams::default());
        assert_eq!(report.forces.len(), 2);
        assert!((report.forces[0] + report.forces[1]).norm() < 1e-12);
        // Beyond the well minimum the pair attracts.
        assert!(report.forces[0].x > 0.0);
        assert!(report.forces[1].x < 0.0);
    }

    #[test]
    fn coincident_particles_are_masked_out() {
        let cluster = Cluster::from_flat(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        let report = DenseEvaluator.energy_and_forces(&cluster, &LjParams::default());
        assert_eq!(report.energy, 0.0);
        assert_eq!(report.forces[0], Vector3::zeros());
    }
}
