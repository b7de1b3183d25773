use crate::core::cluster::Cluster;
use crate::core::potential::{LjParams, lennard_jones, lennard_jones_gradient};
use crate::engine::evaluator::{EnergyEvaluator, EnergyReport};
use nalgebra::Vector3;
use rayon::prelude::*;
use std::ops::Range;

/// Row-block decomposition: particle rows are split into contiguous blocks,
/// each block computes a partial sum over its rows, and the partials are
/// reduced. The block count defaults to the rayon thread count.
#[derive(Default)]
pub struct BlockedEvaluator {
    blocks: Option<usize>,
}

impl BlockedEvaluator {
    pub fn with_blocks(blocks: usize) -> Self {
        Self {
            blocks: Some(blocks.max(1)),
        }
    }

    fn block_ranges(&self, natoms: usize) -> Vec<Range<usize>> {
        let blocks = self
            .blocks
            .unwrap_or_else(rayon::current_num_threads)
            .clamp(1, natoms.max(1));
        let base = natoms / blocks;
        let remainder = natoms % blocks;
        let mut ranges = Vec::with_capacity(blocks);
        let mut start = 0;
        for b in 0..blocks {
            let len = base + usize::from(b < remainder);
            ranges.push(start..start + len);
            start += len;
        }
        ranges
    }
}

impl EnergyEvaluator for BlockedEvaluator {
    fn energy(&self, cluster: &Cluster, params: &LjParams) -> f64 {
        let positions = cluster.positions();
        let doubled: f64 = self
            .block_ranges(positions.len())
            .into_par_iter()
            .map(|range| {
                let mut partial = 0.0;
                for pi in &positions[range] {
                    for pj in positions {
                        partial +=
                            lennard_jones((pj - pi).norm_squared(), params.epsilon, params.sigma);
                    }
                }
                partial
            })
            .sum();
        doubled / 2.0
    }

    fn energy_and_forces(&self, cluster: &Cluster, params: &LjParams) -> EnergyReport {
        let positions = cluster.positions();
        let blocks: Vec<(f64, Vec<Vector3<f64>>)> = self
            .block_ranges(positions.len())
            .into_par_iter()
            .map(|range| {
                let mut partial = 0.0;
                let mut forces = Vec::with_capacity(range.len());
                for pi in &positions[range] {
                    let mut force = Vector3::zeros();
                    for pj in positions {
                        let diff = pj - pi;
                        let dist_sq = diff.norm_squared();
                        partial += lennard_jones(dist_sq, params.epsilon, params.sigma);
                        force +=
                            lennard_jones_gradient(dist_sq, params.epsilon, params.sigma) * diff;
                    }
                    forces.push(force);
                }
                (partial, forces)
            })
            .collect();

        let energy = blocks.iter().map(|(e, _)| e).sum::<f64>() / 2.0;
        let forces = blocks.into_iter().flat_map(|(_, f)| f).collect();
        EnergyReport { energy, forces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::evaluators::dense::DenseEvaluator;

    #[test]
    fn block_ranges_cover_all_rows_without_overlap() {
        let evaluator = BlockedEvaluator::with_blocks(4);
        let ranges = evaluator.block_ranges(10);
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), 10);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn block_count_never_exceeds_particle_count() {
        let evaluator = BlockedEvaluator::with_blocks(16);
        let ranges = evaluator.block_ranges(3);
        assert_eq!(ranges.len(), 3);
    }

    #[test]
    fn matches_the_dense_backend_regardless_of_block_count() {
        let cluster = Cluster::generate(30, 6.0, 5).unwrap();
        let params = LjParams::default();
        let reference = DenseEvaluator.energy(&cluster, &params);
        for blocks in [1, 2, 7, 30] {
            let energy = BlockedEvaluator::with_blocks(blocks).energy(&cluster, &params);
            assert!((energy - reference).abs() <= 1e-9 * reference.abs().max(1.0));
        }
    }

    #[test]
    fn forces_preserve_particle_order_across_blocks() {
        let cluster = Cluster::generate(12, 4.0, 9).unwrap();
        let params = LjParams::default();
        let reference = DenseEvaluator.energy_and_forces(&cluster, &params);
        let blocked = BlockedEvaluator::with_blocks(5).energy_and_forces(&cluster, &params);
        for (a, b) in reference.forces.iter().zip(&blocked.forces) {
            assert!((a - b).norm() < 1e-9);
        }
    }
}
