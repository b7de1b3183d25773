use crate::core::cluster::Cluster;
use crate::core::potential::LjParams;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::evaluators::dense::DenseEvaluator;
use super::evaluators::pairwise::PairwiseEvaluator;

#[cfg(feature = "parallel")]
use super::evaluators::blocked::BlockedEvaluator;
#[cfg(feature = "parallel")]
use super::evaluators::parallel::ParallelEvaluator;

/// The result of a combined energy and force evaluation.
///
/// `forces[i]` is the total force on particle `i`; the vector is empty for
/// an empty cluster and all-zero for a single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReport {
    pub energy: f64,
    pub forces: Vec<Vector3<f64>>,
}

/// The seam between the physics and the execution strategy.
///
/// Every implementation computes the identical mathematical reduction (the
/// Lennard-Jones sum over unordered pairs, with the minimum-separation mask
/// of [`crate::core::potential::MIN_DISTANCE_SQ`]); they differ only in the
/// association order of the floating-point sum.
pub trait EnergyEvaluator: Send + Sync {
    fn energy(&self, cluster: &Cluster, params: &LjParams) -> f64;

    fn energy_and_forces(&self, cluster: &Cluster, params: &LjParams) -> EnergyReport;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown evaluation backend '{0}'")]
pub struct ParseBackendError(pub String);

/// Selects one of the interchangeable evaluation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Full O(n^2) distance-matrix style evaluation, counting every ordered
    /// pair and halving the sum.
    Dense,
    /// Scalar upper-triangular loop over unordered pairs.
    Pairwise,
    /// Row-parallel reduction across threads.
    #[cfg(feature = "parallel")]
    Parallel,
    /// Contiguous row blocks evaluated in parallel, partial sums reduced.
    #[cfg(feature = "parallel")]
    Blocked,
}

impl Backend {
    /// Every backend available under the current feature set.
    pub fn all() -> Vec<Backend> {
        let mut backends = vec![Backend::Dense, Backend::Pairwise];
        #[cfg(feature = "parallel")]
        {
            backends.push(Backend::Parallel);
            backends.push(Backend::Blocked);
        }
        backends
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Dense => "dense",
            Backend::Pairwise => "pairwise",
            #[cfg(feature = "parallel")]
            Backend::Parallel => "parallel",
            #[cfg(feature = "parallel")]
            Backend::Blocked => "blocked",
        }
    }

    pub fn evaluator(&self) -> Box<dyn EnergyEvaluator> {
        match self {
            Backend::Dense => Box::new(DenseEvaluator),
            Backend::Pairwise => Box::new(PairwiseEvaluator),
            #[cfg(feature = "parallel")]
            Backend::Parallel => Box::new(ParallelEvaluator),
            #[cfg(feature = "parallel")]
            Backend::Blocked => Box::new(BlockedEvaluator::default()),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(Backend::Dense),
            "pairwise" => Ok(Backend::Pairwise),
            #[cfg(feature = "parallel")]
            "parallel" => Ok(Backend::Parallel),
            #[cfg(feature = "parallel")]
            "blocked" => Ok(Backend::Blocked),
            other => Err(ParseBackendError(other.to_string())),
        }
    }
}
