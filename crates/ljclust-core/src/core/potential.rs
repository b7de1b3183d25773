use serde::{Deserialize, Serialize};

// Pairs at or below this squared separation are treated as non-interacting,
// which keeps coincident particles (including a particle with itself in the
// dense full-matrix path) out of the sum.
pub const MIN_DISTANCE_SQ: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LjParams {
    pub epsilon: f64,
    pub sigma: f64,
}

impl LjParams {
    pub fn new(epsilon: f64, sigma: f64) -> Self {
        Self { epsilon, sigma }
    }
}

impl Default for LjParams {
    // Reduced units.
    fn default() -> Self {
        Self {
            epsilon: 1.0,
            sigma: 1.0,
        }
    }
}

#[inline]
pub fn lennard_jones(dist_sq: f64, epsilon: f64, sigma: f64) -> f64 {
    if dist_sq <= MIN_DISTANCE_SQ {
        return 0.0;
    }
    let sr2 = (sigma * sigma) / dist_sq;
    let sr6 = sr2.powi(3);
    4.0 * epsilon * (sr6 * sr6 - sr6)
}

// Returns g such that the force exerted on a particle at `a` by a particle
// at `b` is `g * (b - a)`; g > 0 is attraction. Derived from the potential
// as twice its derivative with respect to the squared distance.
#[inline]
pub fn lennard_jones_gradient(dist_sq: f64, epsilon: f64, sigma: f64) -> f64 {
    if dist_sq <= MIN_DISTANCE_SQ {
        return 0.0;
    }
    let sigma_sq = sigma * sigma;
    let sr2 = sigma_sq / dist_sq;
    -24.0 * epsilon * (2.0 * sr2.powi(7) - sr2.powi(4)) / sigma_sq
}
