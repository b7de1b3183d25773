use nalgebra::{Point3, Vector3};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Default spread (standard deviation, in length units) for generated clusters.
pub const DEFAULT_RADIUS: f64 = 20.0;

/// Default seed for reproducible cluster generation.
pub const DEFAULT_SEED: u64 = 1981;

#[derive(Debug, Error, PartialEq)]
pub enum ClusterError {
    #[error("Flat coordinate buffer of length {0} is not a multiple of 3")]
    RaggedCoordinates(usize),
    #[error("Cluster radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
}

/// A cluster of point particles in 3-D space.
///
/// This is the sole input to every energy evaluation backend: an ordered,
/// owned list of positions with no velocities, masses, or species attached.
/// Particle identity is positional (index into the list), and the index
/// order is preserved by generation, file I/O, and force output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cluster {
    positions: Vec<Point3<f64>>,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positions(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    /// Builds a cluster from a flat `[x0, y0, z0, x1, y1, z1, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::RaggedCoordinates`] when the buffer length is
    /// not a multiple of 3.
    pub fn from_flat(coords: &[f64]) -> Result<Self, ClusterError> {
        if coords.len() % 3 != 0 {
            return Err(ClusterError::RaggedCoordinates(coords.len()));
        }
        let positions = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self { positions })
    }

    /// Generates a reproducible random cluster of `natoms` particles.
    ///
    /// Each coordinate is drawn from a normal distribution with mean 0 and
    /// standard deviation `radius`, then shifted by -0.5. The same
    /// `(natoms, radius, seed)` triple always yields the same cluster.
    ///
    /// # Errors
    ///
    /// Returns [`ClusterError::InvalidRadius`] when `radius` is not a
    /// positive finite number.
    pub fn generate(natoms: usize, radius: f64, seed: u64) -> Result<Self, ClusterError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(ClusterError::InvalidRadius(radius));
        }
        let normal = Normal::new(0.0, radius).map_err(|_| ClusterError::InvalidRadius(radius))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..natoms)
            .map(|_| {
                Point3::new(
                    normal.sample(&mut rng) - 0.5,
                    normal.sample(&mut rng) - 0.5,
                    normal.sample(&mut rng) - 0.5,
                )
            })
            .collect();
        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// The arithmetic mean of all positions; the origin for an empty cluster.
    pub fn centroid(&self) -> Point3<f64> {
        if self.positions.is_empty() {
            return Point3::origin();
        }
        let sum: Vector3<f64> = self.positions.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.positions.len() as f64)
    }
}
