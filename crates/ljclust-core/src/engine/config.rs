use crate::core::cluster::{DEFAULT_RADIUS, DEFAULT_SEED};
use crate::core::potential::LjParams;
use crate::engine::evaluator::Backend;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{0}' must not be empty")]
    EmptyParameter(&'static str),
    #[error("Parameter '{0}' must be positive")]
    NonPositiveParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyConfig {
    pub backend: Backend,
    pub params: LjParams,
    pub compute_forces: bool,
}

#[derive(Default)]
pub struct EnergyConfigBuilder {
    backend: Option<Backend>,
    params: Option<LjParams>,
    compute_forces: bool,
}

impl EnergyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }
    pub fn params(mut self, params: LjParams) -> Self {
        self.params = Some(params);
        self
    }
    pub fn compute_forces(mut self, compute_forces: bool) -> Self {
        self.compute_forces = compute_forces;
        self
    }

    pub fn build(self) -> Result<EnergyConfig, ConfigError> {
        Ok(EnergyConfig {
            backend: self
                .backend
                .ok_or(ConfigError::MissingParameter("backend"))?,
            params: self.params.unwrap_or_default(),
            compute_forces: self.compute_forces,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchSpec {
    pub sizes: Vec<usize>,
    pub iterations: usize,
    pub warmup: usize,
    pub radius: f64,
    pub seed: u64,
    pub backends: Vec<Backend>,
}

#[derive(Default)]
pub struct BenchSpecBuilder {
    sizes: Option<Vec<usize>>,
    iterations: Option<usize>,
    warmup: Option<usize>,
    radius: Option<f64>,
    seed: Option<u64>,
    backends: Option<Vec<Backend>>,
}

impl BenchSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = Some(sizes);
        self
    }
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }
    pub fn warmup(mut self, warmup: usize) -> Self {
        self.warmup = Some(warmup);
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn backends(mut self, backends: Vec<Backend>) -> Self {
        self.backends = Some(backends);
        self
    }

    pub fn build(self) -> Result<BenchSpec, ConfigError> {
        let sizes = self.sizes.ok_or(ConfigError::MissingParameter("sizes"))?;
        if sizes.is_empty() {
            return Err(ConfigError::EmptyParameter("sizes"));
        }
        let backends = self.backends.unwrap_or_else(Backend::all);
        if backends.is_empty() {
            return Err(ConfigError::EmptyParameter("backends"));
        }
        let iterations = self.iterations.unwrap_or(5);
        if iterations == 0 {
            return Err(ConfigError::NonPositiveParameter("iterations"));
        }
        let radius = self.radius.unwrap_or(DEFAULT_RADIUS);
        if radius <= 0.0 {
            return Err(ConfigError::NonPositiveParameter("radius"));
        }
        Ok(BenchSpec {
            sizes,
            iterations,
            warmup: self.warmup.unwrap_or(1),
            radius,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            backends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_config_requires_a_backend() {
        let result = EnergyConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("backend")));
    }

    #[test]
    fn energy_config_defaults_to_reduced_units_without_forces() {
        let config = EnergyConfigBuilder::new()
            .backend(Backend::Pairwise)
            .build()
            .unwrap();
        assert_eq!(config.params, LjParams::default());
        assert!(!config.compute_forces);
    }

    #[test]
    fn bench_spec_requires_sizes() {
        let result = BenchSpecBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("sizes")));
    }

    #[test]
    fn bench_spec_rejects_empty_sizes() {
        let result = BenchSpecBuilder::new().sizes(Vec::new()).build();
        assert_eq!(result, Err(ConfigError::EmptyParameter("sizes")));
    }

    #[test]
    fn bench_spec_rejects_zero_iterations() {
        let result = BenchSpecBuilder::new().sizes(vec![10]).iterations(0).build();
        assert_eq!(result, Err(ConfigError::NonPositiveParameter("iterations")));
    }

    #[test]
    fn bench_spec_rejects_empty_backend_list() {
        let result = BenchSpecBuilder::new()
            .sizes(vec![10])
            .backends(Vec::new())
            .build();
        assert_eq!(result, Err(ConfigError::EmptyParameter("backends")));
    }

    #[test]
    fn bench_spec_applies_defaults() {
        let spec = BenchSpecBuilder::new().sizes(vec![10, 20]).build().unwrap();
        assert_eq!(spec.iterations, 5);
        assert_eq!(spec.warmup, 1);
        assert_eq!(spec.radius, DEFAULT_RADIUS);
        assert_eq!(spec.seed, DEFAULT_SEED);
        assert_eq!(spec.backends, Backend::all());
    }
}
