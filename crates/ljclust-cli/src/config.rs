use crate::cli::BenchArgs;
use crate::error::{CliError, Result};
use ljclust::engine::config::{BenchSpec, BenchSpecBuilder};
use ljclust::engine::evaluator::Backend;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk shape of the `bench` configuration file. Every key is optional;
/// CLI flags override file values, and engine defaults fill the rest.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct BenchFileConfig {
    pub sizes: Option<Vec<usize>>,
    pub iterations: Option<usize>,
    pub warmup: Option<usize>,
    pub radius: Option<f64>,
    pub seed: Option<u64>,
    pub backends: Option<Vec<String>>,
    pub output: Option<PathBuf>,
}

impl BenchFileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading benchmark configuration from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| CliError::File {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::File {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &BenchArgs) -> Result<(BenchSpec, Option<PathBuf>)> {
        let backends = match (&args.backends, self.backends) {
            (Some(cli_backends), _) => Some(cli_backends.clone()),
            (None, Some(file_backends)) => Some(
                file_backends
                    .iter()
                    .map(|name| {
                        name.parse::<Backend>()
                            .map_err(|e| CliError::Argument(e.to_string()))
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            (None, None) => None,
        };

        let mut builder = BenchSpecBuilder::new().sizes(
            args.sizes
                .clone()
                .or(self.sizes)
                .unwrap_or_else(|| vec![100, 500, 1000]),
        );
        if let Some(iterations) = args.iterations.or(self.iterations) {
            builder = builder.iterations(iterations);
        }
        if let Some(warmup) = args.warmup.or(self.warmup) {
            builder = builder.warmup(warmup);
        }
        if let Some(radius) = args.radius.or(self.radius) {
            builder = builder.radius(radius);
        }
        if let Some(seed) = args.seed.or(self.seed) {
            builder = builder.seed(seed);
        }
        if let Some(backends) = backends {
            builder = builder.backends(backends);
        }

        let spec = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;
        let output = args.output.clone().or(self.output);
        Ok((spec, output))
    }
}
