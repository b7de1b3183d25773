use crate::cli::EnergyArgs;
use crate::error::{CliError, Result};
use ljclust::core::cluster::Cluster;
use ljclust::core::io::traits::ClusterFile;
use ljclust::core::io::xyz::XyzFile;
use ljclust::core::params::PresetLibrary;
use ljclust::core::potential::LjParams;
use ljclust::engine::config::EnergyConfigBuilder;
use ljclust::engine::error::EngineError;
use ljclust::engine::progress::ProgressReporter;
use ljclust::workflows;
use tracing::info;

pub fn run(args: EnergyArgs) -> Result<()> {
    let cluster = match &args.input {
        Some(path) => {
            info!("Loading cluster from {:?}", path);
            XyzFile::read_from_path(path).map_err(|e| CliError::File {
                path: path.clone(),
                source: e.into(),
            })?
        }
        None => {
            info!(
                "Generating a {} atom cluster (radius {}, seed {}).",
                args.natoms, args.radius, args.seed
            );
            Cluster::generate(args.natoms, args.radius, args.seed).map_err(EngineError::from)?
        }
    };

    let params = resolve_params(&args)?;
    let config = EnergyConfigBuilder::new()
        .backend(args.backend)
        .params(params)
        .compute_forces(args.forces)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let solution = workflows::energy::run(&cluster, &config, &ProgressReporter::new())?;

    let centroid = cluster.centroid();
    println!("A {} atom cluster", solution.natoms);
    println!("  Backend:      {}", solution.backend);
    println!(
        "  Centroid:     ({:.4}, {:.4}, {:.4})",
        centroid.x, centroid.y, centroid.z
    );
    println!("  Total energy: {:.4}", solution.energy);
    println!(
        "  Wall time:    {:.6} s",
        solution.elapsed.as_secs_f64()
    );
    if let Some(forces) = &solution.forces {
        println!("  Forces:");
        for (i, force) in forces.iter().enumerate() {
            println!(
                "    {:>6} {:14.8} {:14.8} {:14.8}",
                i, force.x, force.y, force.z
            );
        }
    }
    Ok(())
}

fn resolve_params(args: &EnergyArgs) -> Result<LjParams> {
    if let Some(name) = &args.preset {
        let library = match &args.params {
            Some(path) => PresetLibrary::load(path).map_err(|e| CliError::File {
                path: path.clone(),
                source: e.into(),
            })?,
            None => PresetLibrary::builtin(),
        };
        return library.get(name).map_err(|e| {
            let mut names: Vec<&str> = library.names().collect();
            names.sort_unstable();
            CliError::Argument(format!("{e}; available presets: {}", names.join(", ")))
        });
    }

    let mut params = LjParams::default();
    if let Some(epsilon) = args.epsilon {
        params.epsilon = epsilon;
    }
    if let Some(sigma) = args.sigma {
        params.sigma = sigma;
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ljclust::engine::evaluator::Backend;
    use std::path::PathBuf;

    fn args_with(preset: Option<&str>, epsilon: Option<f64>, sigma: Option<f64>) -> EnergyArgs {
        EnergyArgs {
            input: None,
            natoms: 10,
            radius: 5.0,
            seed: 1,
            backend: Backend::Dense,
            forces: false,
            epsilon,
            sigma,
            preset: preset.map(str::to_string),
            params: None,
        }
    }

    #[test]
    fn explicit_epsilon_and_sigma_override_defaults() {
        let params = resolve_params(&args_with(None, Some(0.5), Some(2.0))).unwrap();
        assert_eq!(params, LjParams::new(0.5, 2.0));
    }

    #[test]
    fn omitted_parameters_fall_back_to_reduced_units() {
        let params = resolve_params(&args_with(None, None, None)).unwrap();
        assert_eq!(params, LjParams::default());
    }

    #[test]
    fn builtin_preset_is_resolved_by_name() {
        let params = resolve_params(&args_with(Some("reduced"), None, None)).unwrap();
        assert_eq!(params, LjParams::default());
    }

    #[test]
    fn unknown_preset_is_an_argument_error() {
        let result = resolve_params(&args_with(Some("unobtainium"), None, None));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn preset_file_errors_carry_the_path() {
        let mut args = args_with(Some("argon"), None, None);
        args.params = Some(PathBuf::from("/nonexistent/presets.toml"));
        let result = resolve_params(&args);
        assert!(matches!(result, Err(CliError::File { .. })));
    }
}
