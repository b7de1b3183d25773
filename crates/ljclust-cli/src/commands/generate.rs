use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use ljclust::core::cluster::Cluster;
use ljclust::core::io::traits::ClusterFile;
use ljclust::core::io::xyz::XyzFile;
use ljclust::engine::error::EngineError;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    info!(
        "Generating a {} atom cluster (radius {}, seed {}).",
        args.natoms, args.radius, args.seed
    );
    let cluster =
        Cluster::generate(args.natoms, args.radius, args.seed).map_err(EngineError::from)?;

    let write_result = if args.append {
        XyzFile::append_to_path(&cluster, &args.output)
    } else {
        XyzFile::write_to_path(&cluster, &args.output)
    };
    write_result.map_err(|e| CliError::File {
        path: args.output.clone(),
        source: e.into(),
    })?;

    println!(
        "✓ Wrote {} atom cluster to {}",
        cluster.len(),
        args.output.display()
    );
    Ok(())
}
