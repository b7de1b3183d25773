use thiserror::Error;

use crate::core::cluster::ClusterError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cluster construction failed: {source}")]
    Cluster {
        #[from]
        source: ClusterError,
    },

    #[error(
        "Backend energies diverge for {natoms} atoms: \
         {reference_backend} gives {reference}, {candidate_backend} gives {candidate}"
    )]
    InconsistentEnergy {
        natoms: usize,
        reference_backend: &'static str,
        reference: f64,
        candidate_backend: &'static str,
        candidate: f64,
    },

    #[error("Failed to write benchmark records: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
