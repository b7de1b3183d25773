use crate::engine::error::EngineError;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

// Backends iterate the same pair set with the same kernel; anything beyond
// float association-order noise means a backend is broken.
pub const ENERGY_TOLERANCE: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub mean_s: f64,
    pub min_s: f64,
    pub max_s: f64,
    pub std_dev_s: f64,
}

impl TimingStats {
    pub fn from_samples(samples: &[Duration]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let secs: Vec<f64> = samples.iter().map(Duration::as_secs_f64).collect();
        let mean_s = secs.iter().sum::<f64>() / secs.len() as f64;
        let min_s = secs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_s = secs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = secs.iter().map(|s| (s - mean_s).powi(2)).sum::<f64>() / secs.len() as f64;
        Some(Self {
            mean_s,
            min_s,
            max_s,
            std_dev_s: variance.sqrt(),
        })
    }
}

/// One row of benchmark output: a (backend, cluster size) combination with
/// its timing statistics and the energy it reported.
#[derive(Debug, Clone, Serialize)]
pub struct BenchRecord {
    pub backend: &'static str,
    pub natoms: usize,
    pub iterations: usize,
    pub mean_s: f64,
    pub min_s: f64,
    pub max_s: f64,
    pub std_dev_s: f64,
    pub energy: f64,
}

pub fn write_csv(records: &[BenchRecord], path: &Path) -> Result<(), EngineError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn verify_consistency(
    energies: &[(&'static str, f64)],
    natoms: usize,
) -> Result<(), EngineError> {
    let Some(&(reference_backend, reference)) = energies.first() else {
        return Ok(());
    };
    for &(candidate_backend, candidate) in &energies[1..] {
        if (candidate - reference).abs() > ENERGY_TOLERANCE * reference.abs().max(1.0) {
            return Err(EngineError::InconsistentEnergy {
                natoms,
                reference_backend,
                reference,
                candidate_backend,
                candidate,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_from_known_samples() {
        let samples = [
            Duration::from_secs_f64(1.0),
            Duration::from_secs_f64(2.0),
            Duration::from_secs_f64(3.0),
        ];
        let stats = TimingStats::from_samples(&samples).unwrap();
        assert!((stats.mean_s - 2.0).abs() < 1e-12);
        assert!((stats.min_s - 1.0).abs() < 1e-12);
        assert!((stats.max_s - 3.0).abs() < 1e-12);
        assert!((stats.std_dev_s - (2.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn stats_of_empty_sample_set_is_none() {
        assert_eq!(TimingStats::from_samples(&[]), None);
    }

    #[test]
    fn verify_consistency_accepts_matching_energies() {
        let energies = [("dense", -10.0), ("pairwise", -10.0 + 1e-12)];
        assert!(verify_consistency(&energies, 100).is_ok());
    }

    #[test]
    fn verify_consistency_rejects_diverging_energies() {
        let energies = [("dense", -10.0), ("pairwise", -10.5)];
        let result = verify_consistency(&energies, 100);
        assert!(matches!(
            result,
            Err(EngineError::InconsistentEnergy {
                natoms: 100,
                candidate_backend: "pairwise",
                ..
            })
        ));
    }

    #[test]
    fn verify_consistency_accepts_empty_and_singleton_sets() {
        assert!(verify_consistency(&[], 0).is_ok());
        assert!(verify_consistency(&[("dense", 1.0)], 10).is_ok());
    }

    #[test]
    fn write_csv_emits_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let records = vec![BenchRecord {
            backend: "dense",
            natoms: 100,
            iterations: 5,
            mean_s: 0.5,
            min_s: 0.4,
            max_s: 0.6,
            std_dev_s: 0.07,
            energy: -12.5,
        }];

        write_csv(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("backend,natoms,iterations,mean_s,min_s,max_s,std_dev_s,energy")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("dense,100,5,"));
        assert!(row.ends_with("-12.5"));
    }
}
