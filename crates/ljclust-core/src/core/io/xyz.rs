use super::traits::ClusterFile;
use crate::core::cluster::Cluster;
use nalgebra::Point3;
use std::io::{BufRead, Write};
use thiserror::Error;

// The original cluster scripts emit argon clusters, and the symbol carries
// no information for a single-species system.
const ELEMENT_SYMBOL: &str = "Ar";

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Missing particle count header")]
    MissingHeader,
    #[error("Invalid particle count '{0}'")]
    InvalidCount(String),
    #[error("Expected {expected} coordinate records, found {found}")]
    TruncatedFrame { expected: usize, found: usize },
    #[error("Malformed coordinate record on line {line_number}: '{line}'")]
    InvalidRecord { line_number: usize, line: String },
}

/// XYZ-style plain-text coordinate format.
///
/// A frame is a particle count line, a comment line, and one
/// `<symbol> <x> <y> <z>` record per particle. Reading consumes a single
/// frame; writing emits one, so repeated appends build a trajectory.
pub struct XyzFile;

impl ClusterFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Cluster, XyzError> {
        let mut lines = reader.lines().enumerate();

        let count_line = loop {
            match lines.next() {
                Some((_, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => return Err(XyzError::MissingHeader),
            }
        };
        let expected: usize = count_line
            .trim()
            .parse()
            .map_err(|_| XyzError::InvalidCount(count_line.trim().to_string()))?;

        // Comment line; absent only when the frame is already over.
        match lines.next() {
            Some((_, line)) => {
                line?;
            }
            None if expected > 0 => {
                return Err(XyzError::TruncatedFrame { expected, found: 0 });
            }
            None => {}
        }

        let mut positions = Vec::with_capacity(expected);
        for _ in 0..expected {
            let Some((index, line)) = lines.next() else {
                return Err(XyzError::TruncatedFrame {
                    expected,
                    found: positions.len(),
                });
            };
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            let coords: Option<Vec<f64>> = match fields.as_slice() {
                [_symbol, x, y, z] => [x, y, z].iter().map(|v| v.parse().ok()).collect(),
                _ => None,
            };
            match coords {
                Some(c) => positions.push(Point3::new(c[0], c[1], c[2])),
                None => {
                    return Err(XyzError::InvalidRecord {
                        line_number: index + 1,
                        line,
                    });
                }
            }
        }
        Ok(Cluster::from_positions(positions))
    }

    fn write_to(cluster: &Cluster, writer: &mut impl Write) -> Result<(), XyzError> {
        writeln!(writer, "{}", cluster.len())?;
        writeln!(writer)?;
        for position in cluster.positions() {
            writeln!(
                writer,
                "{} {:12.8} {:12.8} {:12.8}",
                ELEMENT_SYMBOL, position.x, position.y, position.z
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn roundtrip(cluster: &Cluster) -> Cluster {
        let mut buffer = Vec::new();
        XyzFile::write_to(cluster, &mut buffer).unwrap();
        XyzFile::read_from(&mut BufReader::new(buffer.as_slice())).unwrap()
    }

    #[test]
    fn writes_count_comment_and_records() {
        let cluster = Cluster::from_flat(&[1.0, 2.0, 3.0]).unwrap();
        let mut buffer = Vec::new();
        XyzFile::write_to(&cluster, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("1"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Ar   1.00000000   2.00000000   3.00000000"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn read_recovers_written_positions() {
        let cluster = Cluster::generate(25, 5.0, 7).unwrap();
        let recovered = roundtrip(&cluster);
        assert_eq!(recovered.len(), cluster.len());
        for (a, b) in cluster.positions().iter().zip(recovered.positions()) {
            assert!((a - b).norm() < 1e-7);
        }
    }

    #[test]
    fn read_handles_empty_cluster_frame() {
        let cluster = roundtrip(&Cluster::new());
        assert!(cluster.is_empty());
    }

    #[test]
    fn read_fails_on_empty_input() {
        let result = XyzFile::read_from(&mut BufReader::new("".as_bytes()));
        assert!(matches!(result, Err(XyzError::MissingHeader)));
    }

    #[test]
    fn read_fails_on_non_numeric_count() {
        let result = XyzFile::read_from(&mut BufReader::new("three\n\n".as_bytes()));
        assert!(matches!(result, Err(XyzError::InvalidCount(c)) if c == "three"));
    }

    #[test]
    fn read_fails_on_truncated_frame() {
        let input = "2\n\nAr 0.0 0.0 0.0\n";
        let result = XyzFile::read_from(&mut BufReader::new(input.as_bytes()));
        assert!(matches!(
            result,
            Err(XyzError::TruncatedFrame {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn read_fails_on_malformed_record() {
        let input = "1\n\nAr 0.0 zero 0.0\n";
        let result = XyzFile::read_from(&mut BufReader::new(input.as_bytes()));
        assert!(matches!(
            result,
            Err(XyzError::InvalidRecord { line_number: 3, .. })
        ));
    }

    #[test]
    fn append_accumulates_frames_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectory.xyz");
        let first = Cluster::from_flat(&[0.0, 0.0, 0.0]).unwrap();
        let second = Cluster::from_flat(&[1.0, 1.0, 1.0]).unwrap();

        XyzFile::append_to_path(&first, &path).unwrap();
        XyzFile::append_to_path(&second, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("Ar")).count(), 2);
        assert_eq!(text.lines().filter(|l| *l == "1").count(), 2);
    }
}
