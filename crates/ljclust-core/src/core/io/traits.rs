use crate::core::cluster::Cluster;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing cluster coordinate files.
///
/// Implementors handle format-specific parsing and serialization; the
/// path-based methods are provided on top of the stream-based ones.
pub trait ClusterFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a cluster from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Cluster, Self::Error>;

    /// Writes a cluster to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(cluster: &Cluster, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a cluster from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Cluster, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a cluster to a file path, truncating any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(cluster: &Cluster, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(cluster, &mut writer)
    }

    /// Appends a cluster to a file path, creating the file if needed.
    ///
    /// Successive appends accumulate frames, which is how trajectory-style
    /// output is produced for visualization.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or writing fails.
    fn append_to_path<P: AsRef<Path>>(cluster: &Cluster, path: P) -> Result<(), Self::Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(cluster, &mut writer)
    }
}
