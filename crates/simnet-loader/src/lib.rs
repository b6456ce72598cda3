use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use simnet_abstract::{Dataset, InterfaceSample};

#[derive(Debug, Error)]
pub enum LoadError {
    /// The capture file does not exist. Callers treat this as "nothing to
    /// do" rather than a fatal failure.
    #[error("data file {} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Missing columns, bad types, ragged rows.
    #[error("malformed record in {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Parse a capture CSV into a [`Dataset`].
///
/// The file must carry a header row naming at least the sample columns;
/// extra columns (timestamp, link speed, …) are ignored. Row order is
/// preserved as-is.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut samples = Vec::new();
    for record in reader.deserialize::<InterfaceSample>() {
        let sample = record.map_err(|source| LoadError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        samples.push(sample);
    }

    debug!(rows = samples.len(), path = %path.display(), "capture parsed");
    Ok(Dataset::from_samples(samples))
}
