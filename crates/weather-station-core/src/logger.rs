//! Observation persistence.

use crate::record::Observation;
use crate::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Receives each finished observation.
pub trait ObservationLogger: Send + Sync {
    /// Persists `observation`.
    fn log(&self, observation: &Observation) -> Result<()>;
}

/// Appends observations to a file as indented JSON, one block per call.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    /// Creates a logger writing to `path`. The file is created on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, block: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

impl ObservationLogger for FileLogger {
    fn log(&self, observation: &Observation) -> Result<()> {
        let mut block = observation.to_pretty_json()?;
        block.push('\n');

        self.append(&block).map_err(|source| {
            warn!(
                "Failed to write observation log {}: {}",
                self.path.display(),
                source
            );
            Error::LogWrite {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(
            "Logged observation with {} field(s) to {}",
            observation.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_one_block_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.txt");
        let logger = FileLogger::new(&path);

        let mut obs: Observation = [("temperature", 50.0), ("humidity", 45.5)]
            .into_iter()
            .collect();
        logger.log(&obs).unwrap();
        obs.merge_patch(&[("temperature".to_string(), 51.0)].into_iter().collect());
        logger.log(&obs).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "{\n    \"humidity\": 45.5,\n    \"temperature\": 50.0\n}\n\
             {\n    \"humidity\": 45.5,\n    \"temperature\": 51.0\n}\n"
        );
    }

    #[test]
    fn test_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weather.txt");
        std::fs::write(&path, "previous\n").unwrap();

        let logger = FileLogger::new(&path);
        logger.log(&Observation::new()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("previous\n"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_unopenable_path_reports_log_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("weather.txt");
        let logger = FileLogger::new(&path);

        let err = logger.log(&Observation::new()).unwrap_err();
        match err {
            Error::LogWrite { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
