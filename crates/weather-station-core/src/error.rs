//! Error types for the weather station library.

use crate::sensors::SensorKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sampling, merging or publishing observations.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw input lacks the field a sensor reads.
    #[error("{kind} sensor: missing field `{field}` in input")]
    MissingField {
        kind: SensorKind,
        field: &'static str,
    },

    /// Sensor type identifier not known.
    #[error("Unknown sensor type: {0}")]
    UnknownSensorType(String),

    /// One or more sensors failed during a broadcast.
    #[error("{} sensor(s) failed to read input: {}", .0.len(), list_faults(.0))]
    SensorFaults(Vec<SensorFault>),

    /// Observation log could not be opened or written.
    #[error("Failed to write observation log {}: {source}", .path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Observation could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Notification output could not be written.
    #[error("Notification error: {0}")]
    Notify(#[source] std::io::Error),
}

/// A failure reported by a single sensor during a broadcast.
#[derive(Debug)]
pub struct SensorFault {
    /// Position of the sensor in registration order.
    pub index: usize,
    /// Variant of the failing sensor.
    pub kind: SensorKind,
    /// The sensor's error.
    pub error: Error,
}

impl fmt::Display for SensorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({}): {}", self.index, self.kind, self.error)
    }
}

fn list_faults(faults: &[SensorFault]) -> String {
    faults
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
