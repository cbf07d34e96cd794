//! Sensor variants.
//!
//! Type identifiers are upper-case and matched exactly, so `"temperature"`
//! is not a valid identifier even though it is the field name.

use super::{HumiditySensor, TemperatureSensor};
use crate::{Error, Result};
use std::str::FromStr;

/// Tag identifying which variant a sensor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Air temperature, field `temperature`.
    Temperature,
    /// Relative humidity, field `humidity`.
    Humidity,
    /// Variant registered with a factory outside this crate.
    Custom {
        type_id: &'static str,
        field: &'static str,
    },
}

impl SensorKind {
    /// Every built-in variant.
    pub const ALL: [SensorKind; 2] = [SensorKind::Temperature, SensorKind::Humidity];

    /// Returns the factory type identifier.
    pub fn type_id(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "TEMPERATURE",
            SensorKind::Humidity => "HUMIDITY",
            SensorKind::Custom { type_id, .. } => *type_id,
        }
    }

    /// Returns the raw input field this variant reads.
    pub fn field(&self) -> &'static str {
        match self {
            SensorKind::Temperature => TemperatureSensor::FIELD,
            SensorKind::Humidity => HumiditySensor::FIELD,
            SensorKind::Custom { field, .. } => *field,
        }
    }
}

/// Parses built-in type identifiers only.
impl FromStr for SensorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TEMPERATURE" => Ok(SensorKind::Temperature),
            "HUMIDITY" => Ok(SensorKind::Humidity),
            _ => Err(Error::UnknownSensorType(s.to_string())),
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "TEMPERATURE".parse::<SensorKind>().unwrap(),
            SensorKind::Temperature
        );
        assert_eq!(
            "HUMIDITY".parse::<SensorKind>().unwrap(),
            SensorKind::Humidity
        );
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!(matches!(
            "temperature".parse::<SensorKind>(),
            Err(Error::UnknownSensorType(s)) if s == "temperature"
        ));
        assert!("Humidity".parse::<SensorKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in SensorKind::ALL {
            assert_eq!(kind.to_string().parse::<SensorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_custom_kind() {
        let kind = SensorKind::Custom {
            type_id: "PRESSURE",
            field: "pressure",
        };
        assert_eq!(kind.type_id(), "PRESSURE");
        assert_eq!(kind.field(), "pressure");
        assert_eq!(kind.to_string(), "PRESSURE");
        assert!("PRESSURE".parse::<SensorKind>().is_err());
    }
}
