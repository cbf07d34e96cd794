//! Relative humidity sensor.

use super::{read_field, single_field, Sensor, SensorKind};
use crate::record::{PartialRecord, RawInput};
use crate::Result;

/// Relative humidity sensor.
pub struct HumiditySensor {
    humidity: f64,
}

impl HumiditySensor {
    /// Field read from raw input.
    pub const FIELD: &'static str = "humidity";

    /// Creates a new humidity sensor.
    pub fn new() -> Self {
        Self { humidity: 0.0 }
    }

    /// Returns the last sensed relative humidity.
    pub fn humidity(&self) -> f64 {
        self.humidity
    }
}

impl Default for HumiditySensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for HumiditySensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Humidity
    }

    fn sensate(&mut self, input: &RawInput) -> Result<()> {
        self.humidity = read_field(SensorKind::Humidity, input)?;
        Ok(())
    }

    fn data(&self) -> PartialRecord {
        single_field(Self::FIELD, self.humidity)
    }
}
