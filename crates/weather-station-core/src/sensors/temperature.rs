//! Air temperature sensor.

use super::{read_field, single_field, Sensor, SensorKind};
use crate::record::{PartialRecord, RawInput};
use crate::Result;

/// Air temperature sensor.
pub struct TemperatureSensor {
    temperature: f64,
}

impl TemperatureSensor {
    /// Field read from raw input.
    pub const FIELD: &'static str = "temperature";

    /// Creates a new temperature sensor.
    pub fn new() -> Self {
        Self { temperature: 0.0 }
    }

    /// Returns the last sensed temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl Default for TemperatureSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for TemperatureSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn sensate(&mut self, input: &RawInput) -> Result<()> {
        self.temperature = read_field(SensorKind::Temperature, input)?;
        Ok(())
    }

    fn data(&self) -> PartialRecord {
        single_field(Self::FIELD, self.temperature)
    }
}
