//! Weather sensors.
//!
//! A sensor watches one field of the raw input. `sensate` copies that field
//! into the sensor, `data` hands it back as a one-entry partial record.

mod factory;
mod humidity;
mod kind;
mod temperature;

pub use factory::{SensorConstructor, SensorFactory};
pub use humidity::HumiditySensor;
pub use kind::SensorKind;
pub use temperature::TemperatureSensor;

use crate::record::{PartialRecord, RawInput};
use crate::{Error, Result};

/// Trait for all sensors.
pub trait Sensor: Send + Sync {
    /// Returns the variant tag.
    fn kind(&self) -> SensorKind;

    /// Reads this sensor's field from `input`.
    ///
    /// Fails with [`Error::MissingField`] when the field is absent, leaving
    /// the stored value untouched.
    fn sensate(&mut self, input: &RawInput) -> Result<()>;

    /// Returns the current value keyed by field name.
    ///
    /// A sensor that has never sensed reports `0.0`.
    fn data(&self) -> PartialRecord;
}

/// Looks up the field `kind` reads in `input`.
pub(crate) fn read_field(kind: SensorKind, input: &RawInput) -> Result<f64> {
    let field = kind.field();
    input
        .get(field)
        .copied()
        .ok_or(Error::MissingField { kind, field })
}

/// Builds a partial record holding a single field.
pub(crate) fn single_field(field: &str, value: f64) -> PartialRecord {
    PartialRecord::from([(field.to_string(), value)])
}
