//! Sensor construction by type identifier.

use super::{HumiditySensor, Sensor, SensorKind, TemperatureSensor};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Builds a fresh sensor.
pub type SensorConstructor = fn() -> Box<dyn Sensor>;

/// Maps type identifiers to sensor constructors.
///
/// Lookups are exact and case-sensitive. An unknown identifier is not an
/// error; [`SensorFactory::create`] returns `None` and the caller decides.
#[derive(Clone)]
pub struct SensorFactory {
    constructors: BTreeMap<String, SensorConstructor>,
}

impl SensorFactory {
    /// Creates a factory that knows every built-in [`SensorKind`].
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register(SensorKind::Temperature.type_id(), || {
            Box::new(TemperatureSensor::new()) as Box<dyn Sensor>
        });
        factory.register(SensorKind::Humidity.type_id(), || {
            Box::new(HumiditySensor::new()) as Box<dyn Sensor>
        });
        factory
    }

    /// Creates a factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registers `constructor` under `type_id`, returning the one it replaced.
    pub fn register(
        &mut self,
        type_id: impl Into<String>,
        constructor: SensorConstructor,
    ) -> Option<SensorConstructor> {
        self.constructors.insert(type_id.into(), constructor)
    }

    /// Creates a sensor for `type_id`, or `None` if it is not registered.
    pub fn create(&self, type_id: &str) -> Option<Box<dyn Sensor>> {
        self.constructors.get(type_id).map(|constructor| constructor())
    }

    /// Like [`create`](Self::create), but reports an unknown identifier as
    /// [`Error::UnknownSensorType`].
    pub fn try_create(&self, type_id: &str) -> Result<Box<dyn Sensor>> {
        self.create(type_id)
            .ok_or_else(|| Error::UnknownSensorType(type_id.to_string()))
    }

    /// Returns true if `type_id` is registered.
    pub fn knows(&self, type_id: &str) -> bool {
        self.constructors.contains_key(type_id)
    }

    /// Returns registered identifiers in sorted order.
    pub fn type_ids(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }
}

impl Default for SensorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SensorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorFactory")
            .field("type_ids", &self.type_ids())
            .finish()
    }
}
