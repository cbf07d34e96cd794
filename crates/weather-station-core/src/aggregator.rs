//! Sensor aggregation.
//!
//! The [`Aggregator`] owns the registered sensors and a running
//! [`Observation`]. A cycle broadcasts one raw input to every sensor, then
//! patch-merges each sensor's partial record into the observation in
//! registration order and hands the result to the logger.
//!
//! The observation is never reset between cycles. A field reported once
//! stays in the observation even after the sensor that produced it has been
//! removed or has started failing; call [`Aggregator::reset_observation`] to
//! start over.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::SensorFault;
use crate::logger::ObservationLogger;
use crate::notifier::Notifier;
use crate::record::{Observation, RawInput};
use crate::sensors::Sensor;
use crate::{Error, Result};

/// Drives sensors and publishes their merged observation.
pub struct Aggregator {
    /// Sensors in registration order
    sensors: Vec<Box<dyn Sensor>>,

    /// Cumulative merged state
    observation: Observation,

    logger: Arc<dyn ObservationLogger>,

    /// Optional, never used implicitly by a cycle
    notifier: Option<Arc<dyn Notifier>>,
}

impl Aggregator {
    /// Creates an aggregator publishing to `logger`.
    pub fn new(logger: Arc<dyn ObservationLogger>) -> Self {
        Self {
            sensors: Vec::new(),
            observation: Observation::new(),
            logger,
            notifier: None,
        }
    }

    /// Attaches a notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Registers a sensor. Duplicates of the same kind are kept, each with
    /// its own state.
    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        debug!(
            "Registered sensor #{}: {}",
            self.sensors.len(),
            sensor.kind()
        );
        self.sensors.push(sensor);
    }

    /// Removes the sensor at `index` in registration order.
    ///
    /// The observation keeps whatever the sensor last contributed.
    pub fn remove_sensor(&mut self, index: usize) -> Option<Box<dyn Sensor>> {
        if index < self.sensors.len() {
            let sensor = self.sensors.remove(index);
            debug!("Removed sensor #{}: {}", index, sensor.kind());
            Some(sensor)
        } else {
            None
        }
    }

    /// Returns the registered sensors.
    pub fn sensors(&self) -> &[Box<dyn Sensor>] {
        &self.sensors
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Returns the running observation.
    pub fn observation(&self) -> &Observation {
        &self.observation
    }

    /// Drops every field from the running observation.
    pub fn reset_observation(&mut self) {
        self.observation.clear();
    }

    /// Feeds `input` to every sensor in registration order.
    ///
    /// A failing sensor does not stop the others. All failures are returned
    /// together as [`Error::SensorFaults`].
    pub fn sensate(&mut self, input: &RawInput) -> Result<()> {
        let mut faults = Vec::new();

        for (index, sensor) in self.sensors.iter_mut().enumerate() {
            if let Err(error) = sensor.sensate(input) {
                warn!("Sensor #{} ({}) failed: {}", index, sensor.kind(), error);
                faults.push(SensorFault {
                    index,
                    kind: sensor.kind(),
                    error,
                });
            }
        }

        if faults.is_empty() {
            Ok(())
        } else {
            Err(Error::SensorFaults(faults))
        }
    }

    /// Merges every sensor's data into the observation and logs it.
    ///
    /// The observation is updated even when the logger fails.
    pub fn collect_and_log(&mut self) -> Result<()> {
        for sensor in &self.sensors {
            self.observation.merge_patch(&sensor.data());
        }
        debug!(
            "Merged {} sensor(s) into {} field(s)",
            self.sensors.len(),
            self.observation.len()
        );

        self.logger.log(&self.observation)
    }

    /// Runs [`sensate`](Self::sensate) then
    /// [`collect_and_log`](Self::collect_and_log).
    ///
    /// Sensor faults do not prevent logging. If both steps fail the sensor
    /// faults are returned and the log failure is only traced.
    pub fn run_cycle(&mut self, input: &RawInput) -> Result<()> {
        let sensed = self.sensate(input);
        let logged = self.collect_and_log();

        match (sensed, logged) {
            (Err(faults), Err(log_error)) => {
                warn!("Failed to log observation: {}", log_error);
                Err(faults)
            }
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Ok(()), Ok(())) => Ok(()),
        }
    }

    /// Sends `message` through the notifier, if one is attached.
    pub fn notify(&self, message: &str) -> Result<()> {
        match &self.notifier {
            Some(notifier) => notifier.notify_all(message),
            None => {
                debug!("No notifier attached, message not sent");
                Ok(())
            }
        }
    }
}
