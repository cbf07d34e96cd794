//! Weather Station Core Library
//!
//! Collects readings from pluggable sensors, merges them into a single
//! observation and hands it to a logger, with an optional notifier for
//! recipients.
//!
//! ```no_run
//! use std::sync::Arc;
//! use weather_station_core::{Aggregator, FileLogger, RawInput, SensorFactory};
//!
//! let factory = SensorFactory::new();
//! let mut station = Aggregator::new(Arc::new(FileLogger::new("weather.txt")));
//! for type_id in ["TEMPERATURE", "HUMIDITY"] {
//!     if let Some(sensor) = factory.create(type_id) {
//!         station.add_sensor(sensor);
//!     }
//! }
//!
//! let input = RawInput::from([
//!     ("temperature".to_string(), 50.0),
//!     ("humidity".to_string(), 45.5),
//! ]);
//! station.run_cycle(&input)?;
//! # Ok::<(), weather_station_core::Error>(())
//! ```

pub mod aggregator;
pub mod error;
pub mod logger;
pub mod notifier;
pub mod record;
pub mod sensors;

pub use aggregator::Aggregator;
pub use error::{Error, Result, SensorFault};
pub use logger::{FileLogger, ObservationLogger};
pub use notifier::{ConsoleNotifier, Notifier};
pub use record::{Observation, PartialRecord, RawInput};
pub use sensors::{HumiditySensor, Sensor, SensorFactory, SensorKind, TemperatureSensor};

/// Default observation log file name.
pub const DEFAULT_LOG_FILE: &str = "weather.txt";
