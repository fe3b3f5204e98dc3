//! Aggregates the "business logic" layer: scale, reader, records, errors.

pub mod config;
pub mod constants;
pub mod error;
pub mod reader;
pub mod reading;

// re-export frequently-used items for convenience
pub use config::{Scale, ScaleBuilder};
pub use constants::{DEGREES_PER_STAR, MAX_STARS, MAX_TEMP, MIN_TEMP};
pub use error::{ChartError, ConfigError};
pub use reader::{
    read_temperatures, read_temperatures_from_path, read_temperatures_from_source,
};
pub use reading::{Halt, ReadReport, Reading, Rejected};
