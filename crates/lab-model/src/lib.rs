pub mod demographics;
pub mod enums;
pub mod error;
pub mod measurement;
pub mod metric;

pub use demographics::Demographics;
pub use enums::{Flag, MetricCategory, MetricKind, Race, Sex};
pub use error::{ModelError, Result};
pub use measurement::{Measurement, MeasurementValue};
pub use metric::CompositeMetric;
