mod chart;
mod error;
mod record;
mod scale;

pub use chart::{ChartData, ChartDataset, micros_to_seconds};
pub use error::ChartError;
pub use record::{Statistics, StatisticsRecord};
pub use scale::{AxisScale, DEFAULT_MAX_TICKS};
