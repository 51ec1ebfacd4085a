use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid axis bounds {lower}..{upper}")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("an axis needs at least 2 ticks, got {0}")]
    TooFewTicks(u32),
}
