use crate::error::ChartError;
use serde::Serialize;

pub const DEFAULT_MAX_TICKS: u32 = 10;

/// Axis bounds widened to "nice" round values, with a matching tick spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisScale {
    pub lower: f64,
    pub upper: f64,
    pub tick_spacing: f64,
}

impl AxisScale {
    /// Return an AxisScale covering `lower..=upper` with at most roughly
    /// `max_ticks` ticks.
    pub fn new(lower: f64, upper: f64, max_ticks: u32) -> Result<Self, ChartError> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(ChartError::InvalidBounds { lower, upper });
        }
        if max_ticks < 2 {
            return Err(ChartError::TooFewTicks(max_ticks));
        }

        // A single value has no range to divide. Pad relative to its
        // magnitude, a fixed pad is lost to rounding past ~1e16.
        let (lower, upper) = if lower == upper {
            let pad = (lower.abs() * 1e-9).max(1.0);
            (lower - pad, upper + pad)
        } else {
            (lower, upper)
        };

        let range = nice_number(upper - lower, false);
        let tick_spacing = nice_number(range / f64::from(max_ticks - 1), true);
        let scale = AxisScale {
            lower: (lower / tick_spacing).floor() * tick_spacing,
            upper: (upper / tick_spacing).ceil() * tick_spacing,
            tick_spacing,
        };

        // Ranges that overflow or underflow f64 have no usable spacing.
        if !(tick_spacing.is_finite() && tick_spacing > 0.0)
            || !scale.lower.is_finite()
            || !scale.upper.is_finite()
        {
            return Err(ChartError::InvalidBounds { lower, upper });
        }

        Ok(scale)
    }

    pub fn from_bounds((lower, upper): (f64, f64)) -> Result<Self, ChartError> {
        Self::new(lower, upper, DEFAULT_MAX_TICKS)
    }
}

/// Rounds `range` to 1, 2, 5 or 10 times a power of ten.
fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = range / magnitude;

    let nice_fraction = if round {
        match fraction {
            f if f < 1.5 => 1.0,
            f if f < 3.0 => 2.0,
            f if f < 7.0 => 5.0,
            _ => 10.0,
        }
    } else {
        match fraction {
            f if f <= 1.0 => 1.0,
            f if f <= 2.0 => 2.0,
            f if f <= 5.0 => 5.0,
            _ => 10.0,
        }
    };

    nice_fraction * magnitude
}
