use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::AxisResult;

/// Rendered plot area in pixels. Only `height` participates in zero-line
/// placement; `width` is carried for host-side layout symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One (x, y) pair of the charted series.
///
/// Only `value` participates in bounds computation. `category` participates
/// in label planning: an empty category suppresses its axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub category: String,
    pub value: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }

    /// Ingests a money value without accumulating float error upstream.
    pub fn from_decimal(category: impl Into<String>, value: Decimal) -> AxisResult<Self> {
        Ok(Self {
            category: category.into(),
            value: decimal_to_f64(value, "series value")?,
        })
    }
}
