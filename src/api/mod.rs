mod data_controller;
mod engine_config;
mod label_format;
mod label_plan;
mod snapshot;

pub use engine_config::AxisEngineConfig;
pub use label_format::format_axis_value;
pub use label_plan::{LabelRow, LabelSlot, build_label_row};
pub use snapshot::AxisSnapshot;

use indexmap::IndexMap;

use crate::core::{Bounds, SeriesPoint, Viewport, zero_pixel_offset};
use crate::error::AxisResult;

/// Resolved bounds kept per structural input key before the oldest entry
/// is evicted.
const BOUNDS_CACHE_CAPACITY: usize = 8;

/// Host-facing axis state: owns the series and configuration, recomputes
/// bounds only when their structural inputs change, and plans label rows.
///
/// All math lives in [`crate::core`]; the engine is the memoization wrapper
/// the rendering host keys its redraws on.
#[derive(Debug, Clone)]
pub struct AxisEngine {
    config: AxisEngineConfig,
    points: Vec<SeriesPoint>,
    bounds_cache: IndexMap<u64, Bounds>,
}

impl AxisEngine {
    pub fn new(config: AxisEngineConfig) -> AxisResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            points: Vec::new(),
            bounds_cache: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &AxisEngineConfig {
        &self.config
    }

    /// Swaps the engine configuration. Cached bounds stay valid because the
    /// cache key covers the axis configuration.
    pub fn set_config(&mut self, config: AxisEngineConfig) -> AxisResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Zero-line offset from the top of the plot area, when the current
    /// bounds straddle zero.
    pub fn zero_offset(&mut self, viewport: Viewport) -> AxisResult<Option<f64>> {
        let bounds = self.bounds()?;
        zero_pixel_offset(bounds, viewport)
    }

    /// Plans the horizontal label row for the current series and config.
    #[must_use]
    pub fn label_row(&self) -> LabelRow {
        build_label_row(
            &self.points,
            self.config.calendar_length,
            self.config.label_strategy,
        )
    }
}
