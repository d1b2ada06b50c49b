use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::core::{AxisConfig, Bounds, SeriesPoint, compute_bounds};
use crate::error::AxisResult;

use super::{AxisEngine, BOUNDS_CACHE_CAPACITY};

impl AxisEngine {
    /// Replaces the charted series.
    pub fn set_data(&mut self, points: Vec<SeriesPoint>) {
        debug!(count = points.len(), "set series data");
        self.points = points;
    }

    /// Appends a single sample.
    pub fn append_point(&mut self, point: SeriesPoint) {
        self.points.push(point);
        trace!(count = self.points.len(), "append series point");
    }

    /// Vertical bounds for the current series and axis config.
    ///
    /// Memoized on a structural hash of the series values plus the axis
    /// config, so repeated render passes over unchanged inputs skip the
    /// recomputation entirely.
    pub fn bounds(&mut self) -> AxisResult<Bounds> {
        let key = bounds_cache_key(&self.points, self.config.axis);
        if let Some(bounds) = self.bounds_cache.get(&key) {
            trace!(key, "bounds cache hit");
            return Ok(*bounds);
        }

        let bounds = compute_bounds(&self.points, self.config.axis)?;
        debug!(key, min = bounds.min, max = bounds.max, "recomputed bounds");

        if self.bounds_cache.len() >= BOUNDS_CACHE_CAPACITY {
            self.bounds_cache.shift_remove_index(0);
        }
        self.bounds_cache.insert(key, bounds);
        Ok(bounds)
    }
}

fn bounds_cache_key(points: &[SeriesPoint], config: AxisConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    points.len().hash(&mut hasher);
    for point in points {
        OrderedFloat(point.value).hash(&mut hasher);
    }
    hasher.finish()
}
