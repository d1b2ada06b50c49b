use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Viewport, zero_pixel_offset};
use crate::error::{AxisError, AxisResult};

use super::{AxisEngine, AxisEngineConfig};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub config: AxisEngineConfig,
    pub points_len: usize,
    pub bounds: Bounds,
    pub zero_offset: Option<f64>,
    pub visible_labels: usize,
    pub filler_slots: usize,
}

impl AxisEngine {
    pub fn snapshot(&mut self, viewport: Viewport) -> AxisResult<AxisSnapshot> {
        let bounds = self.bounds()?;
        let zero_offset = zero_pixel_offset(bounds, viewport)?;
        let row = self.label_row();

        Ok(AxisSnapshot {
            config: self.config().clone(),
            points_len: self.points().len(),
            bounds,
            zero_offset,
            visible_labels: row.iter().filter(|slot| slot.visible).count(),
            filler_slots: row.iter().filter(|slot| slot.filler).count(),
        })
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression
    /// checks.
    pub fn snapshot_json_pretty(&mut self, viewport: Viewport) -> AxisResult<String> {
        let snapshot = self.snapshot(viewport)?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
