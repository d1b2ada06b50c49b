use serde::{Deserialize, Serialize};

use crate::core::SeriesPoint;
use crate::core::primitives::round_half_up;
use crate::error::{AxisError, AxisResult};

/// Vertical axis configuration, immutable per computation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Number of horizontal grid divisions the vertical range is split into.
    #[serde(default = "default_vertical_grid_step")]
    pub vertical_grid_step: u32,
    /// Skip grid snapping and return the rounded raw extremes as-is.
    #[serde(default)]
    pub tight_bounds: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            vertical_grid_step: default_vertical_grid_step(),
            tight_bounds: false,
        }
    }
}

fn default_vertical_grid_step() -> u32 {
    4
}

impl AxisConfig {
    #[must_use]
    pub fn new(vertical_grid_step: u32, tight_bounds: bool) -> Self {
        Self {
            vertical_grid_step,
            tight_bounds,
        }
    }

    #[must_use]
    pub fn tight() -> Self {
        Self {
            tight_bounds: true,
            ..Self::default()
        }
    }

    pub fn validate(self) -> AxisResult<Self> {
        if self.vertical_grid_step == 0 {
            return Err(AxisError::InvalidConfig(
                "vertical grid step must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Inclusive vertical range used to scale the Y axis.
///
/// Always recomputed from scratch; `min <= max` holds on every value
/// produced by [`compute_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when the range straddles zero strictly on both sides.
    #[must_use]
    pub fn straddles_zero(self) -> bool {
        self.min < 0.0 && self.max > 0.0
    }
}

/// Snaps a positive value up to a "nice" quarter-decade number.
///
/// Returns `0` for any non-positive input. Otherwise the value is expressed
/// in quarter steps of its decade (`n = ceil(value / 10^floor(log10) * 4)`),
/// `n` is raised to the next multiple of `grid_step`, and the result is
/// `n * scale / 4`. The same rule serves both axis-max snapping and
/// step-size snapping, and is monotonic non-decreasing in `value`.
#[must_use]
pub fn round_to_nice_grid(value: f64, grid_step: u32) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }

    let scale = 10f64.powf(value.log10().floor());
    let mut n = (value / scale * 4.0).ceil();

    let step = f64::from(grid_step.max(1));
    let rem = n % step;
    if rem != 0.0 {
        n += step - rem;
    }
    n * scale / 4.0
}

/// Computes the vertical axis range for a series.
///
/// The empty series degenerates to `{0, 0}`; non-finite values are
/// rejected. With `tight_bounds` the rounded raw extremes come back
/// unmodified. Otherwise the max is snapped to a nice grid number and,
/// when the data dips below zero, the negative and positive sides are
/// balanced across `vertical_grid_step` equal divisions so that zero lands
/// on a grid line.
pub fn compute_bounds(points: &[SeriesPoint], config: AxisConfig) -> AxisResult<Bounds> {
    let config = config.validate()?;

    let mut raw_min = f64::INFINITY;
    let mut raw_max = f64::NEG_INFINITY;
    for (index, point) in points.iter().enumerate() {
        if !point.value.is_finite() {
            return Err(AxisError::InvalidData(format!(
                "series value at index {index} must be finite"
            )));
        }
        raw_min = raw_min.min(point.value);
        raw_max = raw_max.max(point.value);
    }
    if points.is_empty() {
        raw_min = 0.0;
        raw_max = 0.0;
    }

    let min0 = round_half_up(raw_min);
    let max0 = round_half_up(raw_max);

    if config.tight_bounds {
        return Ok(Bounds::new(min0, max0));
    }

    let max = round_to_nice_grid(max0, config.vertical_grid_step);
    if min0 >= 0.0 {
        return Ok(Bounds::new(min0, max));
    }

    Ok(balance_around_zero(min0, max0, max, config))
}

/// Splits `vertical_grid_step` divisions between the negative and positive
/// sides in proportion to whichever extreme dominates in magnitude, keeping
/// zero anchored at a grid line.
fn balance_around_zero(min0: f64, max0: f64, max: f64, config: AxisConfig) -> Bounds {
    let divisions = f64::from(config.vertical_grid_step);

    let mut step = if config.vertical_grid_step > 3 {
        (max - min0).abs() / (divisions - 1.0)
    } else {
        ((max - min0).abs() / 2.0).max(min0.abs().max(max.abs()))
    };
    step = round_to_nice_grid(step, config.vertical_grid_step);
    if step <= 0.0 {
        // Degenerate span; nothing to balance.
        return Bounds::new(min0, max);
    }

    // Sign follows the raw bound; a zero bound stays on the positive side.
    let min_sign = if min0 < 0.0 { -1.0 } else { 1.0 };
    let max_sign = if max0 < 0.0 { -1.0 } else { 1.0 };

    let mut new_min;
    let mut new_max;
    if min0.abs() > max0.abs() {
        let m = (min0.abs() / step).ceil();
        new_min = step * m * min_sign;
        new_max = step * (divisions - m) * max_sign;
    } else {
        let m = (max0.abs() / step).ceil();
        new_max = step * m * max_sign;
        new_min = step * (divisions - m) * min_sign;
    }

    if min0 < new_min {
        new_min -= step;
        new_max -= step;
    }
    if max0 > new_max + step {
        new_min += step;
        new_max += step;
    }

    if new_max < new_min {
        std::mem::swap(&mut new_min, &mut new_max);
    }
    Bounds::new(new_min, new_max)
}
