use crate::core::{Bounds, Viewport};
use crate::error::{AxisError, AxisResult};

/// Vertical offset from the top of the plot area at which the value zero
/// falls, in pixels.
///
/// Defined only when the bounds straddle zero strictly; returns `None`
/// otherwise. The offset is `H * max / (max - min)`, so a range dominated
/// by positive values pushes the zero line toward the bottom.
pub fn zero_pixel_offset(bounds: Bounds, viewport: Viewport) -> AxisResult<Option<f64>> {
    if !viewport.is_valid() {
        return Err(AxisError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    if !bounds.straddles_zero() {
        return Ok(None);
    }

    let span = bounds.max - bounds.min;
    Ok(Some(f64::from(viewport.height) * bounds.max / span))
}
