pub mod bounds;
pub mod calendar;
pub mod label_policy;
pub mod primitives;
pub mod types;
pub mod zero_line;

pub use bounds::{AxisConfig, Bounds, compute_bounds, round_to_nice_grid};
pub use calendar::days_in_month;
pub use label_policy::{LabelStrategy, is_filler_label_visible, is_label_visible};
pub use types::{SeriesPoint, Viewport};
pub use zero_line::zero_pixel_offset;
