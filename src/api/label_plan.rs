use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LabelStrategy, SeriesPoint, is_filler_label_visible, is_label_visible};

/// One horizontal-axis slot: a real data label or a filler spacer padding
/// the row out to a full calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSlot {
    pub index: usize,
    pub text: String,
    pub visible: bool,
    pub filler: bool,
}

/// A month of slots fits inline.
pub type LabelRow = SmallVec<[LabelSlot; 31]>;

/// Plans the horizontal label row.
///
/// Real slots carry the 1-based position as text; a point with an empty
/// category keeps its slot but hides the label. When the series is shorter
/// than `calendar_length`, empty filler slots continue the row, indexed
/// from 0 over the padding range so the thinning pattern restarts there.
#[must_use]
pub fn build_label_row(
    points: &[SeriesPoint],
    calendar_length: u32,
    strategy: LabelStrategy,
) -> LabelRow {
    let mut row = LabelRow::new();

    for (index, point) in points.iter().enumerate() {
        let visible =
            !point.category.is_empty() && is_label_visible(index, calendar_length, strategy);
        row.push(LabelSlot {
            index,
            text: (index + 1).to_string(),
            visible,
            filler: false,
        });
    }

    let padding = (calendar_length as usize).saturating_sub(points.len());
    for filler_index in 0..padding {
        row.push(LabelSlot {
            index: points.len() + filler_index,
            text: String::new(),
            visible: is_filler_label_visible(filler_index, calendar_length, strategy),
            filler: true,
        });
    }

    row
}
