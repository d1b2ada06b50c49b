use serde::{Deserialize, Serialize};

/// Horizontal label thinning strategy.
///
/// Two product behaviors exist side by side and stay selectable; hosts pick
/// one, they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelStrategy {
    /// Alternate labels keyed on the charted month's length: 31- and 29-day
    /// months keep odd 1-based positions, 30- and 28-day months keep even
    /// ones. Any other calendar length (including 0, i.e. non-calendar
    /// data) shows every label.
    #[default]
    CalendarParity,
    /// Keep 1-based positions 1, 4, 7, ... regardless of calendar length.
    EveryThird,
}

/// Decides whether the label at `index` (0-based) is rendered.
#[must_use]
pub fn is_label_visible(index: usize, calendar_length: u32, strategy: LabelStrategy) -> bool {
    let position = index + 1;
    match strategy {
        LabelStrategy::CalendarParity => match calendar_length {
            31 | 29 => position % 2 != 0,
            30 | 28 => position % 2 == 0,
            _ => true,
        },
        LabelStrategy::EveryThird => position % 3 == 1,
    }
}

/// Visibility of a padding slot past the end of real data.
///
/// Filler slots restart at index 0 over the padding range and apply the
/// same predicate, so the thinning pattern continues past the series.
#[must_use]
pub fn is_filler_label_visible(
    filler_index: usize,
    calendar_length: u32,
    strategy: LabelStrategy,
) -> bool {
    is_label_visible(filler_index, calendar_length, strategy)
}
