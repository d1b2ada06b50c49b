use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, or `None` when `month` is not in
/// `1..=12` or the date is out of chrono's supported range.
///
/// Hosts charting a month of data feed the result to the label policy as
/// the calendar length.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

/// Calendar length for the month containing `date`.
#[must_use]
pub fn days_in_month_of(date: NaiveDate) -> Option<u32> {
    days_in_month(date.year(), date.month())
}
