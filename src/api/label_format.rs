use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Formats a vertical-axis value as `"{value} {currency}"`.
///
/// Bounds values go through `Decimal` normalization so snapped grid
/// numbers print without float noise. An empty currency yields the bare
/// value.
#[must_use]
pub fn format_axis_value(value: f64, currency: &str) -> String {
    let text = Decimal::from_f64(value)
        .map(|d| d.normalize().to_string())
        .unwrap_or_else(|| value.to_string());

    if currency.is_empty() {
        text
    } else {
        format!("{text} {currency}")
    }
}
