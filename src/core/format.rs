// CreatorScope - core/format.rs
//
// Compact human-readable labels for counts, prices and range bounds.

/// Label for an open upper bound (the full range's maximum).
const UNBOUNDED_LABEL: &str = "Any";

/// Currency symbol used by range labels.
const CURRENCY_SYMBOL: &str = "₹";

fn is_unbounded(value: f64) -> bool {
    !value.is_finite() || value >= f64::MAX
}

/// One decimal place, with a trailing ".0" dropped ("1.0" -> "1").
fn one_decimal(value: f64) -> String {
    let s = format!("{value:.1}");
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

/// Compact count: 1_260_000 -> "1.3M", 15_300 -> "15.3K", 999 -> "999".
pub fn format_number(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    if value >= 1_000_000.0 {
        format!("{}M", one_decimal(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", one_decimal(value / 1_000.0))
    } else {
        format!("{value:.0}")
    }
}

/// Price range bound: 10_000 -> "₹10K", 500 -> "₹500".
pub fn format_price_bound(price: f64) -> String {
    if is_unbounded(price) {
        UNBOUNDED_LABEL.to_string()
    } else if price >= 1_000.0 {
        format!("{CURRENCY_SYMBOL}{:.0}K", price / 1_000.0)
    } else {
        format!("{CURRENCY_SYMBOL}{price:.0}")
    }
}

/// Followers range bound, given in thousands: 1_000 -> "1M", 50 -> "50K".
pub fn format_followers_bound(thousands: f64) -> String {
    if is_unbounded(thousands) {
        UNBOUNDED_LABEL.to_string()
    } else if thousands >= 1_000.0 {
        format!("{:.0}M", thousands / 1_000.0)
    } else {
        format!("{thousands:.0}K")
    }
}
