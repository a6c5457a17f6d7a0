// CreatorScope - core/price.rs
//
// Price extraction from free-text pricing fields.
//
// Pricing is entered by hand ("₹2,000", "$1.5k", "From $100", "$100-$500",
// "Contact for pricing"), so the extractor is a heuristic. Its behaviour is
// pinned by the table test at the bottom of this file.

use crate::util::constants::{PRICE_K_MULTIPLIER, PRICE_K_THRESHOLD};
use regex::Regex;
use std::sync::OnceLock;

/// Currency-amount token: optional `$` or `₹`, digits with optional
/// comma-separated groups, optional decimal fraction.
fn amount_regex() -> &'static Regex {
    static AMOUNT: OnceLock<Regex> = OnceLock::new();
    AMOUNT.get_or_init(|| {
        Regex::new(r"[$₹]?\d+(?:,\d+)*(?:\.\d+)?").expect("price: invalid amount regex")
    })
}

/// Extract the lowest price asserted by a pricing string.
///
/// Returns `None` ("no price asserted") for absent text or text without any
/// amount. Callers filtering by price must let `None` through; it is the
/// absence of evidence, not a price of zero.
///
/// Amounts too long to represent as a finite number are ignored, so a run of
/// digits that overflows reads as "no price asserted".
///
/// When the text contains a `k` anywhere, every amount below 100 is read as
/// thousands. The check is made once per string, not per token.
pub fn extract_min_price(text: Option<&str>) -> Option<f64> {
    let text = text?;
    let thousands_shorthand = text.contains(['k', 'K']);

    amount_regex()
        .find_iter(text)
        .filter_map(|m| {
            let digits: String = m
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            digits.parse::<f64>().ok()
        })
        .filter(|amount| amount.is_finite())
        .map(|amount| {
            if thousands_shorthand && amount < PRICE_K_THRESHOLD {
                amount * PRICE_K_MULTIPLIER
            } else {
                amount
            }
        })
        .reduce(f64::min)
}

/// Price used for ordering. Unpriced creators sort as free.
pub fn price_for_sort(text: Option<&str>) -> f64 {
    extract_min_price(text).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        let overflowing = "1".repeat(400);
        let cases: &[(Option<&str>, Option<f64>)] = &[
            (Some("$1.5k"), Some(1_500.0)),
            (Some("₹2,000"), Some(2_000.0)),
            (Some("From $100"), Some(100.0)),
            (Some("$100-$500"), Some(100.0)),
            (Some("$500 – $100"), Some(100.0)),
            (Some("₹1,00,000 per reel"), Some(100_000.0)),
            (Some("2K - 5K"), Some(2_000.0)),
            (Some("$250"), Some(250.0)),
            (Some("99.99"), Some(99.99)),
            (Some("Contact for pricing"), None),
            (Some(overflowing.as_str()), None),
            (Some(""), None),
            (Some("$"), None),
            (None, None),
        ];
        for (input, expected) in cases {
            assert_eq!(
                extract_min_price(*input),
                *expected,
                "extract_min_price({input:?})"
            );
        }
    }

    #[test]
    fn test_k_heuristic_is_per_string() {
        // The "k" in "1.5k" also scales the other small amount.
        assert_eq!(extract_min_price(Some("$2 or $1.5k")), Some(1_500.0));
        // Large amounts are not scaled even when a "k" is present.
        assert_eq!(extract_min_price(Some("$150 bulk")), Some(150.0));
    }

    #[test]
    fn test_malformed_input_never_panics() {
        for input in ["$$$", ",,,", "1,", ".5", "₹", "k", "1.2.3"] {
            let _ = extract_min_price(Some(input));
        }
    }

    #[test]
    fn test_price_for_sort_maps_sentinel_to_zero() {
        assert_eq!(price_for_sort(None), 0.0);
        assert_eq!(price_for_sort(Some("Negotiable")), 0.0);
        assert_eq!(price_for_sort(Some("$40")), 40.0);
    }
}
