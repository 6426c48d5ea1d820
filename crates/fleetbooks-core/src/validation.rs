//! # Validation Module
//!
//! String-to-number parsing for values captured from the dashboard's text
//! fields, producing typed [`InvalidInput`] errors instead of letting a
//! NaN-equivalent propagate into a displayed total.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard (TypeScript)                                       │
//! │  ├── Basic format checks (empty, keystroke filtering)                  │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Integer-exact parsing (no float round trip)                       │
//! │  └── Field-tagged InvalidInput on anything malformed                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculators (lineitem / financing)                           │
//! │  └── DomainError on numerically-valid but out-of-range values          │
//! │                                                                         │
//! │  Defense in depth: no arithmetic ever runs on unchecked text           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fleetbooks_core::validation::{parse_money, parse_quantity};
//!
//! let price = parse_money("unit price", "$1,250.00").unwrap();
//! assert_eq!(price.cents(), 125_000);
//!
//! let qty = parse_quantity("quantity", "12").unwrap();
//! assert_eq!(qty, 12);
//! ```

use crate::error::InvalidInput;
use crate::money::Money;

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, InvalidInput>;

// =============================================================================
// Internal Helpers
// =============================================================================

/// Splits a decimal string into (negative, whole, fraction) after stripping
/// the currency/grouping characters the dashboard's fields produce.
fn split_decimal<'a>(
    field: &'static str,
    raw: &'a str,
    cleaned: &'a str,
) -> ParseResult<(bool, &'a str, &'a str)> {
    let (negative, rest) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned),
    };

    let (whole, frac) = match rest.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (rest, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(not_numeric(field, raw));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(not_numeric(field, raw));
    }

    Ok((negative, whole, frac))
}

fn not_numeric(field: &'static str, value: &str) -> InvalidInput {
    InvalidInput::NotNumeric {
        field,
        value: value.to_string(),
    }
}

fn out_of_range(field: &'static str, value: &str) -> InvalidInput {
    InvalidInput::OutOfRange {
        field,
        value: value.to_string(),
    }
}

/// Parses a decimal string to an integer count of 1/100 units (cents for
/// money, bps-per-hundredth for percentages). Integer-exact: no float ever
/// touches the digits.
fn parse_hundredths(field: &'static str, raw: &str, cleaned: &str) -> ParseResult<i64> {
    let (negative, whole, frac) = split_decimal(field, raw, cleaned)?;

    if frac.len() > 2 {
        return Err(InvalidInput::TooPrecise {
            field,
            value: raw.to_string(),
            max_places: 2,
        });
    }

    let whole_units: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| out_of_range(field, raw))?
    };
    // Pad "5" → 50, "" → 0 so ".5" and "0.50" agree
    let hundredths: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().unwrap_or(0) * 10,
        _ => frac.parse::<i64>().unwrap_or(0),
    };

    let magnitude = whole_units
        .checked_mul(100)
        .and_then(|c| c.checked_add(hundredths))
        .ok_or_else(|| out_of_range(field, raw))?;

    Ok(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Public Parsers
// =============================================================================

/// Parses a money amount from field text.
///
/// ## Accepted Formats
/// - `"1250"`, `"1250.5"`, `"1250.50"` (at most two decimal places)
/// - Leading `$` and comma grouping: `"$1,250.00"`
/// - Leading `-` for credits/adjustments: `"-45.00"`
///
/// Range rules (non-negative price, etc.) are the calculators' job; this
/// function only guarantees the text is an exact number of cents.
///
/// ## Example
/// ```rust
/// use fleetbooks_core::validation::parse_money;
///
/// assert_eq!(parse_money("price", "165000").unwrap().cents(), 16_500_000);
/// assert_eq!(parse_money("price", "$1,234.56").unwrap().cents(), 123_456);
/// assert!(parse_money("price", "12..50").is_err());
/// assert!(parse_money("price", "").is_err());
/// ```
pub fn parse_money(field: &'static str, text: &str) -> ParseResult<Money> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(InvalidInput::Required { field });
    }

    // Strip the decorations a currency field produces
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '$').collect();
    if cleaned.is_empty() {
        return Err(not_numeric(field, raw));
    }

    parse_hundredths(field, raw, &cleaned).map(Money::from_cents)
}

/// Parses a whole-number quantity from field text.
///
/// ## Example
/// ```rust
/// use fleetbooks_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("quantity", " 40 ").unwrap(), 40);
/// assert!(parse_quantity("quantity", "2.5").is_err());  // whole units only
/// assert!(parse_quantity("quantity", "abc").is_err());
/// ```
pub fn parse_quantity(field: &'static str, text: &str) -> ParseResult<i64> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(InvalidInput::Required { field });
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(not_numeric(field, raw));
    }

    let magnitude: i64 = digits.parse().map_err(|_| out_of_range(field, raw))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parses a percentage (up to two decimal places, optional trailing `%`)
/// into basis points.
///
/// Negative percentages have no bps representation here and are rejected as
/// out of range; whether a given magnitude is allowed (tax rates cap at
/// 100%) is the calculators' job.
///
/// ## Example
/// ```rust
/// use fleetbooks_core::validation::parse_rate_bps;
///
/// assert_eq!(parse_rate_bps("tax rate", "8.25").unwrap(), 825);
/// assert_eq!(parse_rate_bps("apr", "7.99%").unwrap(), 799);
/// assert_eq!(parse_rate_bps("tax rate", "0").unwrap(), 0);
/// assert!(parse_rate_bps("apr", "7.999").is_err()); // sub-bps precision
/// assert!(parse_rate_bps("apr", "-1").is_err());
/// ```
pub fn parse_rate_bps(field: &'static str, text: &str) -> ParseResult<u32> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(InvalidInput::Required { field });
    }

    let cleaned = raw.strip_suffix('%').unwrap_or(raw).trim_end();
    if cleaned.is_empty() {
        return Err(not_numeric(field, raw));
    }

    let bps = parse_hundredths(field, raw, cleaned)?;
    u32::try_from(bps).map_err(|_| out_of_range(field, raw))
}

/// Parses a term length in months from field text.
///
/// Zero parses successfully; rejecting a zero-month term is a business rule
/// and belongs to [`crate::financing::FinancingTerms::validate`].
///
/// ## Example
/// ```rust
/// use fleetbooks_core::validation::parse_term_months;
///
/// assert_eq!(parse_term_months("term", "60").unwrap(), 60);
/// assert!(parse_term_months("term", "-60").is_err());
/// assert!(parse_term_months("term", "5 years").is_err());
/// ```
pub fn parse_term_months(field: &'static str, text: &str) -> ParseResult<u32> {
    let raw = text.trim();
    if raw.is_empty() {
        return Err(InvalidInput::Required { field });
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(not_numeric(field, raw));
    }
    raw.parse().map_err(|_| out_of_range(field, raw))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money_plain_formats() {
        assert_eq!(parse_money("price", "0").unwrap().cents(), 0);
        assert_eq!(parse_money("price", "10").unwrap().cents(), 1000);
        assert_eq!(parse_money("price", "10.9").unwrap().cents(), 1090);
        assert_eq!(parse_money("price", "10.99").unwrap().cents(), 1099);
        assert_eq!(parse_money("price", ".50").unwrap().cents(), 50);
        assert_eq!(parse_money("price", "10.").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_money_currency_decorations() {
        assert_eq!(parse_money("price", "$165,000").unwrap().cents(), 16_500_000);
        assert_eq!(parse_money("price", "$1,234.56").unwrap().cents(), 123_456);
        assert_eq!(parse_money("price", " 1,000.00 ").unwrap().cents(), 100_000);
    }

    #[test]
    fn test_parse_money_negative() {
        assert_eq!(parse_money("adjustment", "-45.00").unwrap().cents(), -4500);
        assert_eq!(parse_money("adjustment", "-$5.50").unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        for bad in ["abc", "12..50", "1.2.3", "12a", "--5", "$", "1,2oo"] {
            let err = parse_money("price", bad).unwrap_err();
            assert!(
                matches!(err, InvalidInput::NotNumeric { field: "price", .. }),
                "expected NotNumeric for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_money_rejects_empty() {
        assert_eq!(
            parse_money("price", "   ").unwrap_err(),
            InvalidInput::Required { field: "price" }
        );
    }

    #[test]
    fn test_parse_money_rejects_sub_cent_precision() {
        let err = parse_money("price", "10.999").unwrap_err();
        assert!(matches!(err, InvalidInput::TooPrecise { max_places: 2, .. }));
    }

    #[test]
    fn test_parse_money_rejects_unrepresentable() {
        // Way past i64 cents
        let err = parse_money("price", "99999999999999999999").unwrap_err();
        assert!(matches!(err, InvalidInput::OutOfRange { .. }));
    }

    #[test]
    fn test_parse_money_never_drifts() {
        // 0.1 + 0.2 territory: text parses to exact cents, not a float
        assert_eq!(parse_money("a", "0.10").unwrap().cents(), 10);
        assert_eq!(parse_money("a", "0.20").unwrap().cents(), 20);
        assert_eq!(
            (parse_money("a", "0.10").unwrap() + parse_money("a", "0.20").unwrap()).cents(),
            30
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("quantity", "1").unwrap(), 1);
        assert_eq!(parse_quantity("quantity", " 9999 ").unwrap(), 9999);
        // Negative parses; the calculator rejects it as a DomainError
        assert_eq!(parse_quantity("quantity", "-3").unwrap(), -3);

        assert!(parse_quantity("quantity", "").is_err());
        assert!(parse_quantity("quantity", "2.5").is_err());
        assert!(parse_quantity("quantity", "abc").is_err());
        assert!(parse_quantity("quantity", "1e3").is_err());
    }

    #[test]
    fn test_parse_rate_bps() {
        assert_eq!(parse_rate_bps("tax rate", "0").unwrap(), 0);
        assert_eq!(parse_rate_bps("tax rate", "8.25").unwrap(), 825);
        assert_eq!(parse_rate_bps("tax rate", "8.25%").unwrap(), 825);
        assert_eq!(parse_rate_bps("tax rate", "100").unwrap(), 10_000);
        assert_eq!(parse_rate_bps("apr", "7.99").unwrap(), 799);
        assert_eq!(parse_rate_bps("apr", ".5").unwrap(), 50);
    }

    #[test]
    fn test_parse_rate_bps_rejects_bad_text() {
        assert!(matches!(
            parse_rate_bps("apr", "7.999").unwrap_err(),
            InvalidInput::TooPrecise { .. }
        ));
        assert!(matches!(
            parse_rate_bps("apr", "-1").unwrap_err(),
            InvalidInput::OutOfRange { .. }
        ));
        assert!(matches!(
            parse_rate_bps("apr", "seven").unwrap_err(),
            InvalidInput::NotNumeric { .. }
        ));
        assert!(matches!(
            parse_rate_bps("apr", "%").unwrap_err(),
            InvalidInput::NotNumeric { .. }
        ));
    }

    #[test]
    fn test_parse_term_months() {
        assert_eq!(parse_term_months("term", "36").unwrap(), 36);
        assert_eq!(parse_term_months("term", "72").unwrap(), 72);
        // Zero parses; FinancingTerms::validate rejects it
        assert_eq!(parse_term_months("term", "0").unwrap(), 0);

        assert!(parse_term_months("term", "-60").is_err());
        assert!(parse_term_months("term", "60.0").is_err());
        assert!(parse_term_months("term", "5 years").is_err());
        assert!(parse_term_months("term", "").is_err());
    }
}
