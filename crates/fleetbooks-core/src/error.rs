//! # Error Types
//!
//! Domain-specific error types for fleetbooks-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fleetbooks-core errors (this file)                                    │
//! │  ├── InvalidInput  - Malformed/non-numeric text from a form field     │
//! │  └── DomainError   - Numeric but semantically out of range            │
//! │                                                                         │
//! │  Both are raised synchronously at the point of computation.            │
//! │  Neither is retryable (same input → same error) and neither is         │
//! │  fatal: the caller surfaces a validation message and lets the user     │
//! │  correct the field. A computation either fully succeeds or returns     │
//! │  no result - partial/garbage figures never escape.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Invalid Input
// =============================================================================

/// Malformed user input caught before any arithmetic runs.
///
/// The dashboard's text fields hand us strings; every string goes through
/// the [`crate::validation`] parsers, which produce these errors instead of
/// letting a NaN-equivalent propagate into a displayed total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field text is not a number at all.
    #[error("{field} is not a number: '{value}'")]
    NotNumeric { field: &'static str, value: String },

    /// More decimal places than the unit supports (cents → 2).
    #[error("{field} has more than {max_places} decimal places: '{value}'")]
    TooPrecise {
        field: &'static str,
        value: String,
        max_places: u32,
    },

    /// Numeric text too large to represent in the fixed-point unit.
    #[error("{field} is out of representable range: '{value}'")]
    OutOfRange { field: &'static str, value: String },
}

// =============================================================================
// Domain Error
// =============================================================================

/// Numerically valid input that violates a business rule.
///
/// ## When These Occur
/// - A negative quantity or unit price reaches a line calculation
/// - A tax rate above 100% reaches a line calculation
/// - A financing term of zero months
/// - A down payment exceeding the vehicle price (negative loan amount)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Value must not be negative (quantity, unit price, down payment).
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    /// Value must be strictly positive (vehicle price, term length).
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },

    /// Tax rate above 100%.
    #[error("tax rate {bps} bps exceeds the 10000 bps (100%) cap")]
    TaxRateTooHigh { bps: u32 },

    /// Line quantity above the per-line cap.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Document has exceeded the maximum allowed line count.
    #[error("document cannot have more than {max} lines")]
    TooManyLines { max: usize },

    /// Financing term beyond the supported maximum.
    #[error("term of {requested} months exceeds maximum allowed ({max})")]
    TermTooLong { requested: u32, max: u32 },

    /// Down payment larger than the vehicle price → negative loan amount.
    #[error("down payment {down_payment} exceeds price {price}")]
    DownPaymentExceedsPrice { price: i64, down_payment: i64 },

    /// Referenced line id is not present in the draft.
    #[error("line {line_id} not found in document")]
    LineNotFound { line_id: String },

    /// Intermediate figure overflowed the representable range.
    #[error("{context} overflowed the representable money range")]
    AmountOverflow { context: &'static str },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for the calculators.
///
/// Exactly two kinds exist, and callers are expected to branch on them:
/// [`InvalidInput`] means "fix the text in the field", [`DomainError`]
/// means "the number itself breaks a business rule".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed value supplied (non-numeric, too precise, unrepresentable).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// Semantically out-of-range value supplied.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::DownPaymentExceedsPrice {
            price: 16_500_000,
            down_payment: 17_000_000,
        };
        assert_eq!(
            err.to_string(),
            "down payment 17000000 exceeds price 16500000"
        );

        let err = InvalidInput::NotNumeric {
            field: "unit price",
            value: "12..50".to_string(),
        };
        assert_eq!(err.to_string(), "unit price is not a number: '12..50'");
    }

    #[test]
    fn test_invalid_input_converts_to_core_error() {
        let parse_err = InvalidInput::Required { field: "quantity" };
        let core_err: CoreError = parse_err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_domain_error_converts_to_core_error() {
        let domain_err = DomainError::NotPositive {
            field: "term_months",
            value: 0,
        };
        let core_err: CoreError = domain_err.into();
        assert!(matches!(core_err, CoreError::Domain(_)));
    }
}
