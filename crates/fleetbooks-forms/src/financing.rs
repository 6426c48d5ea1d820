//! # Financing Calculator Form
//!
//! Caller-owned state for the purchasing screen's payment estimator.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Payment Estimator Lifecycle                               │
//! │                                                                         │
//! │  User opens calculator on a listed vehicle                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FinancingCalculator::new(price)      term defaults to 60 months       │
//! │       │                                                                 │
//! │       ▼  (each edit re-parses and re-quotes; no hidden state)          │
//! │  set_down_payment_text("10000") ──► quote()                            │
//! │  set_rate_text("7.99")          ──► quote()                            │
//! │  set_term_months(72)            ──► quote()                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Form closes → calculator dropped. Nothing is persisted here;          │
//! │  if an application is submitted, that lives in the external store.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use fleetbooks_core::financing::{compute_amortization, AmortizationResult, FinancingTerms};
use fleetbooks_core::validation::{parse_money, parse_rate_bps, parse_term_months};
use fleetbooks_core::{CoreResult, InterestRate, Money};

/// Default term preselected by the purchasing screen.
const DEFAULT_TERM_MONTHS: u32 = 60;

// =============================================================================
// Financing Calculator
// =============================================================================

/// The payment estimator form for one listed vehicle.
///
/// Wraps a [`FinancingTerms`] and re-quotes on demand. Text setters parse
/// through the validation layer, so malformed field input surfaces as a
/// typed `InvalidInput` instead of a garbage quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingCalculator {
    terms: FinancingTerms,
}

impl FinancingCalculator {
    /// Opens the estimator for a vehicle at the given list price.
    ///
    /// Starts at zero down, zero rate (the rate field is blank until the
    /// user types one), and the default 60-month term.
    pub fn new(price: Money) -> Self {
        FinancingCalculator {
            terms: FinancingTerms {
                price,
                down_payment: Money::zero(),
                annual_rate: InterestRate::zero(),
                term_months: DEFAULT_TERM_MONTHS,
            },
        }
    }

    /// The current terms, for rendering the form fields.
    #[inline]
    pub fn terms(&self) -> &FinancingTerms {
        &self.terms
    }

    // -------------------------------------------------------------------------
    // Typed setters (programmatic edits)
    // -------------------------------------------------------------------------

    /// Sets the vehicle price.
    pub fn set_price(&mut self, price: Money) {
        debug!(cents = price.cents(), "estimator price set");
        self.terms.price = price;
    }

    /// Sets the cash down amount.
    pub fn set_down_payment(&mut self, down_payment: Money) {
        debug!(cents = down_payment.cents(), "estimator down payment set");
        self.terms.down_payment = down_payment;
    }

    /// Sets the annual rate.
    pub fn set_annual_rate(&mut self, rate: InterestRate) {
        debug!(bps = rate.bps(), "estimator rate set");
        self.terms.annual_rate = rate;
    }

    /// Sets the term length in months.
    pub fn set_term_months(&mut self, term_months: u32) {
        debug!(term_months, "estimator term set");
        self.terms.term_months = term_months;
    }

    // -------------------------------------------------------------------------
    // Text setters (field edits)
    // -------------------------------------------------------------------------
    // Each parses first and only stores on success, so a half-typed value
    // leaves the last good terms in place.

    /// Parses and sets the price from field text (e.g. `"$165,000"`).
    pub fn set_price_text(&mut self, text: &str) -> CoreResult<()> {
        self.set_price(parse_money("price", text)?);
        Ok(())
    }

    /// Parses and sets the down payment from field text.
    pub fn set_down_payment_text(&mut self, text: &str) -> CoreResult<()> {
        self.set_down_payment(parse_money("down payment", text)?);
        Ok(())
    }

    /// Parses and sets the annual rate from field text (e.g. `"7.99"`).
    pub fn set_rate_text(&mut self, text: &str) -> CoreResult<()> {
        self.set_annual_rate(InterestRate::from_bps(parse_rate_bps("annual rate", text)?));
        Ok(())
    }

    /// Parses and sets the term from field text (e.g. `"60"`).
    pub fn set_term_text(&mut self, text: &str) -> CoreResult<()> {
        self.terms.term_months = parse_term_months("term", text)?;
        debug!(term_months = self.terms.term_months, "estimator term set");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Quote
    // -------------------------------------------------------------------------

    /// Quotes the current terms.
    ///
    /// Pure recomputation: calling this after every keystroke is the
    /// intended usage, and identical terms always quote identical cents.
    pub fn quote(&self) -> CoreResult<AmortizationResult> {
        compute_amortization(&self.terms)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fleetbooks_core::{CoreError, DomainError, InvalidInput};

    #[test]
    fn test_defaults_quote_straight_line() {
        // New estimator: zero rate, 60 months → price / 60
        let calc = FinancingCalculator::new(Money::from_cents(12_000_000));
        let quote = calc.quote().unwrap();
        assert_eq!(quote.monthly_payment.cents(), 200_000);
        assert_eq!(quote.total_interest, Money::zero());
    }

    #[test]
    fn test_field_edit_sequence() {
        let mut calc = FinancingCalculator::new(Money::from_cents(16_500_000));
        calc.set_down_payment_text("0").unwrap();
        calc.set_rate_text("7.99").unwrap();
        calc.set_term_text("60").unwrap();

        let quote = calc.quote().unwrap();
        assert_eq!(quote.monthly_payment.cents(), 334_482); // $3,344.82
        assert_eq!(quote.total_cost, quote.monthly_payment * 60);
    }

    #[test]
    fn test_requote_on_every_edit_is_deterministic() {
        let mut calc = FinancingCalculator::new(Money::from_cents(9_000_000));
        calc.set_rate_text("6.49").unwrap();
        let first = calc.quote().unwrap();
        let second = calc.quote().unwrap();
        assert_eq!(first, second);

        calc.set_term_months(72);
        assert_ne!(calc.quote().unwrap().monthly_payment, first.monthly_payment);
    }

    #[test]
    fn test_malformed_field_keeps_last_good_terms() {
        let mut calc = FinancingCalculator::new(Money::from_cents(9_000_000));
        calc.set_rate_text("6.49").unwrap();

        let err = calc.set_rate_text("six and a half").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(InvalidInput::NotNumeric { .. })
        ));
        // Last good rate still quotes
        assert_eq!(calc.terms().annual_rate.bps(), 649);
        assert!(calc.quote().is_ok());
    }

    #[test]
    fn test_excess_down_payment_is_domain_error() {
        let mut calc = FinancingCalculator::new(Money::from_cents(5_000_000));
        calc.set_down_payment_text("$60,000").unwrap();

        let err = calc.quote().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::DownPaymentExceedsPrice { .. })
        ));
    }

    #[test]
    fn test_huge_term_text_quotes_to_domain_error_not_a_fault() {
        let mut calc = FinancingCalculator::new(Money::from_cents(16_500_000));
        calc.set_rate_text("7.99").unwrap();
        calc.set_term_text("1000000").unwrap();
        let err = calc.quote().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::TermTooLong { .. })
        ));
    }

    #[test]
    fn test_zero_term_text_parses_then_fails_domain_check() {
        let mut calc = FinancingCalculator::new(Money::from_cents(5_000_000));
        calc.set_term_text("0").unwrap();
        let err = calc.quote().unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::NotPositive { field: "term_months", .. })
        ));
    }
}
