//! # Amortization Calculator
//!
//! Fixed monthly payment and interest/cost breakdown for a simple
//! fixed-rate, fixed-term vehicle loan. Backs the purchasing screen's
//! payment estimator.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Amortization Calculation                               │
//! │                                                                         │
//! │  FinancingTerms { price, down_payment, annual_rate, term_months }      │
//! │       │                                                                 │
//! │       ▼ validate (fail fast, never partial figures)                    │
//! │  loan = price − down_payment                                           │
//! │  r    = annual_rate / 10000 / 12        (monthly rate, Decimal)        │
//! │       │                                                                 │
//! │       ├── r = 0 ──► payment = loan / n   (straight-line)               │
//! │       │                                                                 │
//! │       └── r > 0 ──► payment = loan × [r(1+r)^n] / [(1+r)^n − 1]        │
//! │                                                                         │
//! │  payment rounds to a cent ONCE, then:                                  │
//! │  total_cost     = payment × n + down_payment   (exact integer cents)   │
//! │  total_interest = total_cost − price                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The compound factor `(1+r)^n` cannot live in integer cents, so the
//! interior of the formula runs on `rust_decimal::Decimal` (28 significant
//! digits, `powu` from `MathematicalOps`). Everything downstream of the
//! single rounding step is exact integer arithmetic, so the cost/interest
//! breakdown always reconciles against the payment the user actually sees.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, DomainError};
use crate::money::Money;
use crate::types::InterestRate;
use crate::MAX_TERM_MONTHS;

/// Basis points per unit (100% = 10000 bps).
const BPS_PER_UNIT: u32 = 10_000;
/// Months per year, for annual → monthly rate conversion.
const MONTHS_PER_YEAR: u32 = 12;

// =============================================================================
// Financing Terms
// =============================================================================

/// Parameters of a financing quote, captured from the payment estimator.
///
/// Ephemeral and form-local: created when the user opens the calculator on a
/// listed vehicle, re-quoted on every parameter edit, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FinancingTerms {
    /// Vehicle price. Must be positive.
    pub price: Money,
    /// Cash down. Constrained 0 ≤ down_payment ≤ price.
    pub down_payment: Money,
    /// Annual rate, e.g. 799 bps for 7.99% APR. Zero is valid (promo).
    pub annual_rate: InterestRate,
    /// Term length in months. Must be 1..=[`MAX_TERM_MONTHS`].
    pub term_months: u32,
}

impl FinancingTerms {
    /// Checks the business-rule constraints, fail-fast before any arithmetic.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.price.is_positive() {
            return Err(DomainError::NotPositive {
                field: "price",
                value: self.price.cents(),
            }
            .into());
        }
        if self.down_payment.is_negative() {
            return Err(DomainError::Negative {
                field: "down_payment",
                value: self.down_payment.cents(),
            }
            .into());
        }
        if self.down_payment > self.price {
            return Err(DomainError::DownPaymentExceedsPrice {
                price: self.price.cents(),
                down_payment: self.down_payment.cents(),
            }
            .into());
        }
        if self.term_months == 0 {
            return Err(DomainError::NotPositive {
                field: "term_months",
                value: 0,
            }
            .into());
        }
        if self.term_months > MAX_TERM_MONTHS {
            return Err(DomainError::TermTooLong {
                requested: self.term_months,
                max: MAX_TERM_MONTHS,
            }
            .into());
        }
        Ok(())
    }

    /// The financed principal: price − down payment. Never negative once
    /// [`validate`](Self::validate) has passed.
    #[inline]
    pub fn loan_amount(&self) -> Money {
        self.price - self.down_payment
    }
}

// =============================================================================
// Amortization Result
// =============================================================================

/// Output of the payment estimator for one set of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AmortizationResult {
    /// price − down_payment.
    pub loan_amount: Money,
    /// Constant payment that retires the loan over the term.
    pub monthly_payment: Money,
    /// total_cost − price.
    pub total_interest: Money,
    /// monthly_payment × term + down_payment.
    pub total_cost: Money,
}

// =============================================================================
// Operation
// =============================================================================

/// Computes the fixed monthly payment and cost breakdown for the given terms.
///
/// Deterministic, pure function of its inputs: re-quoting with identical
/// terms yields identical cents.
///
/// ## Example
/// ```rust
/// use fleetbooks_core::financing::{compute_amortization, FinancingTerms};
/// use fleetbooks_core::money::Money;
/// use fleetbooks_core::types::InterestRate;
///
/// // $165,000 truck, nothing down, 7.99% APR, 60 months
/// let terms = FinancingTerms {
///     price: Money::from_cents(16_500_000),
///     down_payment: Money::zero(),
///     annual_rate: InterestRate::from_bps(799),
///     term_months: 60,
/// };
/// let quote = compute_amortization(&terms).unwrap();
/// assert_eq!(quote.monthly_payment.cents(), 334_482); // $3,344.82
/// assert_eq!(quote.total_cost, quote.monthly_payment * 60);
/// assert_eq!(quote.total_interest, quote.total_cost - terms.price);
/// ```
///
/// ## Errors
/// [`DomainError`] for a non-positive price or term, a negative down
/// payment, or a down payment exceeding the price (negative loan amount).
/// No partial result is ever produced.
pub fn compute_amortization(terms: &FinancingTerms) -> CoreResult<AmortizationResult> {
    terms.validate()?;

    let loan_amount = terms.loan_amount();
    let loan_cents = Decimal::from(loan_amount.cents());
    let term = Decimal::from(terms.term_months);

    let raw_payment_cents = if terms.annual_rate.is_zero() {
        // Straight-line split: also sidesteps 0/0 in the compound formula
        loan_cents / term
    } else {
        let monthly_rate = Decimal::from(terms.annual_rate.bps())
            / Decimal::from(BPS_PER_UNIT)
            / Decimal::from(MONTHS_PER_YEAR);
        let factor = (Decimal::ONE + monthly_rate).powu(terms.term_months as u64);
        loan_cents * (monthly_rate * factor) / (factor - Decimal::ONE)
    };

    // The ONE rounding step: everything after this is exact integer cents
    let monthly_payment = Money::from_cents(
        raw_payment_cents
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(DomainError::AmountOverflow {
                context: "monthly payment",
            })?,
    );

    let total_cost = monthly_payment * terms.term_months as i64 + terms.down_payment;
    let total_interest = total_cost - terms.price;

    Ok(AmortizationResult {
        loan_amount,
        monthly_payment,
        total_interest,
        total_cost,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
