//! # Line Item Calculator
//!
//! Per-line and aggregate monetary figures for invoice (receivable) and
//! bill (payable) documents. Same arithmetic on both sides of the ledger.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Calculation                                │
//! │                                                                         │
//! │  (quantity, unit_price, tax_rate)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_line ──► LineTotals { subtotal, tax_amount, total }           │
//! │       │             subtotal   = quantity × unit_price                 │
//! │       │             tax_amount = round(subtotal × rate)                │
//! │       │             total      = subtotal + tax_amount                 │
//! │       ▼                                                                 │
//! │  compute_aggregate ──► DocumentTotals { subtotal, tax, total }         │
//! │                          elementwise EXACT integer sum                 │
//! │                          empty list ⇒ all zero                         │
//! │                          order never affects the result                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derived figures are never stored independently; every change to a line
//! re-runs [`compute_line`], every change to a document re-runs
//! [`compute_aggregate`]. Both are cheap enough to run per keystroke.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, DomainError};
use crate::money::Money;
use crate::types::TaxRate;
use crate::{MAX_LINE_QUANTITY, MAX_TAX_RATE_BPS};

// =============================================================================
// Line Totals
// =============================================================================

/// Computed monetary figures for a single billable line.
///
/// ## Invariant
/// `total = subtotal + tax_amount`, always. The only way to obtain a
/// `LineTotals` is [`compute_line`], which establishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineTotals {
    /// quantity × unit price, before tax.
    pub subtotal: Money,
    /// Tax on the subtotal, rounded to the cent.
    pub tax_amount: Money,
    /// subtotal + tax_amount.
    pub total: Money,
}

// =============================================================================
// Document Totals
// =============================================================================

/// Aggregate figures over a document's line set.
///
/// Not an entity of its own: always recomputed from the current in-memory
/// lines, never mutated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentTotals {
    /// Σ line.subtotal
    pub subtotal: Money,
    /// Σ line.tax_amount
    pub tax: Money,
    /// Σ line.total
    pub total: Money,
}

// =============================================================================
// Operations
// =============================================================================

/// Computes the monetary figures for one billable line.
///
/// ## Rules
/// - `quantity` must be 0..=[`MAX_LINE_QUANTITY`] (zero is a blank row the
///   user has not filled in yet; it prices to zero rather than erroring)
/// - `unit_price` must not be negative
/// - `tax_rate` must not exceed 10000 bps (100%)
///
/// Non-numeric text never reaches this function: the [`crate::validation`]
/// parsers reject it with `InvalidInput` first.
///
/// ## Example
/// ```rust
/// use fleetbooks_core::lineitem::compute_line;
/// use fleetbooks_core::money::Money;
/// use fleetbooks_core::types::TaxRate;
///
/// // 3 × $10.00 at 10% tax
/// let line = compute_line(3, Money::from_cents(1000), TaxRate::from_bps(1000)).unwrap();
/// assert_eq!(line.subtotal.cents(), 3000);   // $30.00
/// assert_eq!(line.tax_amount.cents(), 300);  // $3.00
/// assert_eq!(line.total.cents(), 3300);      // $33.00
/// ```
pub fn compute_line(quantity: i64, unit_price: Money, tax_rate: TaxRate) -> CoreResult<LineTotals> {
    if quantity < 0 {
        return Err(DomainError::Negative {
            field: "quantity",
            value: quantity,
        }
        .into());
    }
    if quantity > MAX_LINE_QUANTITY {
        return Err(DomainError::QuantityTooLarge {
            requested: quantity,
            max: MAX_LINE_QUANTITY,
        }
        .into());
    }
    if unit_price.is_negative() {
        return Err(DomainError::Negative {
            field: "unit_price",
            value: unit_price.cents(),
        }
        .into());
    }
    if tax_rate.bps() > MAX_TAX_RATE_BPS {
        return Err(DomainError::TaxRateTooHigh {
            bps: tax_rate.bps(),
        }
        .into());
    }

    let subtotal_cents = unit_price
        .cents()
        .checked_mul(quantity)
        .ok_or(DomainError::AmountOverflow {
            context: "line subtotal",
        })?;
    let subtotal = Money::from_cents(subtotal_cents);
    let tax_amount = subtotal.tax_amount(tax_rate);
    let total_cents =
        subtotal_cents
            .checked_add(tax_amount.cents())
            .ok_or(DomainError::AmountOverflow {
                context: "line total",
            })?;

    Ok(LineTotals {
        subtotal,
        tax_amount,
        total: Money::from_cents(total_cents),
    })
}

/// Sums previously computed line totals into document totals.
///
/// ## Guarantees
/// - Commutative/associative integer sum: line order never changes the result
/// - Idempotent: recomputing from the same lines is bit-identical
/// - Empty line set yields all-zero totals
/// - A sum past the representable money range is a `DomainError`, never a
///   wrapped-around garbage figure
///
/// ## Example
/// ```rust
/// use fleetbooks_core::lineitem::{compute_aggregate, LineTotals};
/// use fleetbooks_core::money::Money;
///
/// let lines = [
///     LineTotals {
///         subtotal: Money::from_cents(3000),
///         tax_amount: Money::from_cents(300),
///         total: Money::from_cents(3300),
///     },
///     LineTotals {
///         subtotal: Money::from_cents(2000),
///         tax_amount: Money::zero(),
///         total: Money::from_cents(2000),
///     },
/// ];
/// let totals = compute_aggregate(&lines).unwrap();
/// assert_eq!(totals.subtotal.cents(), 5000); // $50.00
/// assert_eq!(totals.tax.cents(), 300);       // $3.00
/// assert_eq!(totals.total.cents(), 5300);    // $53.00
/// ```
pub fn compute_aggregate(lines: &[LineTotals]) -> CoreResult<DocumentTotals> {
    let overflow = DomainError::AmountOverflow {
        context: "document totals",
    };
    let mut subtotal = 0i64;
    let mut tax = 0i64;
    let mut total = 0i64;
    for line in lines {
        subtotal = subtotal
            .checked_add(line.subtotal.cents())
            .ok_or(overflow.clone())?;
        tax = tax
            .checked_add(line.tax_amount.cents())
            .ok_or(overflow.clone())?;
        total = total
            .checked_add(line.total.cents())
            .ok_or(overflow.clone())?;
    }
    Ok(DocumentTotals {
        subtotal: Money::from_cents(subtotal),
        tax: Money::from_cents(tax),
        total: Money::from_cents(total),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
