//! # fleetbooks-core: Pure Financial Logic for FleetBooks
//!
//! This crate is the **numeric heart** of the FleetBooks back office. It
//! contains the deterministic financial calculations as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FleetBooks Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Dashboard (browser)                            │   │
//! │  │   Invoice form ──► Bill form ──► Payment calculator            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              fleetbooks-forms (draft state)                     │   │
//! │  │   DocumentDraft, FinancingCalculator, submission payloads      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ fleetbooks-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ lineitem  │  │ financing │  │ validation│  │   │
//! │  │   │   Money   │  │  totals   │  │ amortize  │  │  parsers  │  │   │
//! │  │   │  TaxCalc  │  │ aggregate │  │   quote   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATASTORE • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │      External collaborators (out of this repository)            │   │
//! │  │   Hosted datastore • auth • document analysis • forecasting    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`types`] - Rates and document kinds
//! - [`lineitem`] - Per-line and aggregate document totals
//! - [`financing`] - Fixed-rate amortization for the payment estimator
//! - [`validation`] - Text-field parsing with typed errors
//! - [`error`] - The InvalidInput / DomainError taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Datastore, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Fail Fast**: Bad input is rejected before any arithmetic; partial or
//!    garbage figures never escape a calculator
//!
//! ## Example Usage
//!
//! ```rust
//! use fleetbooks_core::lineitem::{compute_aggregate, compute_line};
//! use fleetbooks_core::money::Money;
//! use fleetbooks_core::types::TaxRate;
//!
//! // 3 pallets at $10.00, 10% tax — recomputed on every form edit
//! let line = compute_line(3, Money::from_cents(1000), TaxRate::from_bps(1000)).unwrap();
//! assert_eq!(line.total.cents(), 3300);
//!
//! let totals = compute_aggregate(&[line]).unwrap();
//! assert_eq!(totals.total.cents(), 3300);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod financing;
pub mod lineitem;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fleetbooks_core::Money` instead of
// `use fleetbooks_core::money::Money`

pub use error::{CoreError, CoreResult, DomainError, InvalidInput};
pub use financing::{compute_amortization, AmortizationResult, FinancingTerms};
pub use lineitem::{compute_aggregate, compute_line, DocumentTotals, LineTotals};
pub use money::Money;
pub use types::{DocumentKind, InterestRate, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single document line
///
/// ## Business Reason
/// Prevents accidental over-entry (e.g., typing 99999 instead of 9).
/// Freight quantities legitimately run into four digits (mileage-billed
/// lines), so the cap sits above retail norms.
pub const MAX_LINE_QUANTITY: i64 = 99_999;

/// Maximum lines allowed on a single invoice or bill
///
/// ## Business Reason
/// Prevents runaway drafts; the largest observed consolidated fuel bill
/// carries under 150 lines.
pub const MAX_DOCUMENT_LINES: usize = 200;

/// Upper bound for a document tax rate, in basis points (100%)
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

/// Maximum financing term length, in months (40 years)
///
/// ## Business Reason
/// No equipment loan runs longer; commercial vehicle terms top out well
/// under a decade. The cap also keeps the compound factor (1+r)^n inside
/// Decimal's range, so an absurd typed-in term is a validation message,
/// never an arithmetic fault.
pub const MAX_TERM_MONTHS: u32 = 480;

/// Term lengths offered by the purchasing screen's payment estimator
///
/// The amortization formula is general; these are just the dropdown
/// choices the dashboard renders.
pub const FINANCING_TERM_CHOICES: [u32; 4] = [36, 48, 60, 72];
