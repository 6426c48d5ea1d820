//! # fleetbooks-forms: Draft/Form State for FleetBooks
//!
//! Caller-owned state for the dashboard's financial forms, layered on the
//! pure calculators in `fleetbooks-core`.
//!
//! ## What Lives Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      fleetbooks-forms                                   │
//! │                                                                         │
//! │  DocumentDraft          The invoice/bill form's line-item set:         │
//! │                         add/update/remove/clear, totals derived on     │
//! │                         every read, submission payload on submit       │
//! │                                                                         │
//! │  FinancingCalculator    The payment estimator: terms edited field by   │
//! │                         field, quote recomputed on every edit          │
//! │                                                                         │
//! │  Drafts are plain values with an owner and a lifecycle tied to the     │
//! │  visible form - no ambient/global state container. Still NO I/O:       │
//! │  submission payloads go back to the caller, which talks to the         │
//! │  external store.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use fleetbooks_core::{DocumentKind, Money, TaxRate};
//! use fleetbooks_forms::DocumentDraft;
//!
//! let mut draft = DocumentDraft::new(DocumentKind::Invoice);
//! draft.add_line("Pallet haul", 3, Money::from_cents(1000), TaxRate::from_bps(1000))?;
//!
//! let totals = draft.totals()?;
//! assert_eq!(totals.total.cents(), 3300); // $33.00
//! # Ok::<(), fleetbooks_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod financing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use document::{DocumentDraft, DocumentSubmission, LineItem};
pub use financing::FinancingCalculator;
