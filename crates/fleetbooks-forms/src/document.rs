//! # Document Draft State
//!
//! Manages the in-memory line-item set of an invoice or bill form.
//!
//! ## Ownership
//! A draft is plain caller-owned state: the screen that shows the form owns
//! the `DocumentDraft`, mutates it through these methods, and drops it when
//! the form closes. No ambient/global state container is involved.
//!
//! ## Draft Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Document Draft Operations                               │
//! │                                                                         │
//! │  Dashboard Action          Draft Method            State Change         │
//! │  ───────────────           ────────────            ────────────         │
//! │                                                                         │
//! │  Click "Add line" ────────► add_line() ──────────► lines.push(line)    │
//! │                                                                         │
//! │  Edit quantity ───────────► update_quantity() ───► lines[i].qty = n    │
//! │                                                                         │
//! │  Edit unit price ─────────► update_unit_price() ─► lines[i].price = p  │
//! │                                                                         │
//! │  Edit tax rate ───────────► update_tax_rate() ───► lines[i].rate = r   │
//! │                                                                         │
//! │  Click remove ────────────► remove_line() ───────► lines.remove(i)     │
//! │                                                                         │
//! │  Discard form ────────────► clear() ─────────────► lines.clear()       │
//! │                                                                         │
//! │  (totals are derived on demand, never stored)                           │
//! │                                                                         │
//! │  Click submit ────────────► submission() ────────► payload for the     │
//! │                                                    external store       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation is validated through [`compute_line`] before it lands, so
//! a draft never holds a line its own totals cannot price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use fleetbooks_core::lineitem::{compute_aggregate, compute_line, DocumentTotals, LineTotals};
use fleetbooks_core::validation::{parse_money, parse_quantity, parse_rate_bps};
use fleetbooks_core::{CoreResult, DocumentKind, DomainError, Money, TaxRate, MAX_DOCUMENT_LINES};

// =============================================================================
// Line Item
// =============================================================================

/// One billable entry on a draft invoice or bill.
///
/// Holds only the three pricing inputs plus form bookkeeping; the derived
/// figures (subtotal, tax, total) are recomputed from these on every read
/// and are never independently mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line id (UUID v4), generated when the line is added.
    pub id: String,

    /// Free-text description ("Diesel - week 34", "Brake service").
    pub description: String,

    /// Billed quantity (whole units).
    pub quantity: i64,

    /// Unit price in cents.
    pub unit_price_cents: i64,

    /// Tax rate in basis points (825 = 8.25%).
    pub tax_rate_bps: u32,

    /// When this line was added to the draft.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Prices this line: subtotal, tax, total.
    ///
    /// Lines inside a draft always price successfully, because every path
    /// that mutates a line re-validates through the same calculation.
    pub fn totals(&self) -> CoreResult<LineTotals> {
        compute_line(self.quantity, self.unit_price(), self.tax_rate())
    }
}

// =============================================================================
// Document Draft
// =============================================================================

/// An in-progress invoice or bill.
///
/// ## Invariants
/// - Every held line prices successfully under [`compute_line`]
/// - Line count never exceeds [`MAX_DOCUMENT_LINES`]
/// - Totals are always derived from the current line set; a stale total
///   cannot exist because none is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    /// Receivable (invoice) or payable (bill).
    pub kind: DocumentKind,

    /// Lines in form order.
    pub lines: Vec<LineItem>,

    /// When the draft was opened/last discarded.
    pub created_at: DateTime<Utc>,
}

impl DocumentDraft {
    /// Opens an empty draft of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        DocumentDraft {
            kind,
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line, returning its generated id.
    ///
    /// The line is priced before it lands; a line the calculator rejects
    /// never enters the draft.
    pub fn add_line(
        &mut self,
        description: impl Into<String>,
        quantity: i64,
        unit_price: Money,
        tax_rate: TaxRate,
    ) -> CoreResult<String> {
        if self.lines.len() >= MAX_DOCUMENT_LINES {
            return Err(DomainError::TooManyLines {
                max: MAX_DOCUMENT_LINES,
            }
            .into());
        }
        compute_line(quantity, unit_price, tax_rate)?;

        let line = LineItem {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            quantity,
            unit_price_cents: unit_price.cents(),
            tax_rate_bps: tax_rate.bps(),
            added_at: Utc::now(),
        };
        let id = line.id.clone();
        debug!(line_id = %id, kind = ?self.kind, "line added to draft");
        self.lines.push(line);
        Ok(id)
    }

    /// Adds a line from raw field text, parsing through the validation
    /// layer first. Malformed text surfaces as `InvalidInput` with the
    /// offending field named; the draft is untouched on any error.
    pub fn add_line_text(
        &mut self,
        description: impl Into<String>,
        quantity_text: &str,
        unit_price_text: &str,
        tax_rate_text: &str,
    ) -> CoreResult<String> {
        let quantity = parse_quantity("quantity", quantity_text)?;
        let unit_price = parse_money("unit price", unit_price_text)?;
        let tax_rate = TaxRate::from_bps(parse_rate_bps("tax rate", tax_rate_text)?);
        self.add_line(description, quantity, unit_price, tax_rate)
    }

    /// Updates the quantity of a line.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) -> CoreResult<()> {
        let line = self.line_mut(line_id)?;
        compute_line(quantity, line.unit_price(), line.tax_rate())?;
        line.quantity = quantity;
        debug!(line_id, quantity, "line quantity updated");
        Ok(())
    }

    /// Updates the unit price of a line.
    pub fn update_unit_price(&mut self, line_id: &str, unit_price: Money) -> CoreResult<()> {
        let line = self.line_mut(line_id)?;
        compute_line(line.quantity, unit_price, line.tax_rate())?;
        line.unit_price_cents = unit_price.cents();
        debug!(line_id, cents = unit_price.cents(), "line unit price updated");
        Ok(())
    }

    /// Updates the tax rate of a line.
    pub fn update_tax_rate(&mut self, line_id: &str, tax_rate: TaxRate) -> CoreResult<()> {
        let line = self.line_mut(line_id)?;
        compute_line(line.quantity, line.unit_price(), tax_rate)?;
        line.tax_rate_bps = tax_rate.bps();
        debug!(line_id, bps = tax_rate.bps(), "line tax rate updated");
        Ok(())
    }

    /// Removes a line from the draft by id.
    pub fn remove_line(&mut self, line_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != line_id);

        if self.lines.len() == initial_len {
            Err(DomainError::LineNotFound {
                line_id: line_id.to_string(),
            }
            .into())
        } else {
            debug!(line_id, "line removed from draft");
            Ok(())
        }
    }

    /// Discards all lines from the draft.
    pub fn clear(&mut self) {
        debug!(discarded = self.lines.len(), "draft cleared");
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the number of lines on the draft.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the draft has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Prices every line on the draft.
    pub fn line_totals(&self) -> CoreResult<Vec<LineTotals>> {
        self.lines.iter().map(|l| l.totals()).collect()
    }

    /// Derives the aggregate document totals from the current line set.
    ///
    /// Recomputed on every call; an empty draft totals to zero.
    pub fn totals(&self) -> CoreResult<DocumentTotals> {
        Ok(compute_aggregate(&self.line_totals()?)?)
    }

    /// Builds the submission payload handed to the external persistence
    /// boundary: the lines plus the computed aggregate, not the raw lines
    /// alone.
    pub fn submission(&self) -> CoreResult<DocumentSubmission> {
        Ok(DocumentSubmission {
            kind: self.kind,
            lines: self.lines.clone(),
            totals: self.totals()?,
        })
    }

    fn line_mut(&mut self, line_id: &str) -> Result<&mut LineItem, DomainError> {
        self.lines
            .iter_mut()
            .find(|l| l.id == line_id)
            .ok_or_else(|| DomainError::LineNotFound {
                line_id: line_id.to_string(),
            })
    }
}

// =============================================================================
// Submission Payload
// =============================================================================

/// What the caller forwards to the external store on successful submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSubmission {
    pub kind: DocumentKind,
    pub lines: Vec<LineItem>,
    pub totals: DocumentTotals,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_worked_lines() -> DocumentDraft {
        let mut draft = DocumentDraft::new(DocumentKind::Invoice);
        // 3 × $10.00 at 10% → {30.00, 3.00, 33.00}
        draft
            .add_line("Pallet haul", 3, Money::from_cents(1000), TaxRate::from_bps(1000))
            .unwrap();
        // 2 × $10.00 untaxed → {20.00, 0.00, 20.00}
        draft
            .add_line("Fuel surcharge", 2, Money::from_cents(1000), TaxRate::zero())
            .unwrap();
        draft
    }

    #[test]
    fn test_empty_draft_totals_to_zero() {
        let draft = DocumentDraft::new(DocumentKind::Bill);
        let totals = draft.totals().unwrap();
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.total.is_zero());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_add_lines_and_aggregate() {
        let draft = draft_with_worked_lines();
        let totals = draft.totals().unwrap();
        assert_eq!(totals.subtotal.cents(), 5000); // $50.00
        assert_eq!(totals.tax.cents(), 300); // $3.00
        assert_eq!(totals.total.cents(), 5300); // $53.00
    }

    #[test]
    fn test_update_quantity_recomputes_totals() {
        let mut draft = draft_with_worked_lines();
        let id = draft.lines[0].id.clone();

        draft.update_quantity(&id, 6).unwrap();
        let totals = draft.totals().unwrap();
        // First line doubles: 60.00 + 6.00 tax, second unchanged
        assert_eq!(totals.subtotal.cents(), 8000);
        assert_eq!(totals.tax.cents(), 600);
        assert_eq!(totals.total.cents(), 8600);
    }

    #[test]
    fn test_update_rejecting_leaves_line_untouched() {
        let mut draft = draft_with_worked_lines();
        let id = draft.lines[0].id.clone();
        let before = draft.totals().unwrap();

        assert!(draft.update_quantity(&id, -1).is_err());
        assert!(draft
            .update_tax_rate(&id, TaxRate::from_bps(10_001))
            .is_err());
        assert!(draft
            .update_unit_price(&id, Money::from_cents(-5))
            .is_err());

        assert_eq!(draft.totals().unwrap(), before);
    }

    #[test]
    fn test_remove_line() {
        let mut draft = draft_with_worked_lines();
        let id = draft.lines[1].id.clone();

        draft.remove_line(&id).unwrap();
        assert_eq!(draft.line_count(), 1);
        assert_eq!(draft.totals().unwrap().total.cents(), 3300);

        let err = draft.remove_line(&id).unwrap_err();
        assert!(matches!(
            err,
            fleetbooks_core::CoreError::Domain(DomainError::LineNotFound { .. })
        ));
    }

    #[test]
    fn test_add_line_text_parses_field_input() {
        let mut draft = DocumentDraft::new(DocumentKind::Bill);
        draft
            .add_line_text("Diesel - week 34", "410", "$3.89", "0")
            .unwrap();
        let totals = draft.totals().unwrap();
        assert_eq!(totals.subtotal.cents(), 410 * 389);

        // Malformed field → typed InvalidInput, draft untouched
        let err = draft
            .add_line_text("Tires", "four", "189.00", "8.25")
            .unwrap_err();
        assert!(matches!(
            err,
            fleetbooks_core::CoreError::InvalidInput(
                fleetbooks_core::InvalidInput::NotNumeric { field: "quantity", .. }
            )
        ));
        assert_eq!(draft.line_count(), 1);
    }

    #[test]
    fn test_invalid_line_never_enters_draft() {
        let mut draft = DocumentDraft::new(DocumentKind::Invoice);
        assert!(draft
            .add_line("bad", -3, Money::from_cents(1000), TaxRate::zero())
            .is_err());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_line_cap() {
        let mut draft = DocumentDraft::new(DocumentKind::Bill);
        for i in 0..MAX_DOCUMENT_LINES {
            draft
                .add_line(format!("line {i}"), 1, Money::from_cents(100), TaxRate::zero())
                .unwrap();
        }
        let err = draft
            .add_line("one too many", 1, Money::from_cents(100), TaxRate::zero())
            .unwrap_err();
        assert!(matches!(
            err,
            fleetbooks_core::CoreError::Domain(DomainError::TooManyLines { .. })
        ));
    }

    #[test]
    fn test_clear_discards_lines() {
        let mut draft = draft_with_worked_lines();
        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.totals().unwrap().total.is_zero());
    }

    #[test]
    fn test_totals_stable_under_any_edit_sequence() {
        let mut draft = draft_with_worked_lines();
        let id = draft
            .add_line("Detention", 4, Money::from_cents(2599), TaxRate::from_bps(825))
            .unwrap();
        draft.update_unit_price(&id, Money::from_cents(2799)).unwrap();
        draft.update_tax_rate(&id, TaxRate::from_bps(625)).unwrap();
        let first_id = draft.lines[0].id.clone();
        draft.remove_line(&first_id).unwrap();

        // Draft totals always equal a fresh aggregate over the lines
        let fresh = compute_aggregate(&draft.line_totals().unwrap()).unwrap();
        assert_eq!(draft.totals().unwrap(), fresh);
        assert_eq!(
            fresh.total,
            fresh.subtotal + fresh.tax
        );
    }

    #[test]
    fn test_submission_payload_shape() {
        let draft = draft_with_worked_lines();
        let submission = draft.submission().unwrap();
        assert_eq!(submission.lines.len(), 2);
        assert_eq!(submission.totals.total.cents(), 5300);

        // camelCase on the wire, kind tagged for the ledger side
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["kind"], "invoice");
        assert!(json["lines"][0]["unitPriceCents"].is_number());
        assert!(json["totals"]["subtotal"].is_number());
    }
}
