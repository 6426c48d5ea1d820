//! # Domain Types
//!
//! Core domain types used throughout FleetBooks.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  InterestRate   │   │  DocumentKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  bps (u32)      │   │  Invoice (A/R)  │       │
//! │  │  825 = 8.25%    │   │  799 = 7.99%    │   │  Bill (A/P)     │       │
//! │  │  capped at 100% │   │  uncapped       │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Both rates are integer basis points: no float ever enters a formula   │
//! │  except as a display convenience.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25% (typical state sales tax)
///
/// Valid document tax rates are 0..=10000 bps (0%..=100%); the range is
/// enforced where a rate enters a calculation, not in the constructor, so
/// a rate loaded from the external store round-trips untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Interest Rate
// =============================================================================

/// Annual interest rate in basis points (bps).
///
/// Separate from [`TaxRate`] on purpose: interest has no 100% cap (subprime
/// equipment financing can exceed it) and mixing the two up in a signature
/// should not type-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterestRate(u32);

impl InterestRate {
    /// Creates an annual interest rate from basis points (799 = 7.99% APR).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        InterestRate(bps)
    }

    /// Creates an annual interest rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        InterestRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero interest (promotional financing).
    #[inline]
    pub const fn zero() -> Self {
        InterestRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for InterestRate {
    fn default() -> Self {
        InterestRate::zero()
    }
}

// =============================================================================
// Document Kind
// =============================================================================

/// Which side of the ledger a billable document belongs to.
///
/// The arithmetic is identical for both kinds; the tag travels with drafts
/// and submission payloads so the external store files the document on the
/// right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Receivable: the fleet company bills a customer.
    Invoice,
    /// Payable: a vendor bills the fleet company.
    Bill,
}

// =============================================================================
// Unit Tests
// =============================================================================
