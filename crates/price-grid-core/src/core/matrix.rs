// crates/price-grid-core/src/core/matrix.rs
// ============================================================================
// Module: Pricing Matrix Model
// Description: Contract terms, service tiers, and the term-by-tier price matrix.
// Purpose: Provide strongly typed matrix cells with stable wire forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This module defines the closed term and tier sets and the price matrix
//! they span. Both sets are fixed at compile time; no term or tier can be
//! added or removed at runtime. The matrix serializes to the exact wire
//! shape of the persisted record, with no wrapping envelope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Terms and Tiers
// ============================================================================

/// Contract term for a matrix row.
///
/// # Invariants
/// - The set is closed; wire names are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// 36-month contract.
    #[serde(rename = "36months")]
    Months36,
    /// 24-month contract.
    #[serde(rename = "24months")]
    Months24,
    /// 12-month contract.
    #[serde(rename = "12months")]
    Months12,
    /// Month-to-month contract.
    #[serde(rename = "mtm")]
    MonthToMonth,
}

impl Term {
    /// All terms in canonical wire order.
    pub const ALL: [Self; 4] = [Self::Months36, Self::Months24, Self::Months12, Self::MonthToMonth];

    /// Returns the stable wire name for the term.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Months36 => "36months",
            Self::Months24 => "24months",
            Self::Months12 => "12months",
            Self::MonthToMonth => "mtm",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Term {
    type Err = UnknownLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|term| term.as_str() == value)
            .ok_or_else(|| UnknownLabelError::Term(value.to_string()))
    }
}

/// Service tier for a matrix column.
///
/// # Invariants
/// - The set is closed; wire names are stable for serialization.
/// - `Lite` is the canonical driver of the other two tiers during edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Lite tier.
    Lite,
    /// Standard tier.
    Standard,
    /// Unlimited tier.
    Unlimited,
}

impl Tier {
    /// All tiers in canonical wire order.
    pub const ALL: [Self; 3] = [Self::Lite, Self::Standard, Self::Unlimited];

    /// Returns the stable wire name for the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lite => "lite",
            Self::Standard => "standard",
            Self::Unlimited => "unlimited",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == value)
            .ok_or_else(|| UnknownLabelError::Tier(value.to_string()))
    }
}

/// Error raised when parsing an unknown term or tier label.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownLabelError {
    /// The label is not a known contract term.
    #[error("unknown term '{0}' (expected 36months, 24months, 12months, or mtm)")]
    Term(String),
    /// The label is not a known service tier.
    #[error("unknown tier '{0}' (expected lite, standard, or unlimited)")]
    Tier(String),
}

// ============================================================================
// SECTION: Tier Row
// ============================================================================

/// Prices for the three tiers of a single contract term.
///
/// # Invariants
/// - Every price is a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierRow {
    /// Lite tier price.
    pub lite: f64,
    /// Standard tier price.
    pub standard: f64,
    /// Unlimited tier price.
    pub unlimited: f64,
}

impl TierRow {
    /// Returns the price for a tier.
    #[must_use]
    pub const fn price(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Lite => self.lite,
            Tier::Standard => self.standard,
            Tier::Unlimited => self.unlimited,
        }
    }

    /// Sets the price for a single tier, leaving the siblings untouched.
    pub const fn set_price(&mut self, tier: Tier, value: f64) {
        match tier {
            Tier::Lite => self.lite = value,
            Tier::Standard => self.standard = value,
            Tier::Unlimited => self.unlimited = value,
        }
    }
}

// ============================================================================
// SECTION: Matrix
// ============================================================================

/// Price matrix spanning every contract term and service tier.
///
/// # Invariants
/// - Serializes to exactly the four term keys with no envelope.
/// - Every cell holds a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Matrix {
    /// 36-month row.
    #[serde(rename = "36months")]
    pub months36: TierRow,
    /// 24-month row.
    #[serde(rename = "24months")]
    pub months24: TierRow,
    /// 12-month row.
    #[serde(rename = "12months")]
    pub months12: TierRow,
    /// Month-to-month row.
    #[serde(rename = "mtm")]
    pub mtm: TierRow,
}

impl Matrix {
    /// Returns the all-zero matrix.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the row for a term.
    #[must_use]
    pub const fn row(&self, term: Term) -> &TierRow {
        match term {
            Term::Months36 => &self.months36,
            Term::Months24 => &self.months24,
            Term::Months12 => &self.months12,
            Term::MonthToMonth => &self.mtm,
        }
    }

    /// Returns a mutable row for a term.
    pub const fn row_mut(&mut self, term: Term) -> &mut TierRow {
        match term {
            Term::Months36 => &mut self.months36,
            Term::Months24 => &mut self.months24,
            Term::Months12 => &mut self.months12,
            Term::MonthToMonth => &mut self.mtm,
        }
    }

    /// Returns the price in a single cell.
    #[must_use]
    pub const fn cell(&self, term: Term, tier: Tier) -> f64 {
        self.row(term).price(tier)
    }
}
