//! # Material Billing Strategies
//!
//! Three interchangeable cost models, selected from material attributes
//! (never from part attributes):
//!
//! - [`BillingMethod::StockedSheet`] - pre-cut inventory billed by consumed
//!   area, rounded up to whole square feet.
//! - [`BillingMethod::NonStockedSheet`] - cut-to-order stock billed in whole
//!   sheets, rounding up the summed fractional consumption.
//! - [`BillingMethod::Roll`] - continuous stock billed by the foot, rounding
//!   up the summed run length.
//!
//! The family is a closed enum with a total, order-sensitive discriminator:
//! roll material always bills as roll (its `stocked` flag is ignored), then
//! sheet splits on `stocked`. Each strategy is a pure function; zero-yield
//! and missing-dimension parts contribute zero cost, never an error, and no
//! NaN or infinity can reach the total.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::billing::BillingMethod;
//! use quote_core::materials::Material;
//!
//! let roll = Material::roll("EPDM web", 24.0, 3.0);
//! assert_eq!(BillingMethod::for_material(&roll), BillingMethod::Roll);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::nesting;
use crate::materials::{Material, MaterialKind};
use crate::parts::Part;
use crate::units::{Feet, Inches};

/// Closed set of billing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingMethod {
    /// Pre-cut sheet inventory, billed by consumed square feet
    StockedSheet,
    /// Cut-to-order sheet stock, billed in whole sheets
    NonStockedSheet,
    /// Continuous roll stock, billed by the foot
    Roll,
}

impl BillingMethod {
    /// Select the billing strategy for a material.
    ///
    /// Total over every `(kind, stocked)` combination; roll ignores
    /// `stocked`.
    pub fn for_material(material: &Material) -> Self {
        match material.kind {
            MaterialKind::Roll => BillingMethod::Roll,
            MaterialKind::Sheet if material.stocked => BillingMethod::StockedSheet,
            MaterialKind::Sheet => BillingMethod::NonStockedSheet,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            BillingMethod::StockedSheet => "Stocked sheet (per sq ft)",
            BillingMethod::NonStockedSheet => "Non-stocked sheet (whole sheets)",
            BillingMethod::Roll => "Roll (per foot)",
        }
    }

    /// Price the full part list against the material under this strategy.
    pub fn price(&self, parts: &[Part], material: &Material) -> f64 {
        match self {
            BillingMethod::StockedSheet => stocked_sheet_price(parts, material),
            BillingMethod::NonStockedSheet => non_stocked_sheet_price(parts, material),
            BillingMethod::Roll => roll_price(parts, material),
        }
    }
}

impl std::fmt::Display for BillingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fractional sheets consumed by one part: `quantity / yield`, or zero when
/// nothing nests (the guard that keeps division-by-zero out of the totals).
fn fractional_sheets(part: &Part, material: &Material) -> f64 {
    let yield_per_sheet = nesting::sheet_yield(part, material);
    if yield_per_sheet == 0 {
        return 0.0;
    }
    part.quantity as f64 / yield_per_sheet as f64
}

/// Stocked sheet: convert each part's fractional-sheet consumption to square
/// feet, round the total up to whole square feet, and bill at the
/// per-square-foot rate derived from the per-sheet cost.
fn stocked_sheet_price(parts: &[Part], material: &Material) -> f64 {
    let Some(sheet_area_sqft) = material.sheet_area_sqft() else {
        return 0.0;
    };
    if sheet_area_sqft <= 0.0 {
        return 0.0;
    }

    let consumed_sqft: f64 = parts
        .iter()
        .map(|part| fractional_sheets(part, material) * sheet_area_sqft)
        .sum();

    let billed_sqft = consumed_sqft.ceil();
    let cost_per_sqft = material.cost / sheet_area_sqft;
    billed_sqft * cost_per_sqft
}

/// Non-stocked sheet: sum fractional sheets across parts and round the sum
/// up to whole sheets at the flat per-sheet cost. Nesting one part type in
/// the remainder of another's last sheet is deliberately not attempted.
fn non_stocked_sheet_price(parts: &[Part], material: &Material) -> f64 {
    if material.usable_width().is_none() || material.usable_length().is_none() {
        return 0.0;
    }

    let total_fractional_sheets: f64 = parts
        .iter()
        .map(|part| fractional_sheets(part, material))
        .sum();

    let billed_sheets = total_fractional_sheets.ceil();
    billed_sheets * material.cost
}

/// Roll: sum each part's run length, convert to feet, round up to whole
/// feet, and bill at the per-foot cost. Parts that fit no orientation across
/// the web contribute nothing.
fn roll_price(parts: &[Part], material: &Material) -> f64 {
    let total_length_in: f64 = parts
        .iter()
        .map(|part| nesting::roll_run_length(part, material).unwrap_or(0.0))
        .sum();

    let billed_feet = Feet::from(Inches(total_length_in)).value().ceil();
    billed_feet * material.cost
}
