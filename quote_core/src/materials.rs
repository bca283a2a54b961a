//! # Stock Material Model
//!
//! A [`Material`] describes the single active stock definition a job is
//! quoted against: either flat sheet inventory or a continuous roll.
//!
//! ## Material Kinds
//!
//! - **Sheet**: flat stock with planar dimensions `width` × `length`.
//!   `stocked` distinguishes pre-cut inventory (billed by consumed area)
//!   from cut-to-order purchases (billed in whole sheets).
//! - **Roll**: continuous stock of usable web width `width`; `length` is
//!   not required. Billed by the foot.
//!
//! ## Cost interpretation
//!
//! `cost` is the price per full sheet for sheet material (the stocked
//! strategy derives its per-square-foot rate from it) and the price per
//! foot for roll material. One interpretation, applied everywhere.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "1/8 Neoprene",
//!   "type": "sheet",
//!   "width": 36.0,
//!   "length": 36.0,
//!   "cost": 1000.0,
//!   "edgeSpacing": 0.5,
//!   "partSpacing": 0.25,
//!   "stocked": true
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};
use crate::units::{SqFt, SqIn};

/// Stock material kind discriminator.
///
/// Serialized lowercase to match the form layer's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Flat sheet stock with two planar dimensions
    Sheet,
    /// Continuous roll stock with a usable web width
    Roll,
}

impl MaterialKind {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialKind::Sheet => "Sheet",
            MaterialKind::Roll => "Roll",
        }
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The active stock definition for a quote.
///
/// Immutable input to the engine; all dimensions in inches. `edge_spacing`
/// is the margin trimmed from each side of the usable area before nesting,
/// `part_spacing` the minimum gap between adjacent nested parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Display name (e.g., "1/8 Neoprene")
    pub name: String,

    /// Sheet or roll
    #[serde(rename = "type")]
    pub kind: MaterialKind,

    /// Sheet width, or usable roll web width (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Sheet length (in); unused for roll material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Price per sheet (sheet) or per foot (roll)
    pub cost: f64,

    /// Margin from each sheet edge (in)
    pub edge_spacing: f64,

    /// Minimum gap between nested parts (in)
    pub part_spacing: f64,

    /// Pre-cut stocked inventory vs cut-to-order; sheet only
    pub stocked: bool,
}

impl Material {
    /// Create a sheet material.
    pub fn sheet(
        name: impl Into<String>,
        width_in: f64,
        length_in: f64,
        cost: f64,
        stocked: bool,
    ) -> Self {
        Material {
            name: name.into(),
            kind: MaterialKind::Sheet,
            width: Some(width_in),
            length: Some(length_in),
            cost,
            edge_spacing: 0.0,
            part_spacing: 0.0,
            stocked,
        }
    }

    /// Create a roll material.
    pub fn roll(name: impl Into<String>, web_width_in: f64, cost_per_foot: f64) -> Self {
        Material {
            name: name.into(),
            kind: MaterialKind::Roll,
            width: Some(web_width_in),
            length: None,
            cost: cost_per_foot,
            edge_spacing: 0.0,
            part_spacing: 0.0,
            stocked: false,
        }
    }

    /// Set edge and part spacing.
    pub fn with_spacing(mut self, edge_in: f64, part_in: f64) -> Self {
        self.edge_spacing = edge_in;
        self.part_spacing = part_in;
        self
    }

    /// Usable width after trimming the edge margin from both sides.
    ///
    /// `None` when the width is missing or nothing remains after trimming -
    /// the invariant `width > 2 × edge_spacing` is what makes any positive
    /// yield possible.
    pub fn usable_width(&self) -> Option<f64> {
        let width = self.width.filter(|w| *w > 0.0)?;
        let usable = width - 2.0 * self.edge_spacing;
        (usable > 0.0).then_some(usable)
    }

    /// Usable length after trimming the edge margin from both sides (sheet).
    pub fn usable_length(&self) -> Option<f64> {
        let length = self.length.filter(|l| *l > 0.0)?;
        let usable = length - 2.0 * self.edge_spacing;
        (usable > 0.0).then_some(usable)
    }

    /// Full sheet area in square feet, when both planar dimensions exist.
    pub fn sheet_area_sqft(&self) -> Option<f64> {
        let width = self.width.filter(|w| *w > 0.0)?;
        let length = self.length.filter(|l| *l > 0.0)?;
        Some(SqFt::from(SqIn(width * length)).value())
    }

    /// Validate required-field presence and ranges for the material kind.
    ///
    /// Form-layer check; the engine itself never calls it.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.cost < 0.0 {
            return Err(QuoteError::invalid_input(
                "cost",
                self.cost.to_string(),
                "Cost cannot be negative",
            ));
        }
        if self.edge_spacing < 0.0 {
            return Err(QuoteError::invalid_input(
                "edgeSpacing",
                self.edge_spacing.to_string(),
                "Edge spacing cannot be negative",
            ));
        }
        if self.part_spacing < 0.0 {
            return Err(QuoteError::invalid_input(
                "partSpacing",
                self.part_spacing.to_string(),
                "Part spacing cannot be negative",
            ));
        }

        let width = self.width.ok_or_else(|| QuoteError::missing_field("width"))?;
        if width <= 2.0 * self.edge_spacing {
            return Err(QuoteError::invalid_input(
                "width",
                width.to_string(),
                "Width must exceed twice the edge spacing",
            ));
        }

        if self.kind == MaterialKind::Sheet {
            let length = self
                .length
                .ok_or_else(|| QuoteError::missing_field("length"))?;
            if length <= 2.0 * self.edge_spacing {
                return Err(QuoteError::invalid_input(
                    "length",
                    length.to_string(),
                    "Length must exceed twice the edge spacing",
                ));
            }
        }

        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            name: "Default Material".to_string(),
            kind: MaterialKind::Sheet,
            width: Some(36.0),
            length: Some(36.0),
            cost: 1000.0,
            edge_spacing: 0.5,
            part_spacing: 0.25,
            stocked: true,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_dimensions() {
        let material = Material::sheet("test", 36.0, 36.0, 1000.0, true).with_spacing(0.5, 0.25);
        assert_eq!(material.usable_width(), Some(35.0));
        assert_eq!(material.usable_length(), Some(35.0));
    }

    #[test]
    fn test_usable_width_consumed_by_edges() {
        // Edge margins eat the whole sheet: nothing is nestable.
        let material = Material::sheet("scrap", 1.0, 36.0, 10.0, true).with_spacing(0.5, 0.0);
        assert_eq!(material.usable_width(), None);
    }

    #[test]
    fn test_sheet_area_sqft() {
        let material = Material::sheet("test", 36.0, 36.0, 1000.0, true);
        assert_eq!(material.sheet_area_sqft(), Some(9.0));

        let roll = Material::roll("web", 24.0, 3.0);
        assert_eq!(roll.sheet_area_sqft(), None);
    }

    #[test]
    fn test_validate_sheet_requires_length() {
        let mut material = Material::sheet("test", 36.0, 36.0, 1000.0, false);
        material.length = None;
        assert_eq!(
            material.validate().unwrap_err().error_code(),
            "MISSING_FIELD"
        );
    }

    #[test]
    fn test_validate_roll_ignores_length() {
        let roll = Material::roll("web", 24.0, 3.0).with_spacing(0.25, 0.125);
        assert!(roll.validate().is_ok());
    }

    #[test]
    fn test_default_matches_form_defaults() {
        let material = Material::default();
        assert_eq!(material.kind, MaterialKind::Sheet);
        assert_eq!(material.width, Some(36.0));
        assert_eq!(material.length, Some(36.0));
        assert!(material.stocked);
    }

    #[test]
    fn test_serialization_wire_format() {
        let material = Material::roll("EPDM web", 24.0, 3.0).with_spacing(0.25, 0.125);
        let json = serde_json::to_string(&material).unwrap();
        assert!(json.contains("\"type\":\"roll\""));
        assert!(json.contains("\"edgeSpacing\":0.25"));
        assert!(!json.contains("\"length\""));

        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(material, roundtrip);
    }
}
