//! # Part Data Model
//!
//! A [`Part`] is one entry in the job list: a flat die-cut shape with a
//! quantity. Two shapes are supported - rectangles (width × height) and
//! circles (outer diameter, optional inner diameter, optional bolt holes).
//!
//! Dimensions are optional by design. The upstream form layer enforces
//! required-field presence per shape; the engine itself degrades a part with
//! missing dimensions to a zero contribution instead of raising an error.
//! Only the active shape's fields are read - a circle's `width` is ignored
//! even if populated.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "quantity": 8,
//!   "shape": "circle",
//!   "diameter": 6.0,
//!   "innerDiameter": 3.0,
//!   "boltHoles": 4
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::parts::Part;
//!
//! let flange = Part::circle(8, 6.0)
//!     .with_inner_diameter(3.0)
//!     .with_bolt_holes(4);
//!
//! let profile = flange.cut_profile();
//! assert_eq!(profile.pierce_points, 6); // outer + inner + 4 bolt holes
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Assumed diameter for bolt-hole piercings (in). The form collects only a
/// hole count, so perimeter contribution uses this fixed size.
pub const BOLT_HOLE_DIAMETER_IN: f64 = 0.5;

/// Part shape discriminator.
///
/// Serialized lowercase to match the form layer's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Rectangular part, dimensions `width` × `height`
    Rectangle,
    /// Circular part, dimension `diameter` (plus optional inner cut and bolt holes)
    Circle,
}

impl Shape {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Shape::Rectangle => "Rectangle",
            Shape::Circle => "Circle",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One line item in a quote: a shape, its dimensions, and a quantity.
///
/// All dimensions are in inches. Fields not belonging to the active shape
/// are ignored; fields belonging to it but absent (or non-positive) make the
/// part contribute zero yield, zero perimeter, and zero cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Number of identical parts to cut
    pub quantity: u32,

    /// Which shape the dimension fields describe
    pub shape: Shape,

    /// Rectangle width (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Rectangle height (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Circle outer diameter (in)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,

    /// Circle inner cutout diameter (in); adds an internal cut and a pierce
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_diameter: Option<f64>,

    /// Count of small bolt-hole piercings ([`BOLT_HOLE_DIAMETER_IN`] each)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bolt_holes: Option<u32>,
}

/// Cutting geometry derived from a part: total cut path length and the
/// number of pierce (lead-in) events per piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutProfile {
    /// Total perimeter to cut per piece (in)
    pub perimeter_in: f64,
    /// Pierce events per piece
    pub pierce_points: u32,
}

impl Part {
    /// Create a rectangular part.
    pub fn rectangle(quantity: u32, width_in: f64, height_in: f64) -> Self {
        Part {
            quantity,
            shape: Shape::Rectangle,
            width: Some(width_in),
            height: Some(height_in),
            diameter: None,
            inner_diameter: None,
            bolt_holes: None,
        }
    }

    /// Create a circular part with the given outer diameter.
    pub fn circle(quantity: u32, diameter_in: f64) -> Self {
        Part {
            quantity,
            shape: Shape::Circle,
            width: None,
            height: None,
            diameter: Some(diameter_in),
            inner_diameter: None,
            bolt_holes: None,
        }
    }

    /// Add an inner cutout (ring gasket).
    pub fn with_inner_diameter(mut self, inner_in: f64) -> Self {
        self.inner_diameter = Some(inner_in);
        self
    }

    /// Add bolt-hole piercings.
    pub fn with_bolt_holes(mut self, count: u32) -> Self {
        self.bolt_holes = Some(count);
        self
    }

    /// Rectangle dimensions, if present and positive.
    pub fn rect_dims(&self) -> Option<(f64, f64)> {
        match (positive(self.width), positive(self.height)) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    /// Circle outer diameter, if present and positive.
    pub fn outer_diameter(&self) -> Option<f64> {
        positive(self.diameter)
    }

    /// Validate required-field presence and ranges for the active shape.
    ///
    /// This is the check the form layer performs before dispatching a
    /// calculation; the engine itself never calls it.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.quantity == 0 {
            return Err(QuoteError::invalid_input(
                "quantity",
                self.quantity.to_string(),
                "Quantity must be positive",
            ));
        }
        match self.shape {
            Shape::Rectangle => {
                let width = self
                    .width
                    .ok_or_else(|| QuoteError::missing_field("width"))?;
                let height = self
                    .height
                    .ok_or_else(|| QuoteError::missing_field("height"))?;
                if width <= 0.0 {
                    return Err(QuoteError::invalid_input(
                        "width",
                        width.to_string(),
                        "Width must be positive",
                    ));
                }
                if height <= 0.0 {
                    return Err(QuoteError::invalid_input(
                        "height",
                        height.to_string(),
                        "Height must be positive",
                    ));
                }
            }
            Shape::Circle => {
                let diameter = self
                    .diameter
                    .ok_or_else(|| QuoteError::missing_field("diameter"))?;
                if diameter <= 0.0 {
                    return Err(QuoteError::invalid_input(
                        "diameter",
                        diameter.to_string(),
                        "Diameter must be positive",
                    ));
                }
                if let Some(inner) = self.inner_diameter {
                    if inner <= 0.0 || inner >= diameter {
                        return Err(QuoteError::invalid_input(
                            "innerDiameter",
                            inner.to_string(),
                            "Inner diameter must be positive and smaller than the outer diameter",
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Derive the cutting geometry for one piece.
    ///
    /// - Rectangle: perimeter `2(w+h)`, one pierce.
    /// - Circle: perimeter `πd`, one pierce; an inner cutout adds `π·inner`
    ///   and one pierce; each bolt hole adds `π·0.5` and one pierce.
    ///
    /// A part whose active-shape dimensions are absent yields a zero profile.
    pub fn cut_profile(&self) -> CutProfile {
        let mut perimeter_in = 0.0;
        let mut pierce_points = 0;

        match self.shape {
            Shape::Rectangle => {
                if let Some((width, height)) = self.rect_dims() {
                    perimeter_in = 2.0 * (width + height);
                    pierce_points = 1;
                }
            }
            Shape::Circle => {
                if let Some(diameter) = self.outer_diameter() {
                    perimeter_in = std::f64::consts::PI * diameter;
                    pierce_points = 1;

                    if let Some(inner) = positive(self.inner_diameter) {
                        perimeter_in += std::f64::consts::PI * inner;
                        pierce_points += 1;
                    }

                    if let Some(holes) = self.bolt_holes {
                        perimeter_in +=
                            holes as f64 * std::f64::consts::PI * BOLT_HOLE_DIAMETER_IN;
                        pierce_points += holes;
                    }
                }
            }
        }

        CutProfile {
            perimeter_in,
            pierce_points,
        }
    }
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}
