//! # Nesting Yield Estimation
//!
//! Estimates how many parts fit on one sheet ([`sheet_yield`]) or how much
//! roll length a required quantity consumes ([`roll_run_length`]).
//!
//! Exact optimal nesting is NP-hard, so the estimator enumerates a bounded
//! set of closed-form packing layouts and reports the best candidate:
//!
//! - Rectangles on sheets: simple grid, the grid with the part rotated 90°,
//!   and hybrid strip-fill layouts that pack the leftover strip after the
//!   last full column (or row) with the rotated part - all evaluated in both
//!   sheet orientations, 12 candidates total.
//! - Circles on sheets: square grid vs triangular (hexagonal) packing with
//!   offset rows, evaluated in both width/height assignments.
//! - Rolls: the layout is a row-by-row march down the web; the estimator
//!   minimizes consumed length over part rotations (rectangles) or over
//!   grid vs triangular row stacking (circles).
//!
//! Every candidate is a product of `floor` divisions over non-negative
//! spans, so the search is fast, bounded, and explainable.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::nesting::sheet_yield;
//! use quote_core::materials::Material;
//! use quote_core::parts::Part;
//!
//! let material = Material::sheet("neoprene", 36.0, 36.0, 1000.0, true)
//!     .with_spacing(0.5, 0.25);
//! let part = Part::rectangle(4, 10.0, 20.0);
//!
//! assert_eq!(sheet_yield(&part, &material), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::parts::{Part, Shape};

/// Packing layout family that produced a yield estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Simple rows-and-columns grid in the part's given orientation
    Grid,
    /// Grid with the part rotated 90°
    RotatedGrid,
    /// Grid plus a rotated-part fill of the leftover strip
    HybridStrip,
    /// Offset-row circle packing at `d·√3/2` vertical pitch
    Triangular,
}

impl Layout {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Layout::Grid => "Grid",
            Layout::RotatedGrid => "Rotated grid",
            Layout::HybridStrip => "Hybrid strip fill",
            Layout::Triangular => "Triangular",
        }
    }
}

/// Best sheet-nesting estimate for one part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetYield {
    /// Parts obtainable from one sheet (0 when nothing fits)
    pub parts_per_sheet: u32,
    /// The layout family that won the candidate search
    pub layout: Layout,
}

/// Estimate how many parts fit on one sheet.
///
/// Returns 0 when the part's required dimensions are missing, the material's
/// planar dimensions are missing, or the edge margins consume the sheet.
pub fn sheet_yield(part: &Part, material: &Material) -> u32 {
    sheet_yield_detailed(part, material).parts_per_sheet
}

/// [`sheet_yield`] plus the layout family that produced the winning count.
pub fn sheet_yield_detailed(part: &Part, material: &Material) -> SheetYield {
    let none = SheetYield {
        parts_per_sheet: 0,
        layout: Layout::Grid,
    };

    let (Some(usable_w), Some(usable_l)) = (material.usable_width(), material.usable_length())
    else {
        return none;
    };

    match part.shape {
        Shape::Rectangle => match part.rect_dims() {
            Some((width, height)) => {
                rect_sheet_yield(width, height, usable_w, usable_l, material.part_spacing)
            }
            None => none,
        },
        Shape::Circle => match part.outer_diameter() {
            Some(diameter) => circle_sheet_yield(diameter, usable_w, usable_l, material.part_spacing),
            None => none,
        },
    }
}

/// Estimate the roll length (in inches) consumed by a part's full quantity.
///
/// Evaluates both part rotations against the usable web width (rectangles)
/// or grid vs triangular row stacking (circles) and returns the shorter run.
/// `None` means no orientation fits a single part across the web - the
/// caller must treat that as zero billable yield, never divide by it.
pub fn roll_run_length(part: &Part, material: &Material) -> Option<f64> {
    let web = material.usable_width()?;

    match part.shape {
        Shape::Rectangle => {
            let (width, height) = part.rect_dims()?;
            rect_roll_run(width, height, part.quantity, web, material.part_spacing)
        }
        Shape::Circle => {
            let diameter = part.outer_diameter()?;
            circle_roll_run(diameter, part.quantity, web, material.part_spacing)
        }
    }
}

// ============================================================================
// Sheet layouts
// ============================================================================

/// How many part steps fit along a span. Floor division, zero on degenerate
/// spans so infeasible candidates drop out of the max naturally.
fn cells(span: f64, step: f64) -> u32 {
    if step <= 0.0 || span <= 0.0 {
        return 0;
    }
    (span / step).floor() as u32
}

fn grid_count(step_w: f64, step_h: f64, sheet_w: f64, sheet_h: f64) -> u32 {
    cells(sheet_w, step_w) * cells(sheet_h, step_h)
}

/// Leftover strip position for a hybrid layout.
#[derive(Clone, Copy)]
enum StripAfter {
    /// Vertical strip right of the last full column
    Columns,
    /// Horizontal strip above the last full row
    Rows,
}

/// Grid of `primary`-oriented parts plus a fill of the leftover strip with
/// `leftover`-oriented parts. Steps already include part spacing.
fn hybrid_count(
    primary: (f64, f64),
    leftover: (f64, f64),
    sheet_w: f64,
    sheet_h: f64,
    strip: StripAfter,
) -> u32 {
    let cols = cells(sheet_w, primary.0);
    let rows = cells(sheet_h, primary.1);
    let base = cols * rows;

    let fill = match strip {
        StripAfter::Columns => {
            let strip_w = sheet_w - cols as f64 * primary.0;
            cells(strip_w, leftover.0) * cells(sheet_h, leftover.1)
        }
        StripAfter::Rows => {
            let strip_h = sheet_h - rows as f64 * primary.1;
            cells(sheet_w, leftover.0) * cells(strip_h, leftover.1)
        }
    };

    base + fill
}

fn rect_sheet_yield(
    part_w: f64,
    part_h: f64,
    usable_w: f64,
    usable_l: f64,
    part_spacing: f64,
) -> SheetYield {
    let step_w = part_w + part_spacing;
    let step_h = part_h + part_spacing;

    let mut best = SheetYield {
        parts_per_sheet: 0,
        layout: Layout::Grid,
    };

    // Both sheet orientations: as-given and transposed.
    for (sheet_w, sheet_h) in [(usable_w, usable_l), (usable_l, usable_w)] {
        consider(&mut best, grid_count(step_w, step_h, sheet_w, sheet_h), Layout::Grid);
        consider(
            &mut best,
            grid_count(step_h, step_w, sheet_w, sheet_h),
            Layout::RotatedGrid,
        );

        // Hybrid strip fill in both rotation assignments and both leftover
        // directions: 4 candidates per sheet orientation.
        for (primary, leftover) in [
            ((step_w, step_h), (step_h, step_w)),
            ((step_h, step_w), (step_w, step_h)),
        ] {
            for strip in [StripAfter::Columns, StripAfter::Rows] {
                consider(
                    &mut best,
                    hybrid_count(primary, leftover, sheet_w, sheet_h, strip),
                    Layout::HybridStrip,
                );
            }
        }
    }

    best
}

/// Rows of circles stacked along `stack_span` at `pitch·√3/2` vertical pitch;
/// the first row consumes a full pitch.
fn triangular_rows(stack_span: f64, pitch: f64) -> u32 {
    if pitch <= 0.0 || stack_span < pitch {
        return 0;
    }
    let vertical_pitch = pitch * 3.0_f64.sqrt() / 2.0;
    ((stack_span - pitch) / vertical_pitch).floor() as u32 + 1
}

/// Triangular packing count: rows alternate between full rows and rows
/// offset by half a pitch, which hold the same count or one fewer.
fn triangular_count(pitch: f64, row_span: f64, stack_span: f64) -> u32 {
    let full = cells(row_span, pitch);
    if full == 0 {
        return 0;
    }
    let offset = cells(row_span - pitch / 2.0, pitch);
    let rows = triangular_rows(stack_span, pitch);

    let full_rows = (rows + 1) / 2;
    let offset_rows = rows / 2;
    full_rows * full + offset_rows * offset
}

fn circle_sheet_yield(diameter: f64, usable_w: f64, usable_l: f64, part_spacing: f64) -> SheetYield {
    let pitch = diameter + part_spacing;

    let mut best = SheetYield {
        parts_per_sheet: 0,
        layout: Layout::Grid,
    };

    consider(&mut best, grid_count(pitch, pitch, usable_w, usable_l), Layout::Grid);
    consider(&mut best, triangular_count(pitch, usable_w, usable_l), Layout::Triangular);
    consider(&mut best, triangular_count(pitch, usable_l, usable_w), Layout::Triangular);

    best
}

fn consider(best: &mut SheetYield, candidate: u32, layout: Layout) {
    if candidate > best.parts_per_sheet {
        *best = SheetYield {
            parts_per_sheet: candidate,
            layout,
        };
    }
}

// ============================================================================
// Roll layouts
// ============================================================================

fn rect_roll_run(
    part_w: f64,
    part_h: f64,
    quantity: u32,
    web: f64,
    part_spacing: f64,
) -> Option<f64> {
    let mut best: Option<f64> = None;

    // Both rotation assignments against the web; shorter consumption wins.
    for (across, along) in [(part_w, part_h), (part_h, part_w)] {
        let per_row = cells(web, across + part_spacing);
        if per_row == 0 {
            continue;
        }
        let rows = quantity.div_ceil(per_row);
        let run = rows as f64 * (along + part_spacing);
        best = Some(best.map_or(run, |b: f64| b.min(run)));
    }

    best
}

fn circle_roll_run(diameter: f64, quantity: u32, web: f64, part_spacing: f64) -> Option<f64> {
    let pitch = diameter + part_spacing;
    let per_row = cells(web, pitch);
    if per_row == 0 {
        return None;
    }
    if quantity == 0 {
        return Some(0.0);
    }

    // Grid: every row holds the same count at a full-pitch row spacing.
    let grid_rows = quantity.div_ceil(per_row);
    let grid_run = grid_rows as f64 * pitch;

    // Triangular: offset rows hold `per_row` or one fewer, so the quantity
    // divides by the average row count; rows after the first advance by the
    // `√3/2` pitch.
    let offset = cells(web - pitch / 2.0, pitch);
    let average = (per_row + offset) as f64 / 2.0;
    let tri_rows = (quantity as f64 / average).ceil() as u32;
    let vertical_pitch = pitch * 3.0_f64.sqrt() / 2.0;
    let tri_run = pitch + tri_rows.saturating_sub(1) as f64 * vertical_pitch;

    Some(grid_run.min(tri_run))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked_36x36() -> Material {
        Material::sheet("test sheet", 36.0, 36.0, 1000.0, true).with_spacing(0.5, 0.25)
    }

    #[test]
    fn test_rect_grid_candidates() {
        // 35x35 usable, 10.25 x 20.25 steps: 3 across, 1 up.
        assert_eq!(grid_count(10.25, 20.25, 35.0, 35.0), 3);
        assert_eq!(grid_count(20.25, 10.25, 35.0, 35.0), 3);
    }

    #[test]
    fn test_strip_fill_improves_on_plain_grids() {
        // Three portrait columns leave a 35x14.75 strip that takes one more
        // landscape part; the plain grids stop at 3.
        let material = stocked_36x36();
        let part = Part::rectangle(4, 10.0, 20.0);

        let detail = sheet_yield_detailed(&part, &material);
        assert_eq!(detail.parts_per_sheet, 4);
        assert_eq!(detail.layout, Layout::HybridStrip);
    }

    #[test]
    fn test_rect_yield_square_part() {
        // 5.25 step into 35: 6 per side, no rotation or strip gains.
        let material = stocked_36x36();
        let part = Part::rectangle(1, 5.0, 5.0);
        assert_eq!(sheet_yield(&part, &material), 36);
    }

    #[test]
    fn test_circle_triangular_beats_grid() {
        // d=5, pitch 5.25 into 35x35: grid 36, triangular 7 rows of 6 = 42.
        let material = stocked_36x36();
        let part = Part::circle(20, 5.0);

        let detail = sheet_yield_detailed(&part, &material);
        assert_eq!(detail.parts_per_sheet, 42);
        assert_eq!(detail.layout, Layout::Triangular);
    }

    #[test]
    fn test_triangular_offset_rows_hold_fewer() {
        // Row span barely fits `full` circles; the offset row loses one.
        // pitch 5, span 10: full rows 2, offset rows 1.
        assert_eq!(cells(10.0, 5.0), 2);
        assert_eq!(cells(10.0 - 2.5, 5.0), 1);
        // 3 rows -> 2 full + 1 offset = 5 circles.
        let count = triangular_count(5.0, 10.0, 5.0 + 2.0 * (5.0 * 3.0_f64.sqrt() / 2.0));
        assert_eq!(count, 5);
    }

    #[test]
    fn test_missing_part_dimensions_zero_yield() {
        let material = stocked_36x36();
        let mut part = Part::rectangle(4, 10.0, 20.0);
        part.width = None;
        assert_eq!(sheet_yield(&part, &material), 0);
    }

    #[test]
    fn test_missing_sheet_length_zero_yield() {
        let mut material = stocked_36x36();
        material.length = None;
        let part = Part::rectangle(4, 10.0, 20.0);
        assert_eq!(sheet_yield(&part, &material), 0);
    }

    #[test]
    fn test_oversized_part_zero_yield() {
        let material = stocked_36x36();
        let part = Part::rectangle(1, 40.0, 40.0);
        assert_eq!(sheet_yield(&part, &material), 0);
    }

    #[test]
    fn test_yield_monotonic_in_part_spacing() {
        let part = Part::circle(1, 5.0);
        let tight = Material::sheet("t", 36.0, 36.0, 1.0, true).with_spacing(0.5, 0.0);
        let loose = Material::sheet("l", 36.0, 36.0, 1.0, true).with_spacing(0.5, 1.0);
        assert!(sheet_yield(&part, &tight) >= sheet_yield(&part, &loose));
    }

    #[test]
    fn test_yield_monotonic_in_sheet_width() {
        let part = Part::rectangle(1, 10.0, 20.0);
        let narrow = Material::sheet("n", 24.0, 36.0, 1.0, true).with_spacing(0.5, 0.25);
        let wide = Material::sheet("w", 48.0, 36.0, 1.0, true).with_spacing(0.5, 0.25);
        assert!(sheet_yield(&part, &wide) >= sheet_yield(&part, &narrow));
    }

    #[test]
    fn test_roll_rect_prefers_shorter_rotation() {
        // Web 23 usable: 2-across portrait needs 2 rows of 20.25 = 40.5;
        // 1-across landscape needs 4 rows of 10.25 = 41.0.
        let material = Material::roll("web", 24.0, 3.0).with_spacing(0.5, 0.25);
        let part = Part::rectangle(4, 10.0, 20.0);

        let run = roll_run_length(&part, &material).unwrap();
        assert!((run - 40.5).abs() < 1e-9);
    }

    #[test]
    fn test_roll_circle_grid_vs_triangular() {
        // Web 23 usable, pitch 5.25: grid 4-across, 5 rows = 26.25;
        // triangular averages 3.5 per row, 6 rows = 27.98 - grid wins.
        let material = Material::roll("web", 24.0, 3.0).with_spacing(0.5, 0.25);
        let part = Part::circle(20, 5.0);

        let run = roll_run_length(&part, &material).unwrap();
        assert!((run - 26.25).abs() < 1e-9);
    }

    #[test]
    fn test_roll_triangular_wins_when_rows_are_cheap() {
        // Wide web, few parts per extra row needed: the offset stacking's
        // shorter row pitch pays off.
        let material = Material::roll("web", 50.25, 3.0).with_spacing(0.0, 0.25);
        let part = Part::circle(28, 5.0);

        // grid: 9 across within 50.25? floor(50.25/5.25)=9, rows=ceil(28/9)=4, run 21.0
        // tri: offset rows hold 9 too (floor(47.625/5.25)=9), avg 9, rows 4,
        //      run 5.25 + 3*4.5467 = 18.89 - triangular wins.
        let run = roll_run_length(&part, &material).unwrap();
        assert!(run < 21.0);
    }

    #[test]
    fn test_roll_infeasible_width_returns_none() {
        let material = Material::roll("narrow", 8.0, 3.0).with_spacing(0.5, 0.25);
        let part = Part::rectangle(4, 30.0, 40.0);
        assert_eq!(roll_run_length(&part, &material), None);
    }

    #[test]
    fn test_roll_run_scales_with_quantity() {
        let material = Material::roll("web", 24.0, 3.0).with_spacing(0.5, 0.25);
        let few = Part::rectangle(4, 10.0, 20.0);
        let many = Part::rectangle(40, 10.0, 20.0);
        assert!(roll_run_length(&many, &material).unwrap() > roll_run_length(&few, &material).unwrap());
    }

    #[test]
    fn test_estimates_are_idempotent() {
        let material = stocked_36x36();
        let part = Part::circle(20, 5.0);
        assert_eq!(
            sheet_yield_detailed(&part, &material),
            sheet_yield_detailed(&part, &material)
        );
    }
}
