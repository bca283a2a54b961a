//! # Labor Time Estimation
//!
//! Estimates total cutting time for a job from each part's cut perimeter and
//! pierce count: linear cut time at a fixed feed rate plus a fixed penalty
//! per pierce (lead-in) event.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::labor;
//! use quote_core::parts::Part;
//!
//! let parts = vec![Part::rectangle(10, 4.0, 6.0)];
//! let estimate = labor::estimate(&parts);
//! assert!(estimate.total_hours > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::parts::Part;

/// Cutting feed rate (inches per minute)
pub const CUT_SPEED_IPM: f64 = 10.0;

/// Fixed time per pierce event (minutes)
pub const PIERCE_TIME_PENALTY_MIN: f64 = 0.04;

/// Labor time breakdown for a job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborEstimate {
    /// Time spent tracing cut paths (minutes)
    pub linear_cut_min: f64,
    /// Time spent on pierce events (minutes)
    pub pierce_min: f64,
    /// Combined total (hours)
    pub total_hours: f64,
}

impl LaborEstimate {
    /// Combined total in minutes
    pub fn total_minutes(&self) -> f64 {
        self.linear_cut_min + self.pierce_min
    }
}

/// Estimate total cut time across the full part list.
///
/// Parts with missing shape dimensions contribute a zero profile (silently,
/// not an error) - the upstream form may hold partially-filled entries.
pub fn estimate(parts: &[Part]) -> LaborEstimate {
    let mut linear_cut_min = 0.0;
    let mut pierce_min = 0.0;

    for part in parts {
        let profile = part.cut_profile();
        let quantity = part.quantity as f64;
        linear_cut_min += profile.perimeter_in * quantity / CUT_SPEED_IPM;
        pierce_min += profile.pierce_points as f64 * quantity * PIERCE_TIME_PENALTY_MIN;
    }

    LaborEstimate {
        linear_cut_min,
        pierce_min,
        total_hours: (linear_cut_min + pierce_min) / 60.0,
    }
}

/// Convenience wrapper returning just the total hours.
pub fn estimate_hours(parts: &[Part]) -> f64 {
    estimate(parts).total_hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rectangle_hours() {
        // Perimeter 60, qty 4: cut 24 min; 4 pierces: 0.16 min.
        let parts = vec![Part::rectangle(4, 10.0, 20.0)];
        let result = estimate(&parts);

        assert!((result.linear_cut_min - 24.0).abs() < 1e-9);
        assert!((result.pierce_min - 0.16).abs() < 1e-9);
        assert!((result.total_hours - 24.16 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_hours() {
        let parts = vec![Part::circle(20, 5.0)];
        let result = estimate(&parts);

        let expected_cut = PI * 5.0 * 20.0 / CUT_SPEED_IPM;
        let expected_pierce = 20.0 * PIERCE_TIME_PENALTY_MIN;
        assert!((result.linear_cut_min - expected_cut).abs() < 1e-9);
        assert!((result.pierce_min - expected_pierce).abs() < 1e-9);
    }

    #[test]
    fn test_ring_adds_inner_cut_and_pierce() {
        let plain = estimate(&[Part::circle(10, 6.0)]);
        let ring = estimate(&[Part::circle(10, 6.0).with_inner_diameter(3.0)]);

        assert!(ring.linear_cut_min > plain.linear_cut_min);
        assert!((ring.pierce_min - 2.0 * plain.pierce_min).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_job_is_additive() {
        let rect = Part::rectangle(4, 10.0, 20.0);
        let circle = Part::circle(20, 5.0).with_bolt_holes(4);

        let combined = estimate(&[rect.clone(), circle.clone()]);
        let separate = estimate(&[rect]).total_hours + estimate(&[circle]).total_hours;
        assert!((combined.total_hours - separate).abs() < 1e-9);
    }

    #[test]
    fn test_incomplete_part_contributes_nothing() {
        let mut partial = Part::circle(50, 5.0);
        partial.diameter = None;

        let result = estimate(&[partial]);
        assert_eq!(result.total_minutes(), 0.0);
        assert_eq!(result.total_hours, 0.0);
    }

    #[test]
    fn test_empty_job() {
        assert_eq!(estimate_hours(&[]), 0.0);
    }
}
