//! # Quote Calculation
//!
//! The single entry point external collaborators invoke: combine the billing
//! strategy selected from the material with the labor estimate over the full
//! part list into one [`Quote`].
//!
//! The computation is pure and recomputed from scratch on every call - no
//! caching, no hidden state, no validation (required-field enforcement is
//! the form layer's responsibility; malformed entries degrade to zero-valued
//! contributions).
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::quote::calculate;
//! use quote_core::materials::Material;
//! use quote_core::parts::Part;
//!
//! let material = Material::default();
//! let parts = vec![Part::rectangle(4, 10.0, 20.0)];
//!
//! let quote = calculate(&parts, &material);
//! assert!(quote.total_cost > 0.0);
//! assert!(quote.total_time > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::billing::BillingMethod;
use crate::calculations::labor;
use crate::materials::Material;
use crate::parts::Part;

/// The engine's sole output: total material cost and total cut time.
///
/// ## JSON Example
///
/// ```json
/// { "totalCost": 1333.33, "totalTime": 0.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Material cost (currency; caller formats to 2 decimals)
    pub total_cost: f64,
    /// Cut time (hours; caller formats to 2 decimals)
    pub total_time: f64,
}

/// Compute a quote for a part list against the active material.
///
/// Cost comes from the billing strategy the material selects; time always
/// comes from the labor estimate over the full part list, regardless of
/// material kind.
pub fn calculate(parts: &[Part], material: &Material) -> Quote {
    let method = BillingMethod::for_material(material);

    Quote {
        total_cost: method.price(parts, material),
        total_time: labor::estimate_hours(parts),
    }
}
