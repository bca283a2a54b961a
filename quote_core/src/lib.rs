//! # quote_core - Die-Cut Gasket Quoting Engine
//!
//! `quote_core` estimates manufacturing cost and cut time for a batch of
//! flat die-cut parts (gaskets) cut from sheet or roll stock. It is the
//! computational heart of CutQuote: nesting yield heuristics, a labor-time
//! model, and three material billing strategies combined into a single
//! quote.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions over immutable inputs, recomputed from
//!   scratch on every call
//! - **JSON-First**: all types implement Serialize/Deserialize in the form
//!   layer's wire format
//! - **Defensive-by-default**: malformed inputs degrade to zero-valued
//!   contributions inside the engine; structured validation errors are a
//!   separate, opt-in surface for boundary layers
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::calculations::quote::calculate;
//! use quote_core::materials::Material;
//! use quote_core::parts::Part;
//!
//! let material = Material::sheet("1/8 Neoprene", 36.0, 36.0, 1000.0, true)
//!     .with_spacing(0.5, 0.25);
//! let parts = vec![
//!     Part::rectangle(4, 10.0, 20.0),
//!     Part::circle(8, 6.0).with_inner_diameter(3.0).with_bolt_holes(4),
//! ];
//!
//! let quote = calculate(&parts, &material);
//! println!("${:.2} / {:.2} hours", quote.total_cost, quote.total_time);
//! ```
//!
//! ## Modules
//!
//! - [`parts`] - part data model (rectangles, circles, cut profiles)
//! - [`materials`] - stock material model (sheet/roll, spacings, cost)
//! - [`calculations`] - nesting yield, labor time, and the quote orchestrator
//! - [`billing`] - the three material billing strategies
//! - [`job`] - the job container front ends edit
//! - [`engine`] - worker-thread invocation boundary with request tokens
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured validation error types

pub mod billing;
pub mod calculations;
pub mod engine;
pub mod errors;
pub mod job;
pub mod materials;
pub mod parts;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use billing::BillingMethod;
pub use calculations::{calculate, LaborEstimate, Quote, SheetYield};
pub use engine::{QuoteEngine, QuoteRequest, QuoteResponse};
pub use errors::{QuoteError, QuoteResult};
pub use job::QuoteJob;
pub use materials::{Material, MaterialKind};
pub use parts::{Part, Shape};
