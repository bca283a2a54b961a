//! # Quote Job Container
//!
//! The `QuoteJob` struct is the root container a front end edits: the part
//! list, the active material, and job metadata. It is a convenience layer
//! over the engine - quoting itself needs only a part slice and a material.
//!
//! ## Structure
//!
//! ```text
//! QuoteJob
//! ├── meta: JobMetadata (customer, job id, timestamps)
//! ├── parts: HashMap<Uuid, Part> (the job's line items)
//! └── material: Material (the active stock definition)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::job::QuoteJob;
//! use quote_core::parts::Part;
//!
//! let mut job = QuoteJob::new("Acme Seals", "26-014");
//! job.add_part(Part::rectangle(4, 10.0, 20.0));
//!
//! let quote = job.quote();
//! assert!(quote.total_cost > 0.0);
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::quote::{calculate, Quote};
use crate::materials::Material;
use crate::parts::Part;

/// Job metadata: who the quote is for and when it was touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMetadata {
    /// Customer name
    pub customer: String,

    /// Job/quote number (e.g., "26-014")
    pub job_id: String,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,

    /// Last modification timestamp (UTC)
    pub modified: DateTime<Utc>,
}

/// Root container for one quoting session.
///
/// Parts are stored in a flat UUID-keyed map so front ends get stable
/// references for list display regardless of insertion order. The engine
/// itself never sees the ids - they exist purely for the surrounding layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteJob {
    /// Job metadata (customer, job id, timestamps)
    pub meta: JobMetadata,

    /// All line items, keyed by UUID
    pub parts: HashMap<Uuid, Part>,

    /// The active stock definition
    pub material: Material,
}

impl QuoteJob {
    /// Create a new empty job with the default stocked sheet material.
    pub fn new(customer: impl Into<String>, job_id: impl Into<String>) -> Self {
        let now = Utc::now();
        QuoteJob {
            meta: JobMetadata {
                customer: customer.into(),
                job_id: job_id.into(),
                created: now,
                modified: now,
            },
            parts: HashMap::new(),
            material: Material::default(),
        }
    }

    /// Add a part to the job. Returns the UUID assigned to it.
    pub fn add_part(&mut self, part: Part) -> Uuid {
        let id = Uuid::new_v4();
        self.parts.insert(id, part);
        self.touch();
        id
    }

    /// Remove a part by UUID. Returns the removed part if it existed.
    pub fn remove_part(&mut self, id: &Uuid) -> Option<Part> {
        let part = self.parts.remove(id);
        if part.is_some() {
            self.touch();
        }
        part
    }

    /// Get a part by UUID.
    pub fn get_part(&self, id: &Uuid) -> Option<&Part> {
        self.parts.get(id)
    }

    /// Replace the active material.
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
        self.touch();
    }

    /// Number of line items.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Quote the job as it currently stands.
    pub fn quote(&self) -> Quote {
        let parts: Vec<Part> = self.parts.values().cloned().collect();
        calculate(&parts, &self.material)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_parts() {
        let mut job = QuoteJob::new("Acme Seals", "26-014");
        let id = job.add_part(Part::rectangle(4, 10.0, 20.0));
        assert_eq!(job.part_count(), 1);
        assert!(job.get_part(&id).is_some());

        let removed = job.remove_part(&id);
        assert!(removed.is_some());
        assert_eq!(job.part_count(), 0);
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut job = QuoteJob::new("Acme Seals", "26-014");
        let created = job.meta.created;
        job.add_part(Part::circle(20, 5.0));
        assert!(job.meta.modified >= created);
    }

    #[test]
    fn test_quote_matches_direct_calculation() {
        let mut job = QuoteJob::new("Acme Seals", "26-014");
        job.add_part(Part::rectangle(4, 10.0, 20.0));

        let direct = calculate(
            &job.parts.values().cloned().collect::<Vec<_>>(),
            &job.material,
        );
        assert_eq!(job.quote(), direct);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut job = QuoteJob::new("Acme Seals", "26-014");
        job.add_part(Part::circle(8, 6.0).with_bolt_holes(4));

        let json = serde_json::to_string_pretty(&job).unwrap();
        let roundtrip: QuoteJob = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.part_count(), 1);
        assert_eq!(roundtrip.meta.customer, "Acme Seals");
    }
}
