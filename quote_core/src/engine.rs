//! # Async Invocation Boundary
//!
//! A front end should not block its interaction thread on a quote - the
//! yield search is cheap but not free. [`QuoteEngine`] runs the calculation
//! on a dedicated worker thread behind a request/response channel pair.
//!
//! Each submission gets a fresh request token. Responses arrive in
//! completion order with the token echoed back, so a caller that fires a
//! second calculation before the first returns can discard stale responses
//! by comparing tokens (or simply keep the latest delivered result). There
//! is no cancellation primitive and no internal timeout: every computation
//! is bounded by input size and a fixed heuristic enumeration.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::engine::QuoteEngine;
//! use quote_core::materials::Material;
//! use quote_core::parts::Part;
//!
//! let engine = QuoteEngine::start();
//! let token = engine.submit(&[Part::rectangle(4, 10.0, 20.0)], &Material::default());
//!
//! let response = engine.recv().unwrap();
//! assert_eq!(response.request_id, token);
//! ```

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::quote::{calculate, Quote};
use crate::materials::Material;
use crate::parts::Part;

/// One calculation request: the full input set plus a caller-visible token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Token echoed back on the matching response
    pub request_id: Uuid,
    /// The job's part list
    pub parts: Vec<Part>,
    /// The active stock definition
    pub material: Material,
}

/// One calculation response, tagged with the originating request's token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Token from the originating [`QuoteRequest`]
    pub request_id: Uuid,
    /// The computed quote
    pub quote: Quote,
}

/// Handle to a quote worker thread.
///
/// Dropping the engine closes the request channel; the worker drains what it
/// has and exits, and the drop joins it.
pub struct QuoteEngine {
    requests: Option<Sender<QuoteRequest>>,
    responses: Receiver<QuoteResponse>,
    worker: Option<JoinHandle<()>>,
}

impl QuoteEngine {
    /// Spawn the worker thread and return a handle to it.
    pub fn start() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<QuoteRequest>();
        let (response_tx, response_rx) = mpsc::channel::<QuoteResponse>();

        let worker = thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let quote = calculate(&request.parts, &request.material);
                let response = QuoteResponse {
                    request_id: request.request_id,
                    quote,
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        QuoteEngine {
            requests: Some(request_tx),
            responses: response_rx,
            worker: Some(worker),
        }
    }

    /// Submit a calculation and get its token back immediately.
    ///
    /// The inputs are snapshotted at submission; later edits to the caller's
    /// data do not affect an in-flight request.
    pub fn submit(&self, parts: &[Part], material: &Material) -> Uuid {
        let request_id = Uuid::new_v4();
        if let Some(requests) = &self.requests {
            let request = QuoteRequest {
                request_id,
                parts: parts.to_vec(),
                material: material.clone(),
            };
            // The worker only goes away when the engine is dropped, so a
            // failed send means the token will simply never get a response.
            let _ = requests.send(request);
        }
        request_id
    }

    /// Take the next completed response without blocking.
    pub fn try_recv(&self) -> Option<QuoteResponse> {
        self.responses.try_recv().ok()
    }

    /// Block until the next completed response (None if the worker is gone).
    pub fn recv(&self) -> Option<QuoteResponse> {
        self.responses.recv().ok()
    }
}

impl Drop for QuoteEngine {
    fn drop(&mut self) {
        // Closing the request channel ends the worker's receive loop.
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
