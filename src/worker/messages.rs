//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main
//! plugin thread and the background worker thread that loads the seed
//! catalog. It also implements distributed tracing context propagation
//! across the thread boundary.

use crate::domain::error::{Result, ZatalogError};
use crate::domain::Product;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to an operation performed asynchronously. All
/// variants carry an optional trace context for distributed tracing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the seed catalog from the catalog source.
    LoadCatalog {
        /// Optional override path to the catalog file, from configuration.
        catalog_file: Option<String>,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Create a `LoadCatalog` message with the current trace context.
    #[must_use]
    pub fn load_catalog(catalog_file: Option<String>) -> Self {
        Self::LoadCatalog {
            catalog_file,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Parses a request from its JSON wire payload.
    ///
    /// # Errors
    ///
    /// Returns [`ZatalogError::Worker`] when the payload is not a valid
    /// serialized request.
    pub fn from_payload(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| ZatalogError::Worker(format!("deserialize request: {e}")))
    }

    /// Serializes the request for the plugin-to-worker IPC channel.
    ///
    /// # Errors
    ///
    /// Returns [`ZatalogError::Worker`] when serialization fails.
    pub fn to_payload(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ZatalogError::Worker(format!("serialize request: {e}")))
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The seed catalog was successfully loaded.
    CatalogLoaded {
        /// The loaded products in seed order.
        products: Vec<Product>,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    /// Parses a response from its JSON wire payload.
    ///
    /// # Errors
    ///
    /// Returns [`ZatalogError::Worker`] when the payload is not a valid
    /// serialized response.
    pub fn from_payload(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| ZatalogError::Worker(format!("deserialize response: {e}")))
    }

    /// Serializes the response for the worker-to-plugin IPC channel.
    ///
    /// # Errors
    ///
    /// Returns [`ZatalogError::Worker`] when serialization fails.
    pub fn to_payload(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ZatalogError::Worker(format!("serialize response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_round_trip_through_json() {
        let message = WorkerMessage::LoadCatalog {
            catalog_file: Some("/tmp/catalog.json".to_string()),
            trace_context: None,
        };
        let payload = message.to_payload().unwrap();
        // No trace context means the field is omitted entirely.
        assert!(!payload.contains("trace_context"));

        let parsed = WorkerMessage::from_payload(&payload).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn malformed_payloads_surface_as_worker_errors() {
        let err = WorkerMessage::from_payload("not json").unwrap_err();
        assert!(matches!(err, ZatalogError::Worker(_)));

        let err = WorkerResponse::from_payload("{\"Unknown\":{}}").unwrap_err();
        assert!(matches!(err, ZatalogError::Worker(_)));
    }
}
