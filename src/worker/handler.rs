//! Worker thread implementation for asynchronous catalog loading.
//!
//! This module implements the Zellij worker thread interface. The seed
//! catalog is read here, on a separate thread spawned by Zellij, so the
//! main plugin thread never blocks on file I/O. It includes distributed
//! tracing support for cross-thread observability.

use crate::domain::Product;
use crate::infrastructure::paths;
use crate::storage::backend::CatalogSource;
use crate::storage::JsonCatalog;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for catalog loading.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the main plugin thread.
#[derive(Serialize, Deserialize, Default)]
pub struct ZatalogWorker {}

impl ZatalogWorker {
    /// Resolves the catalog source for a load request.
    ///
    /// A configured override path (tilde-expanded for the sandbox) takes
    /// precedence; otherwise the default location in the plugin data
    /// directory is used. Either way a missing file falls back to the
    /// embedded catalog inside the source itself.
    fn resolve_source(catalog_file: Option<&str>) -> JsonCatalog {
        let path = catalog_file.map_or_else(
            || paths::get_data_dir().join("catalog.json"),
            |file| PathBuf::from(paths::expand_tilde(file)),
        );
        JsonCatalog::new(path)
    }

    /// Handles the `LoadCatalog` message.
    ///
    /// Loads the seed records and converts them to domain products.
    fn handle_load_catalog(catalog_file: Option<&str>) -> WorkerResponse {
        let source = Self::resolve_source(catalog_file);
        match source.load_products() {
            Ok(records) => {
                let products: Vec<Product> = records.into_iter().map(Product::from).collect();
                tracing::debug!(product_count = products.len(), "catalog loaded in worker");
                WorkerResponse::CatalogLoaded { products }
            }
            Err(e) => {
                tracing::debug!(error = %e, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("load catalog: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information in the message, allowing spans created in the worker
    /// thread to be linked to their parent spans in the main thread.
    ///
    /// Returns a context guard that must be held for the duration of the
    /// operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let WorkerMessage::LoadCatalog { trace_context, .. } = message;
        let trace_context = trace_context.as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// Dispatches on the message variant, attaching trace context and a
    /// tracing span for the operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog { catalog_file, .. } => {
                Self::handle_load_catalog(catalog_file.as_deref())
            }
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring
/// spans from both threads land in the same trace file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ZatalogWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Deserializes the message payload
    /// 3. Processes the message via `handle_message`
    /// 4. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message = match WorkerMessage::from_payload(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "dropping malformed worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match response.to_payload() {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_catalog_from_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"{
                "version": 1,
                "products": [
                    {"id": 1, "title": "Red Shoe", "description": "", "price": 20.0, "image": "", "tags": ["shoe"]}
                ]
            }"#,
        )
        .unwrap();

        let mut worker = ZatalogWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadCatalog {
            catalog_file: Some(path.to_string_lossy().into_owned()),
            trace_context: None,
        });

        match response {
            WorkerResponse::CatalogLoaded { products } => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].title, "Red Shoe");
            }
            WorkerResponse::Error { message } => panic!("unexpected error: {message}"),
        }
    }

    #[test]
    fn malformed_catalog_reports_an_error_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let mut worker = ZatalogWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadCatalog {
            catalog_file: Some(path.to_string_lossy().into_owned()),
            trace_context: None,
        });

        assert!(matches!(response, WorkerResponse::Error { .. }));
    }
}
