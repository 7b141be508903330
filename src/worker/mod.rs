//! Background worker thread for asynchronous catalog loading.
//!
//! This module implements the worker thread that reads the seed catalog off
//! the main plugin thread, so rendering never blocks on file I/O. It uses
//! Zellij's worker API for cross-thread communication and includes
//! distributed tracing support for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ZatalogWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
