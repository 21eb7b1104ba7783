//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, per-request span)
//!     → api/ (route to resource handler)
//!     → JSON response (envelope, record, or {"message"})
//! ```

pub mod request;
pub mod server;

pub use request::{make_request_span, X_REQUEST_ID};
pub use server::{apply_layers, AppState, HttpServer};
