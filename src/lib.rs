//! PaperX catalogue API library.
//!
//! An HTTP JSON API over two in-memory collections (projects and
//! categories) with search, filtering, sorting and pagination.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;

pub use config::ApiConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::{Shutdown, ShutdownSignal};
