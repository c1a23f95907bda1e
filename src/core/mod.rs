//! Core utilities shared across the service
//!
//! - `coerce`: defensive conversion of loosely typed upstream values
//! - `http`: construction of the shared HTTP client

pub mod coerce;
pub mod http;

pub use coerce::{safe_float, safe_int};
pub use http::build_http_client;
