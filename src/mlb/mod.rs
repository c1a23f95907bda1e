//! Access to the MLB stats service and reshaping of what it returns.

pub mod http;
pub mod normalize;
pub mod resolve;
pub mod summary;
pub mod types;
