//! Retry Module
//!
//! Policy-driven retry with exponential backoff around opaque asynchronous
//! operations supplied by the caller.

mod engine;
mod status;

// Re-export public types
pub use engine::RetryPolicyEngine;
pub use status::{status_from_json, ErrorStatus};
