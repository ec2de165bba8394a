//! Status Code Extraction
//!
//! Failure values arrive in heterogeneous shapes depending on the transport
//! that produced them. The retry policy only cares about one thing: an optional
//! numeric status code. This module is the single seam where that extraction
//! happens, keeping the engine decoupled from any particular error type.

use serde_json::Value;

// == Error Status Trait ==
/// Exposes an optional status code on an operation's failure value.
///
/// The default implementation returns `None`, which the engine treats as
/// "unknown — retry anyway": transport-level failures such as timeouts and
/// connection resets carry no status code but are typically transient.
pub trait ErrorStatus {
    /// Status code carried by this failure, if any.
    fn status_code(&self) -> Option<u16> {
        None
    }
}

// == JSON Extraction ==
/// Extracts a status code from a JSON-shaped failure payload.
///
/// Checks the two conventional locations in order, first present wins:
/// 1. `response.status` (wrapped transport responses)
/// 2. `statusCode` (flat error objects)
///
/// Returns `None` when neither field is present or the value does not fit a
/// status code.
pub fn status_from_json(payload: &Value) -> Option<u16> {
    payload
        .pointer("/response/status")
        .or_else(|| payload.get("statusCode"))
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
}
