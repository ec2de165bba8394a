//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - TTL purge: removes expired cache entries at a fixed interval

mod purge;

pub use purge::PurgeTask;
