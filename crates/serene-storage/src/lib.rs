//! serene-storage
//!
//! The assessment result store: an append-only collection of records keyed
//! by user. S3-backed in production, in-memory for tests and local runs.

pub mod client;
pub mod error;
pub mod objects;
pub mod record;
pub mod results;
