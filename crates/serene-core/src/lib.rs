//! serene-core
//!
//! Pure domain types, history aggregation, and storage key conventions.
//! No AWS SDK dependency; this is the shared vocabulary of the Serene system.

pub mod error;
pub mod history;
pub mod identity;
pub mod keys;
pub mod models;
