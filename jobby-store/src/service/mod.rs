//! Service Module
//!
//! Business logic layer for the store.
//! Services sit between consumers and repositories and enforce the record invariants.

pub mod draft;
pub mod job;

// Re-export for convenience
pub use job as job_service;
