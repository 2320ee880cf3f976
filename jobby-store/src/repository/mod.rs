//! Repository Module
//!
//! Data access layer for the store. Repositories own the collection and
//! apply each mutation under a single lock acquisition; they contain no
//! validation or business rules.

pub mod job;

// Re-export for convenience
pub use job::{InMemoryJobRepository, JobRepository};
