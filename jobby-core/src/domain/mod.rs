//! Core domain types
//!
//! This module contains the job record and the status workflow shared by
//! the store (which owns and mutates records) and its consumers (which only
//! read snapshots).

pub mod job;
