//! Jobby Core
//!
//! Core types and pure logic for the Jobby job-application tracker.
//!
//! This crate contains:
//! - Domain types: the job record and its status workflow
//! - DTOs: request shapes for creating and updating jobs
//! - Queries: stateless filtering and aggregation over job snapshots

pub mod domain;
pub mod dto;
pub mod query;
