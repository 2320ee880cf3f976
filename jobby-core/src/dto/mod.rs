//! Data Transfer Objects
//!
//! Request shapes handed to the store by its consumers. They never carry
//! store-assigned fields (`id`, `date`).

pub mod job;
