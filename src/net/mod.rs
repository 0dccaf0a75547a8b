//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `EduApi` seam and its browser implementation, `error`
//! the structured failure type, and `types` the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
