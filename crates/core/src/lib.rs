//! Domain types and pure helpers for the community-archive backend.
//!
//! This crate holds everything that is independent of storage and HTTP:
//! shared ID/timestamp aliases, the error taxonomy, role constants, search
//! helpers, and Open Graph HTML extraction.

pub mod error;
pub mod opengraph;
pub mod roles;
pub mod search;
pub mod types;
