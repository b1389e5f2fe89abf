//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and response normalization, and `types` defines
//! the wire schema and the error taxonomy.

pub mod api;
pub mod types;
