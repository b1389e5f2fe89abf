//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, resource loading)
//! and delegates session effects to `state::session_context`.

pub mod content;
pub mod dashboard;
pub mod fallback;
pub mod login;
pub mod new_blog;
pub mod register;
pub mod settings;
