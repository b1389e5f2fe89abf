//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session snapshot and the session handle from Leptos
//! context providers installed by `app::App`.

pub mod admin_layout;
pub mod protected_route;
