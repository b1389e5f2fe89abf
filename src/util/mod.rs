//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, navigation) from page
//! and component logic so the decisions stay testable off the browser.

pub mod route_guard;
pub mod token_store;
