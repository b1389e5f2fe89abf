//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the plain data consumers observe; `session_context` owns
//! the transitions and the effects (token store, profile endpoint) behind
//! them.

pub mod session;
pub mod session_context;
