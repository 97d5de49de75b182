//! Login-gated terminal task dashboard.
//!
//! The `domain` module is the single source of truth for the session gate
//! and the task list store; `infra` persists the session flag; `app` wires
//! both into one state container; `ui` renders it.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;

// Re-export for convenience
pub use infra::db;
