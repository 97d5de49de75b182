//! Full-screen views, one per app screen.

pub mod dashboard;
pub mod login;
