//! Commands module - operations as library functions
//!
//! These are used by the interactive console and by tests.

pub mod project;
