//! Conflict and completeness validation subsystem.
//!
//! # Design Decisions
//! - The validator is a pure function of (graph, catalog, policy):
//!   same input, same diagnostics, no I/O, no hidden state
//! - All findings are collected in one pass; nothing aborts early
//! - Policy rules are injected, not hardcoded, so deployments can
//!   vary without touching the core

pub mod policy;
pub mod validator;

pub use policy::ValidationPolicy;
pub use validator::validate;
