//! Diagnostic reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Parser / Builder / Validator
//!     → Diagnostic (severity, code, message)
//!     → collected in stage order
//!     → Report (counts + ordered diagnostics)
//! ```
//!
//! # Design Decisions
//! - Diagnostics are immutable once emitted
//! - Full pass: every stage finishes before the Report is produced,
//!   so one invocation surfaces every problem at once
//! - Severity is derived from the code, never chosen ad hoc

pub mod diagnostic;
pub mod summary;

pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use summary::Report;
