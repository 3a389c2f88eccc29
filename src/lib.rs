//! Routeforge: a label-driven routing-rule compiler and validator.
//!
//! Takes per-service routing intents declared as flat string labels
//! (the idiom container runtimes attach to workloads) and compiles
//! them into a consistent, conflict-free, deterministically ordered
//! routing table, with full-pass validation feedback for operators.
//!
//! # Architecture Overview
//!
//! ```text
//!   raw labels (one map per backend unit)        middleware catalog
//!        │                                              │
//!        ▼                                              │
//!   ┌─────────┐     ┌─────────┐     ┌──────────┐        │
//!   │  label  │────▶│  graph  │────▶│ validate │◀───────┤
//!   │ parser  │     │ builder │     │          │        │
//!   └─────────┘     └─────────┘     └────┬─────┘        │
//!                                        │ zero errors? │
//!                                        ▼              │
//!                                  ┌──────────┐         │
//!                                  │ compile  │◀────────┘
//!                                  └────┬─────┘
//!                                       ▼
//!        Report (all diagnostics) + RoutingTable
//! ```
//!
//! The pipeline is pure computation: no I/O, no shared mutable state,
//! always terminates. The `input` module is the CLI-side adapter that
//! materializes label files from disk before invoking the pipeline.

// Compile pipeline stages
pub mod compile;
pub mod graph;
pub mod label;
pub mod report;
pub mod validate;

// Pipeline entry point
pub mod pipeline;

// CLI-side file adapter
pub mod input;

pub use compile::{RoutingTable, TableEntry};
pub use graph::{MiddlewareCatalog, MiddlewareCategory};
pub use label::{LabelSet, ParserOptions, RoutingIntent, ServiceTarget};
pub use pipeline::{compile_unit, compile_unit_with_options, CompileOutcome};
pub use report::{Diagnostic, DiagnosticCode, Report, Severity};
pub use validate::ValidationPolicy;
