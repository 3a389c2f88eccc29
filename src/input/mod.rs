//! File loading for the CLI adapter.
//!
//! The pipeline itself never touches the filesystem; materializing
//! label sets and the middleware catalog from disk is the CLI's job,
//! and failures here are host errors, not diagnostics.

pub mod loader;

pub use loader::{load_catalog, load_label_set, InputError};
