//! Aggregated validation result.

use serde::Serialize;

use crate::report::diagnostic::{Diagnostic, Severity};

/// The outcome of one full validation pass.
///
/// Any error-severity diagnostic means overall failure; warnings alone
/// mean success-with-warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub error_count: usize,
    pub warning_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics.len() - error_count;
        Self {
            error_count,
            warning_count,
            diagnostics,
        }
    }

    /// True when the compiler stage is allowed to run.
    pub fn is_success(&self) -> bool {
        self.error_count == 0
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }
        if self.is_success() {
            write!(
                f,
                "ok: 0 errors, {} warning(s)",
                self.warning_count
            )
        } else {
            write!(
                f,
                "failed: {} error(s), {} warning(s)",
                self.error_count, self.warning_count
            )
        }
    }
}
