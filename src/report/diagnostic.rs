//! Diagnostic types emitted by the compile pipeline.

use serde::Serialize;

/// How serious a diagnostic is.
///
/// Errors block the compiler stage; warnings never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Stable machine-readable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticCode {
    /// Label key or value did not parse; the label was skipped.
    MalformedLabel,
    /// Same router name declared by more than one unit.
    DuplicateRouter,
    /// Same service name declared by more than one unit.
    DuplicateService,
    /// Router references a service no unit declares.
    UnresolvedService,
    /// Service declared but never referenced by any router.
    OrphanService,
    /// Router is missing required fields.
    IncompleteRouter,
    /// Two or more routers claim the same (rule, entry point) pair.
    RouteCollision,
    /// TLS-facing router has no security-headers middleware.
    MissingSecurityHeaders,
    /// Middleware name absent from the caller-supplied catalog.
    UnknownMiddlewareReference,
}

impl DiagnosticCode {
    /// Severity is a property of the code, not of the call site.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticCode::DuplicateRouter
            | DiagnosticCode::DuplicateService
            | DiagnosticCode::UnresolvedService
            | DiagnosticCode::IncompleteRouter
            | DiagnosticCode::RouteCollision
            | DiagnosticCode::UnknownMiddlewareReference => Severity::Error,
            DiagnosticCode::MalformedLabel
            | DiagnosticCode::OrphanService
            | DiagnosticCode::MissingSecurityHeaders => Severity::Warning,
        }
    }
}

/// One finding from one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    /// Router the finding is attached to, when one applies.
    pub router_name: Option<String>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            router_name: None,
        }
    }

    pub fn for_router(
        code: DiagnosticCode,
        router_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            router_name: Some(router_name.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.router_name {
            Some(router) => write!(
                f,
                "{}[{:?}] router '{}': {}",
                level, self.code, router, self.message
            ),
            None => write!(f, "{}[{:?}]: {}", level, self.code, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_code() {
        let d = Diagnostic::new(DiagnosticCode::RouteCollision, "collides");
        assert!(d.is_error());

        let d = Diagnostic::new(DiagnosticCode::OrphanService, "unused");
        assert_eq!(d.severity, Severity::Warning);
    }

    #[test]
    fn display_includes_router_name() {
        let d = Diagnostic::for_router(DiagnosticCode::IncompleteRouter, "api", "missing rule");
        let rendered = d.to_string();
        assert!(rendered.contains("router 'api'"));
        assert!(rendered.starts_with("error[IncompleteRouter]"));
    }
}
