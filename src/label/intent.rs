//! Typed routing-intent records produced by the parser.

use serde::Serialize;

/// Where a fragment was declared: unit index, then order of first
/// mention within that unit. Used as the declaration-order tie-break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Origin {
    pub unit: usize,
    pub order: usize,
}

/// One declared routing rule, assembled from all labels sharing a
/// router name.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingIntent {
    pub router_name: String,

    /// Unparsed matcher expression. `Some("")` is the disabled-route
    /// sentinel used by production overrides to suppress a route.
    pub rule_expression: Option<String>,

    /// Symbolic listener name (e.g. "web" vs "websecure").
    pub entry_point: Option<String>,

    /// Service name this router dispatches to; resolved by the builder.
    pub service_ref: Option<String>,

    /// Middleware names in declared order. Order is evaluation order.
    pub middleware_refs: Vec<String>,

    pub tls_enabled: bool,
    pub tls_cert_resolver: Option<String>,

    #[serde(skip)]
    pub origin: Origin,
}

impl RoutingIntent {
    pub fn new(router_name: impl Into<String>, origin: Origin) -> Self {
        Self {
            router_name: router_name.into(),
            rule_expression: None,
            entry_point: None,
            service_ref: None,
            middleware_refs: Vec::new(),
            tls_enabled: false,
            tls_cert_resolver: None,
            origin,
        }
    }

    /// Disabled routes are excluded from validation and compilation.
    pub fn is_disabled(&self) -> bool {
        matches!(&self.rule_expression, Some(rule) if rule.is_empty())
    }
}

/// A backend destination routers dispatch to.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceTarget {
    pub service_name: String,

    /// Must be present before any referencing router is valid.
    pub load_balancer_port: Option<u16>,

    pub health_check: Option<HealthCheck>,

    #[serde(skip)]
    pub origin: Origin,
}

impl ServiceTarget {
    pub fn new(service_name: impl Into<String>, origin: Origin) -> Self {
        Self {
            service_name: service_name.into(),
            load_balancer_port: None,
            health_check: None,
            origin,
        }
    }
}

/// Optional health probe declaration on a service.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthCheck {
    pub path: Option<String>,
    pub interval_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}
