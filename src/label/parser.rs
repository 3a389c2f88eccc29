//! Dotted-key label parsing.
//!
//! # Responsibilities
//! - Split `namespace.kind.<name>.<attribute>[.<subattribute>]` keys
//! - Assemble per-name RoutingIntent / ServiceTarget fragments
//! - Emit MalformedLabel diagnostics for keys or values that do not parse
//!
//! # Design Decisions
//! - Keys outside the configured namespace are foreign labels and are
//!   ignored without a diagnostic
//! - A malformed label skips that label only; parsing continues
//! - Value parse failures (bad port, bad bool) get the same
//!   skip-and-report treatment as key failures

use tracing::debug;

use crate::label::intent::{HealthCheck, Origin, RoutingIntent, ServiceTarget};
use crate::label::LabelSet;
use crate::report::{Diagnostic, DiagnosticCode};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// First key segment a label must carry to be ours.
    pub namespace: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            namespace: "proxy".to_string(),
        }
    }
}

/// Fragments parsed out of one backend unit's label set.
#[derive(Debug, Clone, Default)]
pub struct ParsedUnit {
    pub intents: Vec<RoutingIntent>,
    pub services: Vec<ServiceTarget>,
}

/// Parse one unit's labels into typed fragments.
///
/// Diagnostics are appended to `diagnostics`; this function never fails.
pub fn parse_unit(
    unit_index: usize,
    labels: &LabelSet,
    options: &ParserOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> ParsedUnit {
    let mut unit = ParsedUnit::default();
    let mut next_order = 0usize;

    for (key, value) in labels {
        let mut segments = key.split('.');
        if segments.next() != Some(options.namespace.as_str()) {
            // Foreign label (some other tool's namespace).
            continue;
        }

        let rest: Vec<&str> = segments.collect();
        if rest.len() < 3 {
            diagnostics.push(malformed(key, "expected namespace.kind.<name>.<attribute>"));
            continue;
        }
        let (kind, name) = (rest[0], rest[1]);
        let attribute = &rest[2..];

        match kind {
            "router" => {
                parse_router_attribute(&mut unit, &mut next_order, unit_index, name, attribute, key, value, diagnostics);
            }
            "service" => {
                parse_service_attribute(&mut unit, &mut next_order, unit_index, name, attribute, key, value, diagnostics);
            }
            other => {
                diagnostics.push(malformed(
                    key,
                    format!("unknown kind '{}' (expected 'router' or 'service')", other),
                ));
            }
        }
    }

    debug!(
        unit = unit_index,
        routers = unit.intents.len(),
        services = unit.services.len(),
        "parsed label unit"
    );
    unit
}

#[allow(clippy::too_many_arguments)]
fn parse_router_attribute(
    unit: &mut ParsedUnit,
    next_order: &mut usize,
    unit_index: usize,
    name: &str,
    attribute: &[&str],
    key: &str,
    value: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match attribute {
        ["rule"] => {
            // Empty value is the disabled-route sentinel, kept as-is.
            let intent = router_entry(unit, next_order, unit_index, name);
            intent.rule_expression = Some(value.trim().to_string());
        }
        ["entrypoint"] => {
            let intent = router_entry(unit, next_order, unit_index, name);
            intent.entry_point = Some(value.trim().to_string());
        }
        ["service"] => {
            let intent = router_entry(unit, next_order, unit_index, name);
            intent.service_ref = Some(value.trim().to_string());
        }
        ["middlewares"] => {
            let intent = router_entry(unit, next_order, unit_index, name);
            intent.middleware_refs = value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        ["tls"] => match parse_bool(value) {
            Some(enabled) => {
                let intent = router_entry(unit, next_order, unit_index, name);
                intent.tls_enabled = enabled;
            }
            None => {
                diagnostics.push(malformed(key, "value must be 'true' or 'false'"));
            }
        },
        ["tls", "certresolver"] => {
            // Declaring a resolver implies the router terminates TLS.
            let intent = router_entry(unit, next_order, unit_index, name);
            intent.tls_cert_resolver = Some(value.trim().to_string());
            intent.tls_enabled = true;
        }
        _ => {
            diagnostics.push(malformed(
                key,
                format!("unknown router attribute '{}'", attribute.join(".")),
            ));
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn parse_service_attribute(
    unit: &mut ParsedUnit,
    next_order: &mut usize,
    unit_index: usize,
    name: &str,
    attribute: &[&str],
    key: &str,
    value: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match attribute {
        ["port"] => {
            let service = service_entry(unit, next_order, unit_index, name);
            match value.trim().parse::<u16>() {
                Ok(port) if port > 0 => service.load_balancer_port = Some(port),
                _ => diagnostics.push(malformed(key, "value must be a positive port number")),
            }
        }
        ["healthcheck", "path"] => {
            let service = service_entry(unit, next_order, unit_index, name);
            health_check(service).path = Some(value.trim().to_string());
        }
        ["healthcheck", "interval"] => {
            let service = service_entry(unit, next_order, unit_index, name);
            match value.trim().parse::<u64>() {
                Ok(secs) => health_check(service).interval_secs = Some(secs),
                Err(_) => diagnostics.push(malformed(key, "value must be whole seconds")),
            }
        }
        ["healthcheck", "timeout"] => {
            let service = service_entry(unit, next_order, unit_index, name);
            match value.trim().parse::<u64>() {
                Ok(secs) => health_check(service).timeout_secs = Some(secs),
                Err(_) => diagnostics.push(malformed(key, "value must be whole seconds")),
            }
        }
        _ => {
            diagnostics.push(malformed(
                key,
                format!("unknown service attribute '{}'", attribute.join(".")),
            ));
        }
    }
}

/// Get or create the intent fragment for `name`, preserving first-mention order.
fn router_entry<'a>(
    unit: &'a mut ParsedUnit,
    next_order: &mut usize,
    unit_index: usize,
    name: &str,
) -> &'a mut RoutingIntent {
    let index = match unit.intents.iter().position(|i| i.router_name == name) {
        Some(index) => index,
        None => {
            let origin = Origin {
                unit: unit_index,
                order: bump(next_order),
            };
            unit.intents.push(RoutingIntent::new(name, origin));
            unit.intents.len() - 1
        }
    };
    &mut unit.intents[index]
}

fn service_entry<'a>(
    unit: &'a mut ParsedUnit,
    next_order: &mut usize,
    unit_index: usize,
    name: &str,
) -> &'a mut ServiceTarget {
    let index = match unit.services.iter().position(|s| s.service_name == name) {
        Some(index) => index,
        None => {
            let origin = Origin {
                unit: unit_index,
                order: bump(next_order),
            };
            unit.services.push(ServiceTarget::new(name, origin));
            unit.services.len() - 1
        }
    };
    &mut unit.services[index]
}

fn health_check(service: &mut ServiceTarget) -> &mut HealthCheck {
    service.health_check.get_or_insert_with(HealthCheck::default)
}

fn bump(counter: &mut usize) -> usize {
    let current = *counter;
    *counter += 1;
    current
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn malformed(key: &str, detail: impl Into<String>) -> Diagnostic {
    Diagnostic::new(
        DiagnosticCode::MalformedLabel,
        format!("label '{}': {}", key, detail.into()),
    )
}
