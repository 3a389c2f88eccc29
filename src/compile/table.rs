//! The compiled routing table.

use serde::Serialize;

/// One dispatch rule in the compiled table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    /// 1-based position after specificity sorting.
    pub priority_rank: usize,
    pub entry_point: String,
    pub rule_expression: String,
    pub service_name: String,
    pub port: u16,
    /// Middleware chain in evaluation order.
    pub middlewares: Vec<String>,
}

impl std::fmt::Display for TableEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} -> {}:{} [{}]",
            self.priority_rank,
            self.entry_point,
            self.rule_expression,
            self.service_name,
            self.port,
            self.middlewares.join(",")
        )
    }
}

/// The ordered dispatch table for one compile unit.
///
/// Built once per compile pass, immutable afterward; a re-compile
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RoutingTable {
    entries: Vec<TableEntry>,
}

impl RoutingTable {
    pub(crate) fn from_entries(entries: Vec<TableEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One line per entry, the rendering used in logs and tests.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(TableEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for RoutingTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_rendering() {
        let entry = TableEntry {
            priority_rank: 1,
            entry_point: "web".to_string(),
            rule_expression: "Host(`app.local`)".to_string(),
            service_name: "svc".to_string(),
            port: 3000,
            middlewares: vec!["secure-headers".to_string(), "rate-limit".to_string()],
        };
        assert_eq!(
            entry.to_string(),
            "1 web Host(`app.local`) -> svc:3000 [secure-headers,rate-limit]"
        );
    }
}
