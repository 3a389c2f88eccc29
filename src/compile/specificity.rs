//! Matcher-expression specificity extraction.
//!
//! Rule expressions stay unparsed strings end to end; the only
//! introspection the compiler needs is "how specific is this matcher",
//! taken from `PathPrefix(...)`/`Path(...)` argument length and
//! `Host(...)` label count. A linear scan keeps this O(n) with no
//! regex dependency.

/// Sort key fragment for one rule expression. Larger is more specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecificityKey {
    /// Length of the longest Path/PathPrefix argument.
    pub path_len: usize,
    /// Label count of the most specific Host argument.
    pub host_labels: usize,
}

/// Derive the specificity key from an unparsed matcher expression.
pub fn specificity(rule: &str) -> SpecificityKey {
    let mut key = SpecificityKey::default();

    for arg in matcher_args(rule, "PathPrefix") {
        key.path_len = key.path_len.max(arg.len());
    }
    for arg in matcher_args(rule, "Path") {
        key.path_len = key.path_len.max(arg.len());
    }
    for arg in matcher_args(rule, "Host") {
        let labels = arg.split('.').filter(|s| !s.is_empty()).count();
        key.host_labels = key.host_labels.max(labels);
    }

    key
}

/// Extract the arguments of every `func(...)` call in the expression.
///
/// Arguments are trimmed of whitespace and backtick/quote delimiters.
fn matcher_args(rule: &str, func: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut search_from = 0;

    while let Some(found) = rule[search_from..].find(func) {
        let start = search_from + found;
        let after = start + func.len();
        search_from = after;

        // Word boundary on the left, opening paren on the right.
        // "PathPrefix(" must not count as a "Path(" call.
        let left_ok = start == 0
            || !rule[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let right_ok = rule[after..].starts_with('(');
        if !left_ok || !right_ok {
            continue;
        }

        if let Some(close) = rule[after + 1..].find(')') {
            let raw = &rule[after + 1..after + 1 + close];
            let trimmed = raw.trim().trim_matches(['`', '\'', '"']).trim();
            if !trimmed.is_empty() {
                args.push(trimmed.to_string());
            }
            search_from = after + 1 + close;
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_prefix_beats_host_only() {
        let a = specificity("Host(`x`) && PathPrefix(`/api`)");
        let b = specificity("Host(`x`)");
        assert_eq!(a.path_len, 4);
        assert_eq!(b.path_len, 0);
    }

    #[test]
    fn host_label_count() {
        let deep = specificity("Host(`api.internal.example.com`)");
        let shallow = specificity("Host(`example.com`)");
        assert_eq!(deep.host_labels, 4);
        assert_eq!(shallow.host_labels, 2);
    }

    #[test]
    fn longest_argument_wins_within_one_rule() {
        let key = specificity("PathPrefix(`/a`) || PathPrefix(`/api/v2`)");
        assert_eq!(key.path_len, 7);
    }

    #[test]
    fn path_does_not_match_inside_path_prefix() {
        // One PathPrefix call must not be double counted as Path.
        let key = specificity("PathPrefix(`/abc`)");
        assert_eq!(key.path_len, 4);
    }

    #[test]
    fn unquoted_arguments_are_accepted() {
        let key = specificity("Host(app.local) && PathPrefix(/api)");
        assert_eq!(key.path_len, 4);
        assert_eq!(key.host_labels, 2);
    }

    #[test]
    fn no_matchers_is_zero_key() {
        assert_eq!(specificity("HeadersRegexp(`X-Flag`, `on`)"), SpecificityKey::default());
    }
}
