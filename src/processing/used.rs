//! Used-address extraction from spreadsheet cells.

use crate::models::Prefix;
use std::collections::HashSet;

/// Collect the distinct string cells that start with the exact prefix.
///
/// Empty and non-string cells arrive as `None` and never match. Matching
/// is case-sensitive with no whitespace handling, so `"10.0.0.05"` and
/// `"10.0.0.5"` stay distinct.
pub fn used_ips(cells: &[Option<String>], prefix: &Prefix) -> HashSet<String> {
    cells
        .iter()
        .flatten()
        .filter(|value| value.starts_with(prefix.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_filters_by_prefix_and_deduplicates() {
        let cells = vec![
            cell("10.0.0.5"),
            cell("10.0.0.5"),
            cell("10.0.0.6"),
            cell("11.0.0.9"),
            None,
        ];

        let used = used_ips(&cells, &Prefix::normalize("10.0.0"));
        assert_eq!(used.len(), 2);
        assert!(used.contains("10.0.0.5"));
        assert!(used.contains("10.0.0.6"));
        assert!(!used.contains("11.0.0.9"));
    }

    #[test]
    fn test_prefix_match_is_exact() {
        // "10.0.1.7" shares the leading characters but not the full prefix
        let cells = vec![cell("10.0.1.7"), cell("10.0.0.7 "), cell(" 10.0.0.8")];

        let used = used_ips(&cells, &Prefix::normalize("10.0.0."));
        // trailing whitespace still matches at position 0, leading does not
        assert_eq!(used.len(), 1);
        assert!(used.contains("10.0.0.7 "));
    }

    #[test]
    fn test_empty_column() {
        let cells: Vec<Option<String>> = vec![None, None];
        assert!(used_ips(&cells, &Prefix::normalize("10.0.0.")).is_empty());
    }
}
