//! Availability decision: is the desired variant among the offered
//! options?

use crate::monitor::models::ProductSpec;

/// String comparison mode for option matching.
///
/// Labels are already trimmed by extraction; `Exact` does no further
/// normalization. `IgnoreCase` exists for stores that change label
/// casing between page revisions (`case_insensitive` in config).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Exact,
    IgnoreCase,
}

/// Returns true iff the preferred color appears in `colors` AND the
/// desired size appears in `sizes`. Pure, order-independent, no
/// failure modes.
pub fn evaluate(colors: &[String], sizes: &[String], product: &ProductSpec, mode: MatchMode) -> bool {
    contains(colors, &product.preferred_color, mode) && contains(sizes, &product.size, mode)
}

fn contains(options: &[String], wanted: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exact => options.iter().any(|option| option == wanted),
        MatchMode::IgnoreCase => options.iter().any(|option| option.eq_ignore_ascii_case(wanted)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> ProductSpec {
        ProductSpec {
            name: "Alpine Jacket".to_string(),
            preferred_color: "Red".to_string(),
            size: "L".to_string(),
        }
    }

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_truth_table_over_membership() {
        let product = product();

        // color present, size present
        assert!(evaluate(
            &labels(&["Black", "Red"]),
            &labels(&["M", "L"]),
            &product,
            MatchMode::Exact
        ));

        // color present, size absent
        assert!(!evaluate(
            &labels(&["Black", "Red"]),
            &labels(&["M"]),
            &product,
            MatchMode::Exact
        ));

        // color absent, size present
        assert!(!evaluate(&labels(&["Black"]), &labels(&["M", "L"]), &product, MatchMode::Exact));

        // color absent, size absent
        assert!(!evaluate(&labels(&["Black"]), &labels(&["M"]), &product, MatchMode::Exact));
    }

    #[test]
    fn test_empty_option_lists_never_match() {
        let product = product();
        assert!(!evaluate(&[], &labels(&["L"]), &product, MatchMode::Exact));
        assert!(!evaluate(&labels(&["Red"]), &[], &product, MatchMode::Exact));
        assert!(!evaluate(&[], &[], &product, MatchMode::Exact));
    }

    #[test]
    fn test_exact_mode_is_case_sensitive() {
        let product = product();
        assert!(!evaluate(&labels(&["red"]), &labels(&["L"]), &product, MatchMode::Exact));
        assert!(!evaluate(&labels(&["RED"]), &labels(&["L"]), &product, MatchMode::Exact));
    }

    #[test]
    fn test_exact_mode_is_whitespace_sensitive() {
        // Extraction trims leading/trailing whitespace, but inner
        // whitespace differences are meaningful.
        let product = ProductSpec {
            name: "x".to_string(),
            preferred_color: "Navy Blue".to_string(),
            size: "L".to_string(),
        };
        assert!(!evaluate(&labels(&["Navy  Blue"]), &labels(&["L"]), &product, MatchMode::Exact));
        assert!(evaluate(&labels(&["Navy Blue"]), &labels(&["L"]), &product, MatchMode::Exact));
    }

    #[test]
    fn test_ignore_case_mode() {
        let product = product();
        assert!(evaluate(&labels(&["RED"]), &labels(&["l"]), &product, MatchMode::IgnoreCase));
        assert!(!evaluate(&labels(&["Blue"]), &labels(&["l"]), &product, MatchMode::IgnoreCase));
    }

    #[test]
    fn test_order_independent() {
        let product = product();
        assert!(evaluate(
            &labels(&["Red", "Black", "Green"]),
            &labels(&["XL", "L", "S"]),
            &product,
            MatchMode::Exact
        ));
    }

    #[test]
    fn test_default_mode_is_exact() {
        assert_eq!(MatchMode::default(), MatchMode::Exact);
    }
}
