//! Text and enumerated value handling.

/// Trimmed text, or `None` when nothing is left.
pub fn to_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Match a value against an allowed set, ignoring case.
///
/// Returns the canonical spelling from `allowed`.
pub fn parse_enum(value: &str, allowed: &[&'static str]) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    allowed
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        assert_eq!(to_text("  Acme Corp "), Some("Acme Corp".to_string()));
        assert_eq!(to_text(""), None);
        assert_eq!(to_text(" \t "), None);
    }

    #[test]
    fn test_parse_enum() {
        const STATUSES: &[&str] = &["Pending", "Filed", "Voided"];
        assert_eq!(parse_enum("filed", STATUSES), Some("Filed"));
        assert_eq!(parse_enum(" VOIDED ", STATUSES), Some("Voided"));
        assert_eq!(parse_enum("Paid", STATUSES), None);
        assert_eq!(parse_enum("", STATUSES), None);
    }
}
