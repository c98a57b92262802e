//! Boolean flag parsing.

const TRUE_VALUES: [&str; 5] = ["true", "t", "yes", "y", "1"];
const FALSE_VALUES: [&str; 5] = ["false", "f", "no", "n", "0"];

/// Parse a flag column such as `Void` or `Active Product`.
///
/// Matching is case-insensitive after trimming; anything outside the two
/// fixed sets is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    let lowered = value.trim().to_ascii_lowercase();
    if TRUE_VALUES.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_VALUES.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_values() {
        for value in ["true", "TRUE", "t", "yes", "Y", "1", " Yes "] {
            assert_eq!(parse_bool(value), Some(true), "{value:?}");
        }
    }

    #[test]
    fn test_false_values() {
        for value in ["false", "False", "f", "no", "N", "0", "  no"] {
            assert_eq!(parse_bool(value), Some(false), "{value:?}");
        }
    }

    #[test]
    fn test_invalid() {
        for value in ["", "maybe", "2", "tru", "yess", "-1"] {
            assert_eq!(parse_bool(value), None, "{value:?}");
        }
    }
}
