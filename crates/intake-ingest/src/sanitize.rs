//! Cell and header sanitization for spreadsheet-exported CSV.
//!
//! Exports from ERP and CRM tools wrap values in formula syntax (`="00123"`),
//! stray quotes, and vendor prefixes (`netsuite:`). These helpers strip them
//! so the same cleaning applies to header cells and data cells alike.

const VENDOR_PREFIX: &str = "netsuite:";

/// Removes export artifacts from a single cell.
///
/// Idempotent: `clean_cell(&clean_cell(x)) == clean_cell(x)`.
pub fn clean_cell(value: &str) -> String {
    let mut current = value;
    loop {
        let next = clean_pass(current);
        // Every pass returns a subslice; equal length means nothing changed.
        if next.len() == current.len() {
            return next.to_string();
        }
        current = next;
    }
}

/// Cleans a header cell and folds it to lower case.
pub fn clean_header(value: &str) -> String {
    clean_cell(value).to_lowercase()
}

/// Compares two header rows cell by cell after cleaning and case folding.
pub fn headers_equal<A, B>(left: &[A], right: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(a, b)| clean_header(a.as_ref()) == clean_header(b.as_ref()))
}

fn clean_pass(value: &str) -> &str {
    let mut value = value.trim();

    if value.len() >= 3 && value.starts_with("=\"") && value.ends_with('"') {
        value = &value[2..value.len() - 1];
    } else if let Some(rest) = value.strip_prefix('=') {
        value = rest;
    }

    value = strip_matching_quotes(value);
    value.strip_prefix(VENDOR_PREFIX).unwrap_or(value)
}

fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values_untouched() {
        assert_eq!(clean_cell("Acme Corp"), "Acme Corp");
        assert_eq!(clean_cell(""), "");
        assert_eq!(clean_cell("a=b"), "a=b");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(clean_cell("  CA \t"), "CA");
    }

    #[test]
    fn test_formula_wrapper() {
        assert_eq!(clean_cell("=\"00123\""), "00123");
        assert_eq!(clean_cell("=\"\""), "");
        assert_eq!(clean_cell("=SUM"), "SUM");
        assert_eq!(clean_cell("=\""), "\"");
    }

    #[test]
    fn test_surrounding_quotes() {
        assert_eq!(clean_cell("\"Acme\""), "Acme");
        assert_eq!(clean_cell("'Acme'"), "Acme");
        assert_eq!(clean_cell("\"'nested'\""), "nested");
        assert_eq!(clean_cell("\"unbalanced"), "\"unbalanced");
        assert_eq!(clean_cell("\""), "\"");
    }

    #[test]
    fn test_vendor_prefix() {
        assert_eq!(clean_cell("netsuite:12345"), "12345");
        assert_eq!(clean_cell("=\"netsuite:SO-1\""), "SO-1");
        assert_eq!(clean_cell("NetSuite:SO-1"), "NetSuite:SO-1");
    }

    #[test]
    fn test_excel_header() {
        // A header cell exported as `"=""Name"""` arrives from the tokenizer as `="Name"`.
        assert_eq!(clean_header("=\"Name\""), "name");
        assert_eq!(clean_header("  Customer ID "), "customer id");
    }

    #[test]
    fn test_idempotent_on_layered_artifacts() {
        for raw in ["\" x \"", "'\"=\"a\"\"'", "=\"'netsuite:7'\"", "  ==x"] {
            let once = clean_cell(raw);
            assert_eq!(clean_cell(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_headers_equal() {
        let expected = ["Name", "Amount"];
        assert!(headers_equal(&["name", " AMOUNT "], &expected));
        assert!(headers_equal(&["=\"Name\"", "Amount"], &expected));
        assert!(!headers_equal(&["Name"], &expected));
        assert!(!headers_equal(&["Amount", "Name"], &expected));
        let empty: [&str; 0] = [];
        assert!(headers_equal(&empty, &empty));
    }
}
