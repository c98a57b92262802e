//! Numeric conversion for financial amounts.
//!
//! Amounts are kept as exact decimals so totals match the source system to
//! the cent.

use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

/// Plain decimal grammar: optional minus, digits, at most one point.
/// No exponent.
static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)$").expect("Invalid decimal regex"));

const CURRENCY_SYMBOLS: [char; 3] = ['$', '€', '£'];

/// Parse an amount as exported by ERP and tax tools.
///
/// Handles:
/// - Currency symbols: "$1,234.56", "€100", "£5"
/// - Thousands separators: "1,234,567"
/// - Accounting negatives: "(500.00)" is -500.00
/// - Explicit sign: "+12", "-0"
/// - Bare fractions: ".45", "123."
///
/// Returns `None` for empty input, scientific notation, multiple decimal
/// points, or any other non-digit content.
pub fn parse_numeric(value: &str) -> Option<BigDecimal> {
    let normalized = normalize_numeric(value)?;
    BigDecimal::from_str(&normalized).ok()
}

/// Reduce an amount to the plain decimal grammar, or `None` if it cannot be.
pub fn normalize_numeric(value: &str) -> Option<String> {
    let stripped: String = value
        .trim()
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect();
    let mut cleaned = stripped.trim();

    let negated = match cleaned
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => {
            cleaned = inner.trim();
            true
        }
        None => false,
    };

    if let Some(rest) = cleaned.strip_prefix('+') {
        if rest.starts_with('-') {
            return None;
        }
        cleaned = rest;
    }

    if !DECIMAL_REGEX.is_match(cleaned) {
        return None;
    }

    let (sign, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (!negated, rest),
        None => (negated, cleaned),
    };

    let mut plain = String::with_capacity(digits.len() + 2);
    if sign {
        plain.push('-');
    }
    if digits.starts_with('.') {
        plain.push('0');
    }
    plain.push_str(digits.strip_suffix('.').unwrap_or(digits));
    Some(plain)
}

/// Check if a string is a valid amount.
pub fn is_numeric(value: &str) -> bool {
    normalize_numeric(value).is_some()
}
