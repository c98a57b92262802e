//! Redaction of cell values in log output.
//!
//! Exports carry customer names, addresses and amounts. Library crates log
//! cell values only through [`redact_value`]; the CLI flips the switch with
//! `--log-data`.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enables or disables logging of raw cell values.
pub fn set_log_data(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if row-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the input value when data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        set_log_data(false);
        assert_eq!(redact_value("Acme Corp"), REDACTED_VALUE);
        set_log_data(true);
        assert_eq!(redact_value("Acme Corp"), "Acme Corp");
        set_log_data(false);
    }
}
