//! Cancellation and deadline context for an upload run.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared cancellation switch.
///
/// Clones share the same flag, so another thread can stop a run that is in
/// progress.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Why a run stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Cancelled => write!(f, "cancelled"),
            StopReason::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

/// Per-run context passed to inserters and checked between rows.
#[derive(Debug, Clone, Default)]
pub struct UploadContext {
    cancel: CancelFlag,
    deadline: Option<Instant>,
}

impl UploadContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns why the run must stop, or `None` to keep going.
    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.cancel.is_cancelled() {
            return Some(StopReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(StopReason::DeadlineExceeded),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_runs() {
        assert_eq!(UploadContext::new().stop_reason(), None);
    }

    #[test]
    fn test_cancel_is_shared() {
        let flag = CancelFlag::new();
        let ctx = UploadContext::new().with_cancel_flag(flag.clone());
        flag.cancel();
        assert_eq!(ctx.stop_reason(), Some(StopReason::Cancelled));
    }

    #[test]
    fn test_expired_deadline() {
        let ctx = UploadContext::new().with_deadline(Instant::now());
        assert_eq!(ctx.stop_reason(), Some(StopReason::DeadlineExceeded));

        let ctx = UploadContext::new().with_timeout(Duration::from_secs(3600));
        assert_eq!(ctx.stop_reason(), None);
    }
}
