//! Form submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──▶ Succeeded
//!                      │  ▲                │
//!                      │  └──submit────────┤
//!                      └──error──▶ Failed ─┘
//! ```
//!
//! A submit while `Submitting` is rejected, so at most one request per form
//! is in flight.

use std::cell::Cell;

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Returned when a submit arrives while another is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a submission is already in flight")]
pub struct AlreadySubmitting;

/// Per-form submission guard.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    state: Cell<SubmitState>,
}

impl SubmitGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Move to `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySubmitting` if a submission is in flight; the state
    /// is left unchanged.
    pub fn begin(&self) -> Result<(), AlreadySubmitting> {
        if self.state.get() == SubmitState::Submitting {
            return Err(AlreadySubmitting);
        }
        self.state.set(SubmitState::Submitting);
        Ok(())
    }

    /// Resolve the in-flight submission.
    pub fn finish(&self, succeeded: bool) {
        self.state.set(if succeeded {
            SubmitState::Succeeded
        } else {
            SubmitState::Failed
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        assert_eq!(SubmitGuard::new().state(), SubmitState::Idle);
    }

    #[test]
    fn test_second_begin_is_rejected_while_in_flight() {
        let guard = SubmitGuard::new();
        assert_eq!(guard.begin(), Ok(()));
        assert_eq!(guard.begin(), Err(AlreadySubmitting));
        assert_eq!(guard.state(), SubmitState::Submitting);
    }

    #[test]
    fn test_resolved_states_allow_resubmission() {
        let guard = SubmitGuard::new();
        guard.begin().ok();
        guard.finish(false);
        assert_eq!(guard.state(), SubmitState::Failed);

        assert_eq!(guard.begin(), Ok(()));
        guard.finish(true);
        assert_eq!(guard.state(), SubmitState::Succeeded);
        assert_eq!(guard.begin(), Ok(()));
    }
}
