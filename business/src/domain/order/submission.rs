use uuid::Uuid;

/// Lifecycle of one checkout attempt.
///
/// Tracked on its own instead of being inferred from cart contents and a
/// loading flag, so an emptied cart can never masquerade as a finished
/// submission. `Succeeded` and `Failed` are settled: a new attempt may begin
/// from either, and confirming the order resets the machine to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Verifying,
    Submitting,
    Succeeded {
        order_id: Uuid,
    },
    Failed {
        reason: String,
    },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Verifying | SubmissionState::Submitting)
    }

    /// Starts a new attempt. Returns false while another attempt is still in
    /// flight, which is how concurrent submits by the same user are refused.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = SubmissionState::Verifying;
        true
    }

    /// Verification passed, the order write is starting. No-op unless the
    /// machine is in `Verifying`.
    pub fn advance_to_submitting(&mut self) {
        if *self == SubmissionState::Verifying {
            *self = SubmissionState::Submitting;
        }
    }

    pub fn succeed(&mut self, order_id: Uuid) {
        *self = SubmissionState::Succeeded { order_id };
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        *self = SubmissionState::Failed {
            reason: reason.into(),
        };
    }

    pub fn reset(&mut self) {
        *self = SubmissionState::Idle;
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Verifying => write!(f, "verifying"),
            SubmissionState::Submitting => write!(f, "submitting"),
            SubmissionState::Succeeded { .. } => write!(f, "succeeded"),
            SubmissionState::Failed { .. } => write!(f, "failed"),
        }
    }
}
