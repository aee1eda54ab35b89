use thiserror::Error;

/// Creation-time failure. Lifecycle calls never fail; illegal requests are
/// absorbed as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("invalid target state: {reason}")]
    InvalidTargetState { reason: &'static str },
}

impl PromptError {
    pub(crate) fn target(reason: &'static str) -> Self {
        PromptError::InvalidTargetState { reason }
    }
}
