//! Validation errors raised before the engine runs.

use aura_core::error::AuraError;
use aura_core::Channel;

/// Rejections of an incoming payload. The engine stages themselves are
/// total and never produce these.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("channel is required")]
    MissingChannel,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("history message {message_id} is on channel {found}, expected {expected}")]
    ChannelMismatch {
        message_id: String,
        expected: Channel,
        found: Channel,
    },
    #[error("agent message {0} has no call-to-action")]
    MissingCta(String),
    #[error("history message {0} has an out-of-range timestamp")]
    TimestampOutOfRange(String),
}

impl From<AgentError> for AuraError {
    fn from(err: AgentError) -> Self {
        AuraError::Validation(err.to_string())
    }
}
