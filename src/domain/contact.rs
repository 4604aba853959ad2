use crate::error::{PayoutError, Result};
use serde::{Deserialize, Serialize};

pub const SUBJECT_MAX_LENGTH: usize = 60;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 4000;

/// What a visitor typed in the contact form of a collective.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ContactDraft {
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// The submit button stays disabled until the message is long enough.
    pub fn can_submit(&self) -> bool {
        self.message.chars().count() >= MESSAGE_MIN_LENGTH
    }

    pub fn validate(&self) -> Result<()> {
        let subject_len = self.subject.chars().count();
        if subject_len > SUBJECT_MAX_LENGTH {
            return Err(PayoutError::ValidationError(format!(
                "Subject must be at most {SUBJECT_MAX_LENGTH} characters long"
            )));
        }
        let message_len = self.message.chars().count();
        if message_len < MESSAGE_MIN_LENGTH {
            return Err(PayoutError::ValidationError(format!(
                "Message needs to be at least {MESSAGE_MIN_LENGTH} characters long"
            )));
        }
        if message_len > MESSAGE_MAX_LENGTH {
            return Err(PayoutError::ValidationError(format!(
                "Message must be at most {MESSAGE_MAX_LENGTH} characters long"
            )));
        }
        Ok(())
    }

    pub fn into_message(self, collective_id: u64) -> ContactMessage {
        ContactMessage {
            collective_id,
            subject: (!self.subject.is_empty()).then_some(self.subject),
            message: self.message,
        }
    }
}

/// Payload of the "send message to collective" call.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub collective_id: u64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}
