use super::guard::SubmissionGuard;
use crate::domain::contact::ContactDraft;
use crate::domain::ports::MessageSenderBox;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub const MESSAGE_SENT: &str = "Message sent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Page form: the form is replaced by the "Message sent" notice.
    Sent,
    /// Modal form: a "Message sent" toast is shown and the modal closes.
    SentAndClosed,
    /// The send failed; the message is shown inline under the form.
    Failed(String),
    /// The draft does not pass validation; nothing was sent.
    Rejected(String),
    /// A send is already in flight.
    Busy,
}

impl SubmitOutcome {
    /// Confirmation shown once the message is out: the notice replacing a
    /// page form, or the toast of a modal one.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Sent | SubmitOutcome::SentAndClosed => Some(MESSAGE_SENT),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct FormState {
    error: Option<String>,
    sent: bool,
    closed: bool,
}

/// Contact form of a collective.
pub struct ContactForm {
    collective_id: u64,
    collective_name: String,
    is_modal: bool,
    sender: MessageSenderBox,
    state: RwLock<FormState>,
    guard: SubmissionGuard,
}

impl ContactForm {
    pub fn new(
        collective_id: u64,
        collective_name: impl Into<String>,
        sender: MessageSenderBox,
    ) -> Self {
        Self {
            collective_id,
            collective_name: collective_name.into(),
            is_modal: false,
            sender,
            state: RwLock::new(FormState::default()),
            guard: SubmissionGuard::new(),
        }
    }

    pub fn modal(mut self) -> Self {
        self.is_modal = true;
        self
    }

    pub fn title(&self) -> String {
        format!("Contact {}", self.collective_name)
    }

    /// True while a send is in flight; the submit button shows as loading.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn is_sent(&self) -> bool {
        self.state.read().await.sent
    }

    pub async fn is_closed(&self) -> bool {
        self.state.read().await.closed
    }

    pub async fn submit(&self, draft: &ContactDraft) -> SubmitOutcome {
        if let Err(e) = draft.validate() {
            return SubmitOutcome::Rejected(e.user_message());
        }
        let Some(_in_flight) = self.guard.try_begin() else {
            return SubmitOutcome::Busy;
        };

        self.state.write().await.error = None;
        let message = draft.clone().into_message(self.collective_id);

        match self.sender.send_message(message).await {
            Ok(()) => {
                info!(collective_id = self.collective_id, "contact message sent");
                let mut state = self.state.write().await;
                if self.is_modal {
                    state.closed = true;
                    SubmitOutcome::SentAndClosed
                } else {
                    state.sent = true;
                    SubmitOutcome::Sent
                }
            }
            Err(e) => {
                warn!(
                    collective_id = self.collective_id,
                    error = %e,
                    "failed to send contact message"
                );
                let message = e.user_message();
                self.state.write().await.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
