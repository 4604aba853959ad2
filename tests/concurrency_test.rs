mod common;

use async_trait::async_trait;
use collective_payouts::application::contact_form::{ContactForm, SubmitOutcome};
use collective_payouts::application::payout_method_select::{PayoutMethodSelect, RemovalOutcome};
use collective_payouts::domain::contact::{ContactDraft, ContactMessage};
use collective_payouts::domain::payout_method::PayoutMethod;
use collective_payouts::domain::payout_method::PayoutMethodType;
use collective_payouts::domain::ports::{MessageSender, PayoutMethodStore};
use collective_payouts::error::{PayoutError, Result};
use std::sync::Arc;
use tokio::sync::Notify;

/// Port double whose calls wait until released.
#[derive(Default, Clone)]
struct GatedPort {
    release: Arc<Notify>,
}

#[async_trait]
impl PayoutMethodStore for GatedPort {
    async fn list(&self, _account_id: &str) -> Result<Vec<PayoutMethod>> {
        Ok(Vec::new())
    }

    async fn remove(&self, payout_method_id: &str) -> Result<PayoutMethod> {
        self.release.notified().await;
        let mut removed = common::paypal(payout_method_id, "gated@example.com");
        removed.is_saved = false;
        Ok(removed)
    }
}

#[async_trait]
impl MessageSender for GatedPort {
    async fn send_message(&self, _message: ContactMessage) -> Result<()> {
        self.release.notified().await;
        Ok(())
    }
}

struct FailingSender;

#[async_trait]
impl MessageSender for FailingSender {
    async fn send_message(&self, _message: ContactMessage) -> Result<()> {
        Err(PayoutError::NetworkError(
            "Too many messages sent, try again later".to_string(),
        ))
    }
}

fn draft() -> ContactDraft {
    ContactDraft::new("Hello", "We love what you are doing")
}

#[tokio::test]
async fn test_second_removal_is_refused_while_pending() {
    let port = GatedPort::default();
    let select = PayoutMethodSelect::new(common::payer("host", &[PayoutMethodType::PayPal], false));
    select
        .request_removal(common::paypal("pm-1", "a@example.com"))
        .await
        .unwrap();

    let (first, second, ()) = tokio::join!(
        select.confirm_removal(&port),
        async {
            assert!(select.is_busy());
            select.confirm_removal(&port).await
        },
        async { port.release.notify_one() },
    );

    assert!(matches!(first, RemovalOutcome::Removed { .. }));
    assert_eq!(second, RemovalOutcome::Busy);
    assert!(!select.is_busy());
}

#[tokio::test]
async fn test_second_send_is_refused_while_pending() {
    let port = GatedPort::default();
    let form = ContactForm::new(1, "Babel", Box::new(port.clone()));

    let first_draft = draft();
    let (first, second, ()) = tokio::join!(
        form.submit(&first_draft),
        async {
            assert!(form.is_busy());
            form.submit(&draft()).await
        },
        async { port.release.notify_one() },
    );

    assert_eq!(first, SubmitOutcome::Sent);
    assert_eq!(first.notice(), Some("Message sent"));
    assert_eq!(second, SubmitOutcome::Busy);
    assert_eq!(second.notice(), None);
    assert!(!form.is_busy());
}

#[tokio::test]
async fn test_send_failure_is_shown_inline() {
    let form = ContactForm::new(1, "Babel", Box::new(FailingSender));

    let outcome = form.submit(&draft()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed("Too many messages sent, try again later".to_string())
    );
    assert_eq!(
        form.error().await.as_deref(),
        Some("Too many messages sent, try again later")
    );
    assert!(!form.is_sent().await);
    // The form can be submitted again once the call has failed.
    assert!(!form.is_busy());
}

#[tokio::test]
async fn test_error_is_cleared_on_next_attempt() {
    let failing = ContactForm::new(1, "Babel", Box::new(FailingSender));
    failing.submit(&draft()).await;
    assert!(failing.error().await.is_some());

    let outbox = collective_payouts::infrastructure::in_memory::InMemoryOutbox::new();
    let working = ContactForm::new(1, "Babel", Box::new(outbox.clone()));
    assert_eq!(working.submit(&draft()).await, SubmitOutcome::Sent);
    assert_eq!(working.error().await, None);
    assert_eq!(outbox.messages().await.len(), 1);
}
