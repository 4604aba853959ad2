use super::contact::ContactMessage;
use super::payout_method::PayoutMethod;
use crate::error::Result;
use async_trait::async_trait;

/// Remote storage of the payout methods saved by accounts.
#[async_trait]
pub trait PayoutMethodStore: Send + Sync {
    async fn list(&self, account_id: &str) -> Result<Vec<PayoutMethod>>;
    /// Removes a saved payout method and returns it, no longer marked saved.
    async fn remove(&self, payout_method_id: &str) -> Result<PayoutMethod>;
}

/// Delivery of contact messages to the admins of a collective.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, message: ContactMessage) -> Result<()>;
}

pub type PayoutMethodStoreBox = Box<dyn PayoutMethodStore>;
pub type MessageSenderBox = Box<dyn MessageSender>;
