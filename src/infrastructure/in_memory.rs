use crate::domain::contact::ContactMessage;
use crate::domain::payout_method::PayoutMethod;
use crate::domain::ports::{MessageSender, PayoutMethodStore};
use crate::error::{PayoutError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store of saved payout methods, keyed by account id.
///
/// Uses `Arc<RwLock<HashMap<String, Vec<PayoutMethod>>>>` so clones share the
/// same data. Methods keep their insertion order per account.
#[derive(Default, Clone)]
pub struct InMemoryPayoutMethodStore {
    methods: Arc<RwLock<HashMap<String, Vec<PayoutMethod>>>>,
}

impl InMemoryPayoutMethodStore {
    /// Creates a new, empty in-memory payout method store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `method` for `account_id`, replacing a method with the same id.
    pub async fn insert(&self, account_id: &str, method: PayoutMethod) -> Result<()> {
        if method.is_draft() {
            return Err(PayoutError::ValidationError(
                "Draft payout methods cannot be stored".to_string(),
            ));
        }
        let mut methods = self.methods.write().await;
        let saved = methods.entry(account_id.to_string()).or_default();
        match saved.iter_mut().find(|pm| pm.id == method.id) {
            Some(existing) => *existing = method,
            None => saved.push(method),
        }
        Ok(())
    }
}

#[async_trait]
impl PayoutMethodStore for InMemoryPayoutMethodStore {
    async fn list(&self, account_id: &str) -> Result<Vec<PayoutMethod>> {
        let methods = self.methods.read().await;
        Ok(methods.get(account_id).cloned().unwrap_or_default())
    }

    async fn remove(&self, payout_method_id: &str) -> Result<PayoutMethod> {
        let mut methods = self.methods.write().await;
        for saved in methods.values_mut() {
            if let Some(idx) = saved
                .iter()
                .position(|pm| pm.id.as_deref() == Some(payout_method_id))
            {
                let mut removed = saved.remove(idx);
                removed.is_saved = false;
                return Ok(removed);
            }
        }
        Err(PayoutError::NotFound(format!(
            "Payout method {payout_method_id}"
        )))
    }
}

/// Collects sent contact messages instead of delivering them.
#[derive(Default, Clone)]
pub struct InMemoryOutbox {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl MessageSender for InMemoryOutbox {
    async fn send_message(&self, message: ContactMessage) -> Result<()> {
        self.messages.write().await.push(message);
        Ok(())
    }
}
