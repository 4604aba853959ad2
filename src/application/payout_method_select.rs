use super::guard::SubmissionGuard;
use crate::domain::account::{Payee, Payer};
use crate::domain::options::{
    PayoutOption, PayoutOptions, SelectorVerdict, derive_options, verdict,
};
use crate::domain::payout_method::PayoutMethod;
use crate::domain::ports::PayoutMethodStore;
use crate::error::{PayoutError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Result of confirming the removal of a payout method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed {
        method: PayoutMethod,
        /// The removed method was the selected one; the selection is now empty.
        selection_cleared: bool,
    },
    /// The call failed; the confirmation stays open with this message.
    Failed { message: String },
    /// A removal is already in flight.
    Busy,
    NothingPending,
}

struct Memo {
    payout_methods: Vec<PayoutMethod>,
    payee: Option<Payee>,
    options: Arc<PayoutOptions>,
}

#[derive(Default)]
struct SelectState {
    selected: Option<PayoutMethod>,
    removing: Option<PayoutMethod>,
    memo: Option<Memo>,
}

/// Payout method field of an expense form, for one paying collective.
///
/// Options are derived again only when the payout methods or the payee
/// change. Removing a saved method goes through a confirmation step and a
/// single in-flight call.
pub struct PayoutMethodSelect {
    payer: Payer,
    state: RwLock<SelectState>,
    removal: SubmissionGuard,
}

impl PayoutMethodSelect {
    pub fn new(payer: Payer) -> Self {
        Self {
            payer,
            state: RwLock::new(SelectState::default()),
            removal: SubmissionGuard::new(),
        }
    }

    pub fn payer(&self) -> &Payer {
        &self.payer
    }

    pub async fn options(
        &self,
        payout_methods: &[PayoutMethod],
        payee: Option<&Payee>,
    ) -> Arc<PayoutOptions> {
        if let Some(memo) = &self.state.read().await.memo
            && memo.payout_methods == payout_methods
            && memo.payee.as_ref() == payee
        {
            debug!("reusing memoized payout method options");
            return Arc::clone(&memo.options);
        }

        let options = Arc::new(derive_options(&self.payer, payee, payout_methods));
        self.state.write().await.memo = Some(Memo {
            payout_methods: payout_methods.to_vec(),
            payee: payee.cloned(),
            options: Arc::clone(&options),
        });
        options
    }

    pub async fn verdict(
        &self,
        payout_methods: &[PayoutMethod],
        payee: Option<&Payee>,
    ) -> SelectorVerdict {
        let options = self.options(payout_methods, payee).await;
        verdict(&self.payer, &options)
    }

    pub async fn select(&self, method: Option<PayoutMethod>) {
        self.state.write().await.selected = method;
    }

    pub async fn selected(&self) -> Option<PayoutMethod> {
        self.state.read().await.selected.clone()
    }

    /// The menu entry standing for the selection, if it is still offered.
    pub async fn selected_option(
        &self,
        payout_methods: &[PayoutMethod],
        payee: Option<&Payee>,
    ) -> Option<PayoutOption> {
        let selected = self.selected().await?;
        let options = self.options(payout_methods, payee).await;
        options.find(&selected).cloned()
    }

    /// Opens the removal confirmation for a saved, deletable method.
    pub async fn request_removal(&self, method: PayoutMethod) -> Result<()> {
        if method.is_draft() {
            return Err(PayoutError::ValidationError(
                "Only saved payout methods can be removed".to_string(),
            ));
        }
        if !method.is_deletable() {
            return Err(PayoutError::ValidationError(format!(
                "{} cannot be removed",
                method.label()
            )));
        }
        self.state.write().await.removing = Some(method);
        Ok(())
    }

    pub async fn cancel_removal(&self) {
        self.state.write().await.removing = None;
    }

    pub async fn pending_removal(&self) -> Option<PayoutMethod> {
        self.state.read().await.removing.clone()
    }

    /// True while a removal call is in flight; the confirm button is disabled.
    pub fn is_busy(&self) -> bool {
        self.removal.is_busy()
    }

    pub async fn confirm_removal(&self, store: &dyn PayoutMethodStore) -> RemovalOutcome {
        let Some(_in_flight) = self.removal.try_begin() else {
            return RemovalOutcome::Busy;
        };
        let Some(pending) = self.pending_removal().await else {
            return RemovalOutcome::NothingPending;
        };
        let Some(id) = pending.id.clone() else {
            return RemovalOutcome::NothingPending;
        };

        match store.remove(&id).await {
            Ok(_) => {
                let mut state = self.state.write().await;
                state.removing = None;
                let selection_cleared =
                    state.selected.as_ref().and_then(|pm| pm.id.as_deref()) == Some(id.as_str());
                if selection_cleared {
                    state.selected = None;
                }
                info!(payout_method = %id, selection_cleared, "removed payout method");
                RemovalOutcome::Removed {
                    method: pending,
                    selection_cleared,
                }
            }
            Err(e) => {
                warn!(payout_method = %id, error = %e, "failed to remove payout method");
                RemovalOutcome::Failed {
                    message: e.user_message(),
                }
            }
        }
    }
}
