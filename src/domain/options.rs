//! Derivation of the payout methods a payer may use to pay a payee.
//!
//! Which types are offered depends only on the payer host's supported types
//! and on how payer and payee relate through their hosts. Existing payout
//! methods of the payee are then grouped under the offered types, followed by
//! a "create new" entry where the payee is allowed to add one.

use super::account::{HostRelationship, Payee, Payer};
use super::payout_method::{PayoutMethod, PayoutMethodType};
use serde::Serialize;
use tracing::debug;

const CONTACT_SUPPORT: &str = "If it's an issue, contact the Host or Open Collective support.";

/// A single selectable entry of the payout method menu.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutOption {
    pub value: PayoutMethod,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Saved and deletable, so the menu offers a remove button.
    pub removable: bool,
}

impl From<PayoutMethod> for PayoutOption {
    fn from(method: PayoutMethod) -> Self {
        Self {
            label: method.label(),
            title: method.title(),
            removable: !method.is_draft() && method.is_deletable(),
            value: method,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub payout_type: PayoutMethodType,
    pub label: String,
    pub options: Vec<PayoutOption>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutOptions {
    pub relationship: HostRelationship,
    pub creatable: Vec<PayoutMethodType>,
    /// One group per offered type, empty groups included.
    pub groups: Vec<OptionGroup>,
}

impl PayoutOptions {
    pub fn payout_types(&self) -> impl Iterator<Item = PayoutMethodType> + '_ {
        self.groups.iter().map(|group| group.payout_type)
    }

    pub fn has_suitable_option(&self) -> bool {
        self.groups.iter().any(|group| !group.options.is_empty())
    }

    /// Finds the option standing for `method`: same id for saved methods,
    /// same type for drafts.
    pub fn find(&self, method: &PayoutMethod) -> Option<&PayoutOption> {
        self.groups
            .iter()
            .flat_map(|group| group.options.iter())
            .find(|option| match &method.id {
                Some(id) => option.value.id.as_ref() == Some(id),
                None => {
                    option.value.is_draft() && option.value.payout_type() == method.payout_type()
                }
            })
    }
}

/// Types offered for a payee, in the payer host's order with OTHER last.
pub fn candidate_types(
    supported: &[PayoutMethodType],
    relationship: &HostRelationship,
) -> Vec<PayoutMethodType> {
    if relationship.same_host {
        return vec![PayoutMethodType::AccountBalance];
    }

    let offers_other = !relationship.restricts_payee_methods();
    supported
        .iter()
        .copied()
        // Credit cards are not a payout method the payee can pick, and account
        // balances only move within a single host.
        .filter(|t| !matches!(t, PayoutMethodType::CreditCard | PayoutMethodType::AccountBalance))
        .chain(offers_other.then_some(PayoutMethodType::Other))
        .fold(Vec::new(), |mut types, t| {
            if !types.contains(&t) {
                types.push(t);
            }
            types
        })
}

/// Types for which a "create new" entry is offered.
pub fn creatable_types(
    candidates: &[PayoutMethodType],
    relationship: &HostRelationship,
) -> Vec<PayoutMethodType> {
    if relationship.restricts_payee_methods() {
        return Vec::new();
    }
    candidates
        .iter()
        .copied()
        .filter(|t| *t != PayoutMethodType::AccountBalance)
        .collect()
}

pub fn derive_options(
    payer: &Payer,
    payee: Option<&Payee>,
    payout_methods: &[PayoutMethod],
) -> PayoutOptions {
    let relationship = HostRelationship::between(payer, payee);
    let candidates = candidate_types(payer.supported_payout_methods(), &relationship);
    let creatable = creatable_types(&candidates, &relationship);

    let groups = candidates
        .iter()
        .map(|&payout_type| {
            let existing = payout_methods
                .iter()
                .filter(|pm| pm.payout_type() == payout_type)
                .cloned();
            let new_entry = creatable
                .contains(&payout_type)
                .then(|| PayoutMethod::draft(payout_type));

            OptionGroup {
                payout_type,
                label: payout_type.label().to_string(),
                options: existing.chain(new_entry).map(PayoutOption::from).collect(),
            }
        })
        .collect();

    debug!(
        ?relationship,
        ?candidates,
        ?creatable,
        saved = payout_methods.len(),
        "derived payout method options"
    );

    PayoutOptions {
        relationship,
        creatable,
        groups,
    }
}

/// What the payout method field should render.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectorVerdict {
    Selector,
    /// Cross-host expense: selector shown with a warning banner.
    SelectorWithWarning,
    /// Cross-host expense the payer host is not trusted for. No selector.
    UntrustedHost,
    /// Cross-host expense with nothing to pick. No selector.
    NoSuitableOption { payout_types: Vec<String> },
}

impl SelectorVerdict {
    pub fn shows_selector(&self) -> bool {
        matches!(
            self,
            SelectorVerdict::Selector | SelectorVerdict::SelectorWithWarning
        )
    }

    pub fn message(&self) -> Option<String> {
        match self {
            SelectorVerdict::Selector => None,
            SelectorVerdict::SelectorWithWarning => Some(
                "This Expense is between different Hosts. Pick a Payout Method from the recipient Host."
                    .to_string(),
            ),
            SelectorVerdict::UntrustedHost => Some(format!(
                "This Expense is between different Hosts but the Payer Host is not allowed for this yet. {CONTACT_SUPPORT}"
            )),
            SelectorVerdict::NoSuitableOption { payout_types } => Some(format!(
                "This Expense is between different Hosts but the recipient Host doesn't have a suitable Payout Method available ({}). {CONTACT_SUPPORT}",
                payout_types.join(", ")
            )),
        }
    }
}

pub fn verdict(payer: &Payer, options: &PayoutOptions) -> SelectorVerdict {
    if !options.relationship.is_cross_host() {
        return SelectorVerdict::Selector;
    }
    if !payer.is_trusted_host() {
        SelectorVerdict::UntrustedHost
    } else if !options.has_suitable_option() {
        SelectorVerdict::NoSuitableOption {
            payout_types: options.groups.iter().map(|g| g.label.clone()).collect(),
        }
    } else {
        SelectorVerdict::SelectorWithWarning
    }
}
