use serde::{Deserialize, Serialize};

/// Menu labels keep at most this many characters of free-text content.
pub const MAX_PAYOUT_OPTION_DATA_LENGTH: usize = 20;

const TRUNCATION_OMISSION: &str = "...";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutMethodType {
    #[serde(rename = "PAYPAL")]
    PayPal,
    BankAccount,
    Other,
    AccountBalance,
    CreditCard,
}

impl PayoutMethodType {
    pub fn label(self) -> &'static str {
        match self {
            PayoutMethodType::PayPal => "PayPal",
            PayoutMethodType::BankAccount => "Bank transfer",
            PayoutMethodType::Other => "Other",
            PayoutMethodType::AccountBalance => "Account Balance",
            PayoutMethodType::CreditCard => "Credit Card",
        }
    }

    /// Label of the "create a new one" entry for this type.
    pub fn new_label(self) -> String {
        match self {
            PayoutMethodType::PayPal => "+ New PayPal account".to_string(),
            PayoutMethodType::BankAccount => "+ New bank account".to_string(),
            PayoutMethodType::Other => "+ New custom payout method".to_string(),
            other => format!("+ New {}", other.label()),
        }
    }
}

/// Account identifiers a bank account may carry; which ones are present
/// depends on the country of the account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountDetails {
    #[serde(rename = "IBAN", default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bankgiro_number: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BankAccountData {
    pub details: BankAccountDetails,
    pub account_holder_name: Option<String>,
    pub currency: Option<String>,
}

/// Type-specific payload of a payout method.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PayoutMethodData {
    PayPal { email: Option<String> },
    BankAccount(BankAccountData),
    Other { content: Option<String> },
    AccountBalance,
    CreditCard,
}

impl PayoutMethodData {
    pub fn payout_type(&self) -> PayoutMethodType {
        match self {
            PayoutMethodData::PayPal { .. } => PayoutMethodType::PayPal,
            PayoutMethodData::BankAccount(_) => PayoutMethodType::BankAccount,
            PayoutMethodData::Other { .. } => PayoutMethodType::Other,
            PayoutMethodData::AccountBalance => PayoutMethodType::AccountBalance,
            PayoutMethodData::CreditCard => PayoutMethodType::CreditCard,
        }
    }

    /// Blank payload used to pre-fill the creation form of a type.
    pub fn blank(payout_type: PayoutMethodType) -> Self {
        match payout_type {
            PayoutMethodType::PayPal => PayoutMethodData::PayPal {
                email: Some(String::new()),
            },
            PayoutMethodType::BankAccount => {
                PayoutMethodData::BankAccount(BankAccountData::default())
            }
            PayoutMethodType::Other => PayoutMethodData::Other {
                content: Some(String::new()),
            },
            PayoutMethodType::AccountBalance => PayoutMethodData::AccountBalance,
            PayoutMethodType::CreditCard => PayoutMethodData::CreditCard,
        }
    }
}

/// A way to pay an account.
///
/// A method without `id` is a placeholder standing for "create a new one of
/// this type"; it is never persisted as-is.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(from = "RawPayoutMethod", into = "RawPayoutMethod")]
pub struct PayoutMethod {
    pub id: Option<String>,
    pub name: Option<String>,
    pub data: PayoutMethodData,
    /// Explicit override of the default deletability rule.
    pub deletable: Option<bool>,
    pub is_saved: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let kept: String = text
        .chars()
        .take(length.saturating_sub(TRUNCATION_OMISSION.len()))
        .collect();
    format!("{kept}{TRUNCATION_OMISSION}")
}

impl PayoutMethod {
    pub fn saved(id: impl Into<String>, data: PayoutMethodData) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
            data,
            deletable: None,
            is_saved: true,
        }
    }

    pub fn draft(payout_type: PayoutMethodType) -> Self {
        Self {
            id: None,
            name: None,
            data: PayoutMethodData::blank(payout_type),
            deletable: None,
            is_saved: true,
        }
    }

    pub fn payout_type(&self) -> PayoutMethodType {
        self.data.payout_type()
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_none()
    }

    pub fn is_deletable(&self) -> bool {
        self.deletable
            .unwrap_or(self.payout_type() != PayoutMethodType::AccountBalance)
    }

    pub fn label(&self) -> String {
        if self.is_draft() {
            return self.payout_type().new_label();
        }
        if let Some(name) = non_empty(&self.name) {
            return name.to_string();
        }

        match &self.data {
            PayoutMethodData::AccountBalance => "Open Collective (Account Balance)".to_string(),
            PayoutMethodData::PayPal { email } => {
                format!("PayPal - {}", email.as_deref().unwrap_or_default())
            }
            PayoutMethodData::BankAccount(bank) => bank_account_label(bank),
            PayoutMethodData::Other { content } => {
                let type_label = PayoutMethodType::Other.label();
                match non_empty(content) {
                    Some(content) => {
                        let flattened = content.replace(['\n', '\t'], " ");
                        format!(
                            "{type_label} - {}",
                            truncate(&flattened, MAX_PAYOUT_OPTION_DATA_LENGTH)
                        )
                    }
                    None => type_label.to_string(),
                }
            }
            PayoutMethodData::CreditCard => PayoutMethodType::CreditCard.label().to_string(),
        }
    }

    /// Full free-text content, when the label had to truncate it.
    pub fn title(&self) -> Option<String> {
        match &self.data {
            PayoutMethodData::Other {
                content: Some(content),
            } if content.chars().count() > MAX_PAYOUT_OPTION_DATA_LENGTH => Some(content.clone()),
            _ => None,
        }
    }
}

fn bank_account_label(bank: &BankAccountData) -> String {
    let details = &bank.details;
    if let Some(iban) = non_empty(&details.iban) {
        format!("IBAN {iban}")
    } else if let Some(number) = non_empty(&details.account_number) {
        format!("A/N {number}")
    } else if let Some(clabe) = non_empty(&details.clabe) {
        format!("Clabe {clabe}")
    } else if let Some(bankgiro) = non_empty(&details.bankgiro_number) {
        format!("BankGiro {bankgiro}")
    } else {
        format!(
            "{} ({})",
            bank.account_holder_name.as_deref().unwrap_or_default(),
            bank.currency.as_deref().unwrap_or_default()
        )
    }
}

/// GraphQL shape of a payout method: a `type` tag next to a loosely typed
/// `data` object.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayoutMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    r#type: PayoutMethodType,
    #[serde(default)]
    data: Option<RawPayoutMethodData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_deletable: Option<bool>,
    #[serde(default)]
    is_saved: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawPayoutMethodData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<BankAccountDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    account_holder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
}

impl From<RawPayoutMethod> for PayoutMethod {
    fn from(raw: RawPayoutMethod) -> Self {
        let data = raw.data.unwrap_or_default();
        let data = match raw.r#type {
            PayoutMethodType::PayPal => PayoutMethodData::PayPal { email: data.email },
            PayoutMethodType::BankAccount => PayoutMethodData::BankAccount(BankAccountData {
                details: data.details.unwrap_or_default(),
                account_holder_name: data.account_holder_name,
                currency: data.currency,
            }),
            PayoutMethodType::Other => PayoutMethodData::Other {
                content: data.content,
            },
            PayoutMethodType::AccountBalance => PayoutMethodData::AccountBalance,
            PayoutMethodType::CreditCard => PayoutMethodData::CreditCard,
        };

        Self {
            id: raw.id,
            name: raw.name,
            data,
            deletable: raw.is_deletable,
            is_saved: raw.is_saved,
        }
    }
}

impl From<PayoutMethod> for RawPayoutMethod {
    fn from(method: PayoutMethod) -> Self {
        let r#type = method.payout_type();
        let data = match method.data {
            PayoutMethodData::PayPal { email } => RawPayoutMethodData {
                email,
                ..Default::default()
            },
            PayoutMethodData::BankAccount(bank) => RawPayoutMethodData {
                details: Some(bank.details),
                account_holder_name: bank.account_holder_name,
                currency: bank.currency,
                ..Default::default()
            },
            PayoutMethodData::Other { content } => RawPayoutMethodData {
                content,
                ..Default::default()
            },
            PayoutMethodData::AccountBalance | PayoutMethodData::CreditCard => {
                RawPayoutMethodData::default()
            }
        };

        Self {
            id: method.id,
            name: method.name,
            r#type,
            data: Some(data),
            is_deletable: method.deletable,
            is_saved: method.is_saved,
        }
    }
}
