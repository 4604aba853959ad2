#![allow(dead_code)]

use collective_payouts::domain::account::{AccountType, Host, HostRef, Payee, Payer};
use collective_payouts::domain::payout_method::{
    BankAccountData, BankAccountDetails, PayoutMethod, PayoutMethodData, PayoutMethodType,
};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn payer(host_id: &str, supported: &[PayoutMethodType], trusted: bool) -> Payer {
    Payer {
        host: Some(Host {
            id: host_id.to_string(),
            supported_payout_methods: supported.to_vec(),
            is_trusted_host: trusted,
        }),
    }
}

pub fn payee(id: &str, r#type: AccountType, host_id: Option<&str>) -> Payee {
    Payee {
        id: id.to_string(),
        r#type,
        host: host_id.map(|id| HostRef { id: id.to_string() }),
    }
}

pub fn paypal(id: &str, email: &str) -> PayoutMethod {
    PayoutMethod::saved(
        id,
        PayoutMethodData::PayPal {
            email: Some(email.to_string()),
        },
    )
}

pub fn bank_account(
    id: &str,
    details: BankAccountDetails,
    holder: &str,
    currency: &str,
) -> PayoutMethod {
    PayoutMethod::saved(
        id,
        PayoutMethodData::BankAccount(BankAccountData {
            details,
            account_holder_name: Some(holder.to_string()),
            currency: Some(currency.to_string()),
        }),
    )
}

/// Writes `lines` to a temporary CSV file kept alive by the returned handle.
pub fn amounts_csv(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "currency,input").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}
