mod common;

use collective_payouts::domain::account::AccountType;
use collective_payouts::domain::options::{SelectorVerdict, derive_options, verdict};
use collective_payouts::domain::payout_method::BankAccountDetails;
use common::{bank_account, payee, payer, paypal};

use collective_payouts::domain::payout_method::PayoutMethodType::{
    AccountBalance, BankAccount, CreditCard, Other, PayPal,
};

#[test]
fn test_organization_on_other_host_can_create_everything() {
    let payer = payer("host-a", &[PayPal, BankAccount], false);
    let payee = payee("org", AccountType::Organization, Some("host-b"));

    let options = derive_options(&payer, Some(&payee), &[]);

    assert_eq!(
        options.payout_types().collect::<Vec<_>>(),
        vec![PayPal, BankAccount, Other]
    );
    assert_eq!(options.creatable, vec![PayPal, BankAccount, Other]);
    assert!(options.has_suitable_option());
    assert!(
        options
            .groups
            .iter()
            .all(|group| group.options.len() == 1 && group.options[0].value.is_draft())
    );
    assert_eq!(verdict(&payer, &options), SelectorVerdict::Selector);
}

#[test]
fn test_hosted_project_with_untrusted_payer_host() {
    let payer = payer("host-a", &[PayPal, BankAccount], false);
    let payee = payee("project", AccountType::Project, Some("host-b"));

    let options = derive_options(&payer, Some(&payee), &[paypal("pm-1", "p@x.org")]);
    let outcome = verdict(&payer, &options);

    assert_eq!(outcome, SelectorVerdict::UntrustedHost);
    assert!(!outcome.shows_selector());
}

#[test]
fn test_hosted_project_with_trusted_payer_host() {
    let payer = payer("host-a", &[PayPal, BankAccount], true);
    let payee = payee("project", AccountType::Project, Some("host-b"));

    let empty = derive_options(&payer, Some(&payee), &[]);
    assert_eq!(
        verdict(&payer, &empty),
        SelectorVerdict::NoSuitableOption {
            payout_types: vec!["PayPal".to_string(), "Bank transfer".to_string()]
        }
    );
    // Groups stay listed even when empty.
    assert_eq!(empty.groups.len(), 2);

    let with_saved = derive_options(&payer, Some(&payee), &[paypal("pm-1", "p@x.org")]);
    assert_eq!(verdict(&payer, &with_saved), SelectorVerdict::SelectorWithWarning);
    assert!(with_saved.creatable.is_empty());
}

#[test]
fn test_same_host_only_offers_account_balance() {
    let payer = payer("host-a", &[PayPal, BankAccount, CreditCard], false);
    let payee = payee("event", AccountType::Event, Some("host-a"));
    let saved = [
        paypal("pm-1", "p@x.org"),
        collective_payouts::domain::payout_method::PayoutMethod::saved(
            "pm-balance",
            collective_payouts::domain::payout_method::PayoutMethodData::AccountBalance,
        ),
    ];

    let options = derive_options(&payer, Some(&payee), &saved);

    assert_eq!(options.payout_types().collect::<Vec<_>>(), vec![AccountBalance]);
    assert!(options.creatable.is_empty());
    let balance = &options.groups[0].options;
    assert_eq!(balance.len(), 1);
    assert_eq!(balance[0].label, "Open Collective (Account Balance)");
    assert!(!balance[0].removable);
    assert_eq!(verdict(&payer, &options), SelectorVerdict::Selector);
}

#[test]
fn test_self_hosted_collective_is_treated_like_an_organization() {
    let payer = payer("host-a", &[BankAccount], true);
    let payee = payee("coll", AccountType::Collective, Some("coll"));

    let options = derive_options(&payer, Some(&payee), &[]);

    assert_eq!(options.payout_types().collect::<Vec<_>>(), vec![BankAccount, Other]);
    assert_eq!(options.creatable, vec![BankAccount, Other]);
    // Still a cross-host expense, so the warning is shown.
    assert_eq!(verdict(&payer, &options), SelectorVerdict::SelectorWithWarning);
}

#[test]
fn test_bank_account_labels() {
    let iban = bank_account(
        "pm-1",
        BankAccountDetails {
            iban: Some("DE89370400440532013000".to_string()),
            ..Default::default()
        },
        "Jane",
        "EUR",
    );
    assert_eq!(iban.label(), "IBAN DE89370400440532013000");

    let bare = bank_account("pm-2", BankAccountDetails::default(), "Jane Doe", "USD");
    assert_eq!(bare.label(), "Jane Doe (USD)");
}

#[test]
fn test_payer_without_host() {
    let payer = collective_payouts::domain::account::Payer::default();
    let payee = payee("someone", AccountType::Individual, None);

    let options = derive_options(&payer, Some(&payee), &[]);

    assert_eq!(options.payout_types().collect::<Vec<_>>(), vec![Other]);
    assert!(!options.relationship.same_host);
    assert!(options.has_suitable_option());
}
