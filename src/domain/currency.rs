use serde::{Deserialize, Serialize};

/// How the currency is rendered in front of an amount field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyDisplay {
    /// `$`
    #[default]
    Symbol,
    /// `USD`
    Code,
    /// `$ USD`
    Full,
}

/// Narrow symbols for the currencies the platform hosts most often.
const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "$"),
    ("NGN", "₦"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PHP", "₱"),
    ("PLN", "zł"),
    ("RUB", "₽"),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("THB", "฿"),
    ("TRY", "₺"),
    ("UAH", "₴"),
    ("USD", "$"),
    ("VND", "₫"),
    ("ZAR", "R"),
];

/// Looks up the display symbol of an ISO 4217 code.
///
/// Unknown codes are returned unchanged, so the lookup never fails.
pub fn currency_symbol(currency: &str) -> &str {
    SYMBOLS
        .binary_search_by(|(code, _)| code.cmp(&currency))
        .map(|idx| SYMBOLS[idx].1)
        .unwrap_or(currency)
}

pub fn format_prefix(currency: &str, display: CurrencyDisplay) -> String {
    match display {
        CurrencyDisplay::Symbol => currency_symbol(currency).to_string(),
        CurrencyDisplay::Code => currency.to_string(),
        CurrencyDisplay::Full => format!("{} {}", currency_symbol(currency), currency),
    }
}
