use crate::domain::account::{Payee, Payer};
use crate::domain::options::{PayoutOptions, SelectorVerdict};
use crate::domain::payout_method::PayoutMethod;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// An expense's payer and payee, with the payout methods saved by the payee.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PayoutScenario {
    pub payer: Payer,
    #[serde(default)]
    pub payee: Option<Payee>,
    #[serde(default)]
    pub payout_methods: Vec<PayoutMethod>,
}

impl PayoutScenario {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }
}

/// What the payout method field renders for a scenario.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsReport<'a> {
    pub verdict: &'a SelectorVerdict,
    pub shows_selector: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub has_suitable_option: bool,
    #[serde(flatten)]
    pub options: &'a PayoutOptions,
}

impl<'a> OptionsReport<'a> {
    pub fn new(verdict: &'a SelectorVerdict, options: &'a PayoutOptions) -> Self {
        Self {
            verdict,
            shows_selector: verdict.shows_selector(),
            message: verdict.message(),
            has_suitable_option: options.has_suitable_option(),
            options,
        }
    }

    pub fn write_pretty<W: Write>(&self, sink: W) -> Result<()> {
        serde_json::to_writer_pretty(sink, self)?;
        Ok(())
    }
}
