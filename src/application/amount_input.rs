use crate::domain::amount::{
    AmountConstraints, AmountValue, ParsedInput, Precision, has_error, parse_input, parse_strict,
    to_display_value, to_minor_units,
};
use crate::domain::currency::{CurrencyDisplay, format_prefix};
use serde::{Deserialize, Serialize};

/// Static configuration of an amount field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountInputConfig {
    pub currency: String,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub precision: Precision,
    #[serde(default)]
    pub constraints: AmountConstraints,
    #[serde(default)]
    pub required: bool,
}

impl AmountInputConfig {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Default::default()
        }
    }
}

impl Default for AmountInputConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            currency_display: CurrencyDisplay::default(),
            precision: Precision::default(),
            constraints: AmountConstraints::default(),
            required: false,
        }
    }
}

/// State of an amount field: the text as typed and the last value handed to
/// the owner of the field.
///
/// Every edit produces an [`AmountValue`]; invalid text is a value, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInput {
    config: AmountInputConfig,
    raw: String,
    value: AmountValue,
    is_empty: bool,
}

impl AmountInput {
    pub fn new(config: AmountInputConfig) -> Self {
        Self {
            config,
            raw: String::new(),
            value: AmountValue::Absent,
            is_empty: false,
        }
    }

    /// A field pre-filled with an amount in minor units.
    pub fn with_value(config: AmountInputConfig, minor_units: i64) -> Self {
        let raw = to_display_value(minor_units, config.precision)
            .normalize()
            .to_string();
        Self {
            config,
            raw,
            value: AmountValue::Minor(minor_units),
            is_empty: false,
        }
    }

    pub fn config(&self) -> &AmountInputConfig {
        &self.config
    }

    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }

    /// Forces the field to render blank whatever its value.
    pub fn set_empty(&mut self, is_empty: bool) {
        self.is_empty = is_empty;
    }

    pub fn prefix(&self) -> String {
        format_prefix(&self.config.currency, self.config.currency_display)
    }

    /// Handles an edit of the text and returns the value to dispatch.
    pub fn change(&mut self, raw: impl Into<String>) -> AmountValue {
        self.raw = raw.into();
        let precision = self.config.precision;

        self.value = match parse_input(&self.raw, precision, false) {
            ParsedInput::Empty => AmountValue::Absent,
            ParsedInput::Invalid => AmountValue::Invalid,
            parsed @ ParsedInput::Number(number) => {
                if !self.satisfies_constraints()
                    || parse_input(&self.raw, precision, true) != parsed
                {
                    AmountValue::Invalid
                } else {
                    to_minor_units(number, precision)
                        .map(AmountValue::Minor)
                        .unwrap_or(AmountValue::Invalid)
                }
            }
        };
        self.value
    }

    /// Canonicalizes the text when leaving the field (`41.1` becomes `41.10`).
    ///
    /// Dispatches only when the text reads the same with and without its
    /// comma; otherwise the text is left untouched and `None` is returned.
    pub fn blur(&mut self) -> Option<AmountValue> {
        let precision = self.config.precision;
        let parsed = parse_input(&self.raw, precision, false);
        if let ParsedInput::Number(number) = parsed
            && self.satisfies_constraints()
            && parse_input(&self.raw, precision, true) == parsed
        {
            return Some(self.change(number.to_string()));
        }
        None
    }

    /// Text the field shows.
    pub fn display_text(&self) -> String {
        if self.is_empty {
            return String::new();
        }
        match self.value {
            AmountValue::Minor(units) => {
                let display = to_display_value(units, self.config.precision);
                // Keep what the user typed while it still denotes the value.
                if parse_strict(&self.raw) == Some(display) {
                    self.raw.clone()
                } else {
                    display.normalize().to_string()
                }
            }
            AmountValue::Absent | AmountValue::Invalid => self.raw.clone(),
        }
    }

    pub fn has_error(&self) -> bool {
        let precision = self.config.precision;
        let current = match self.value {
            AmountValue::Minor(units) => Some(to_display_value(units, precision)),
            AmountValue::Absent => None,
            // Invalid text still counts as "something typed"; it is only
            // compared to the minimum when it reads as a number.
            AmountValue::Invalid => {
                let typed = parse_strict(&self.raw);
                return has_error(typed, self.config.constraints.min, false, precision);
            }
        };
        has_error(
            current,
            self.config.constraints.min,
            self.config.required,
            precision,
        )
    }

    /// Numeric constraint check on the text as typed. Text that is not
    /// entirely a number fails it.
    fn satisfies_constraints(&self) -> bool {
        parse_strict(&self.raw)
            .is_some_and(|value| self.config.constraints.accepts(value, self.config.precision))
    }
}
