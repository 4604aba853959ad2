use crate::error::{PayoutError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default upper bound of an amount field, in minor units.
pub const DEFAULT_MAX_MINOR_UNITS: i64 = 1_000_000_000;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: i64 = 28;
/// Integer digits of `Decimal::MAX`.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Number of fractional digits of a display amount.
///
/// Bounded so that `10^precision` always fits in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision(u32);

impl Precision {
    pub const MAX: u32 = 18;

    pub fn new(digits: u32) -> Result<Self> {
        if digits <= Self::MAX {
            Ok(Self(digits))
        } else {
            Err(PayoutError::ValidationError(format!(
                "Precision must be at most {}, got {digits}",
                Self::MAX
            )))
        }
    }

    pub fn digits(self) -> u32 {
        self.0
    }

    /// `10^precision`, the number of minor units in one display unit.
    fn factor(self) -> Decimal {
        Decimal::from(10i64.pow(self.0))
    }

    /// The smallest representable display step (`0.01` for precision 2).
    pub fn smallest_step(self) -> Decimal {
        Decimal::new(1, self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u32> for Precision {
    type Error = PayoutError;

    fn try_from(digits: u32) -> Result<Self> {
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

/// Outcome of reading user text as a display amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedInput {
    /// Nothing typed. Not an error.
    Empty,
    /// Text that cannot be read as an amount.
    Invalid,
    /// A value fixed to exactly `precision` fractional digits.
    Number(Decimal),
}

/// The value an amount field hands to its owner after every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountValue {
    #[default]
    Absent,
    Invalid,
    Minor(i64),
}

impl AmountValue {
    pub fn minor_units(self) -> Option<i64> {
        match self {
            AmountValue::Minor(units) => Some(units),
            _ => None,
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            AmountValue::Absent => "absent",
            AmountValue::Invalid => "invalid",
            AmountValue::Minor(_) => "valid",
        }
    }
}

/// Numeric constraints of an amount field, bounds given in minor units.
///
/// Mirrors the checks a browser runs on `<input type="number">`: a value is
/// acceptable when it sits within `[min, max]` and is a whole number of
/// `step`s away from `min` (or zero when there is no minimum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountConstraints {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Display-unit step; `None` accepts any granularity.
    pub step: Option<Decimal>,
}

impl AmountConstraints {
    pub fn for_precision(precision: Precision) -> Self {
        Self {
            min: Some(0),
            max: Some(DEFAULT_MAX_MINOR_UNITS),
            step: Some(precision.smallest_step()),
        }
    }

    pub fn accepts(&self, value: Decimal, precision: Precision) -> bool {
        let min = self.min.map(|min| to_display_value(min, precision));
        if let Some(min) = min
            && value < min
        {
            return false;
        }
        if let Some(max) = self.max
            && value > to_display_value(max, precision)
        {
            return false;
        }
        match self.step {
            Some(step) if !step.is_zero() => value
                .checked_sub(min.unwrap_or(Decimal::ZERO))
                .and_then(|offset| offset.checked_rem(step))
                .is_some_and(|rest| rest.is_zero()),
            _ => true,
        }
    }
}

impl Default for AmountConstraints {
    fn default() -> Self {
        Self::for_precision(Precision::default())
    }
}

/// Scans the longest numeric prefix of `text`, the way a lenient float reader
/// does: leading whitespace, an optional sign, digits with an optional
/// fraction and an optional exponent. Anything after the prefix is ignored.
///
/// Returns the value and the number of bytes consumed.
fn scan_number(text: &str) -> Option<(Decimal, usize)> {
    let trimmed = text.trim_start();
    let skipped = text.len() - trimmed.len();
    let bytes = trimmed.as_bytes();
    let mut idx = 0;
    let mut negative = false;

    if let Some(&sign) = bytes.first()
        && (sign == b'+' || sign == b'-')
    {
        negative = sign == b'-';
        idx += 1;
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let int_digits = &trimmed[int_start..idx];

    let mut frac_digits = "";
    if idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &trimmed[frac_start..end];
        idx = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    // Exponent only counts when at least one digit follows the marker.
    let mut exponent = 0i64;
    if idx < bytes.len() && (bytes[idx] == b'e' || bytes[idx] == b'E') {
        let mut end = idx + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            let text = &trimmed[idx + 1..end];
            exponent = text.parse().unwrap_or(if text.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            });
            idx = end;
        }
    }

    let value = decimal_from_parts(negative, int_digits, frac_digits, exponent)?;
    Some((value, skipped + idx))
}

/// Builds `±int.frac × 10^exponent` in plain decimal notation.
///
/// Values too small for the 28-digit scale read as zero; values past the
/// `Decimal` range are `None`.
fn decimal_from_parts(
    negative: bool,
    int_digits: &str,
    frac_digits: &str,
    exponent: i64,
) -> Option<Decimal> {
    let digits = format!("{int_digits}{frac_digits}");
    let significant = digits.trim_start_matches('0');
    let leading_zeros = (digits.len() - significant.len()) as i64;
    let significant = significant.trim_end_matches('0');
    if significant.is_empty() {
        return Some(Decimal::ZERO);
    }

    // Position of the decimal point relative to the first significant digit.
    let point = (int_digits.len() as i64)
        .saturating_sub(leading_zeros)
        .saturating_add(exponent);
    if point > MAX_INTEGER_DIGITS {
        return None;
    }
    if point < -MAX_SCALE {
        return Some(Decimal::ZERO);
    }

    let len = significant.len() as i64;
    let mut plain = String::with_capacity(significant.len() + MAX_SCALE as usize + 3);
    if negative {
        plain.push('-');
    }
    if point <= 0 {
        plain.push_str("0.");
        plain.extend(std::iter::repeat_n('0', (-point) as usize));
        plain.push_str(significant);
    } else if point >= len {
        plain.push_str(significant);
        plain.extend(std::iter::repeat_n('0', (point - len) as usize));
    } else {
        let (whole, fraction) = significant.split_at(point as usize);
        plain.push_str(whole);
        plain.push('.');
        plain.push_str(fraction);
    }

    let mut value = Decimal::from_str(&plain).ok()?;
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    Some(value)
}

/// Reads `text` the lenient way and fixes it to `precision` digits.
fn read_fixed(text: &str, precision: Precision) -> Option<Decimal> {
    scan_number(text).and_then(|(value, _)| to_fixed(value, precision))
}

/// Reads `text` only if the whole of it is a number.
pub fn parse_strict(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    match scan_number(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => Some(value),
        _ => None,
    }
}

/// Rounds to exactly `precision` digits, or `None` when the integer part
/// leaves no room for them.
fn to_fixed(value: Decimal, precision: Precision) -> Option<Decimal> {
    let mut fixed =
        value.round_dp_with_strategy(precision.digits(), RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(precision.digits());
    if fixed.scale() != precision.digits() {
        return None;
    }
    if fixed.is_zero() {
        fixed.set_sign_positive(true);
    }
    Some(fixed)
}

/// Parses user text into a display amount with exactly `precision` digits.
///
/// When `normalize_thousands_separator` is set, the text is also read with its
/// first comma removed. If the two readings disagree, the comma was
/// load-bearing and the input is rejected as ambiguous instead of guessed.
pub fn parse_input(
    raw: &str,
    precision: Precision,
    normalize_thousands_separator: bool,
) -> ParsedInput {
    if raw.is_empty() {
        return ParsedInput::Empty;
    }

    let Some(literal) = read_fixed(raw, precision) else {
        return ParsedInput::Invalid;
    };
    if !normalize_thousands_separator {
        return ParsedInput::Number(literal);
    }

    match read_fixed(&raw.replacen(',', "", 1), precision) {
        Some(stripped) if stripped == literal => ParsedInput::Number(stripped),
        _ => ParsedInput::Invalid,
    }
}

/// Converts a display amount to minor units, rounding half away from zero.
pub fn to_minor_units(display: Decimal, precision: Precision) -> Result<i64> {
    display
        .checked_mul(precision.factor())
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|scaled| scaled.to_i64())
        .ok_or_else(|| {
            PayoutError::ValidationError(format!("Amount {display} does not fit in minor units"))
        })
}

/// Exact display value of an amount in minor units.
pub fn to_display_value(minor_units: i64, precision: Precision) -> Decimal {
    Decimal::new(minor_units, precision.digits())
}

/// Whether an amount field should be flagged as erroneous.
///
/// A zero minimum is treated as "no minimum".
pub fn has_error(
    current: Option<Decimal>,
    min_minor_units: Option<i64>,
    required: bool,
    precision: Precision,
) -> bool {
    let below_min = match (current, min_minor_units) {
        (Some(value), Some(min)) if min != 0 => value < to_display_value(min, precision),
        _ => false,
    };
    (required && current.is_none()) || below_min
}
