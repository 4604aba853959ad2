use crate::error::{PayoutError, Result};
use serde::Deserialize;
use std::io::Read;

/// One amount typed by a user, in a given currency.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct AmountRow {
    pub currency: String,
    #[serde(default)]
    pub input: String,
}

/// Reads amount rows from a CSV source with a `currency,input` header.
///
/// Wraps `csv::Reader` and yields one `Result<AmountRow>` per record, so a
/// malformed line does not stop the stream.
pub struct AmountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AmountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes rows. Rows without a currency are errors.
    pub fn rows(self) -> impl Iterator<Item = Result<AmountRow>> {
        self.reader.into_deserialize().map(|result| {
            let row: AmountRow = result.map_err(PayoutError::from)?;
            if row.currency.is_empty() {
                return Err(PayoutError::ValidationError(
                    "Missing currency".to_string(),
                ));
            }
            Ok(row)
        })
    }
}
