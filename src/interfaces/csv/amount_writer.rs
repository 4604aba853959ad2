use crate::application::amount_input::AmountInput;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Outcome of feeding one row through an amount field.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct AmountRecord {
    pub currency: String,
    pub prefix: String,
    pub input: String,
    pub display: String,
    pub status: &'static str,
    pub minor: Option<i64>,
    pub error: bool,
}

impl AmountRecord {
    pub fn new(input: &str, field: &AmountInput) -> Self {
        Self {
            currency: field.config().currency.clone(),
            prefix: field.prefix(),
            input: input.to_string(),
            display: field.display_text(),
            status: field.value().status(),
            minor: field.value().minor_units(),
            error: field.has_error(),
        }
    }
}

pub struct AmountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AmountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &AmountRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
