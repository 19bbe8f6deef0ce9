use crate::domain::payload::PixPayload;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PayloadRow<'a> {
    key: &'a str,
    amount: String,
    name: &'a str,
    payload: String,
}

/// Writes resolved charges and their payload strings as CSV.
///
/// Each row carries the normalized key, the amount as embedded in the
/// payload, the truncated/upper-cased beneficiary name, and the complete
/// payload. The header is emitted on the first record.
pub struct PayloadWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayloadWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_payload(&mut self, payload: &PixPayload) -> Result<()> {
        self.writer.serialize(PayloadRow {
            key: payload.key().as_str(),
            amount: payload.amount().to_string(),
            name: payload.merchant().as_str(),
            payload: payload.build(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
