use crate::domain::charge::Charge;
use crate::error::{BrCodeError, Result};
use std::io::Read;

/// Reads charges from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Charge>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct ChargeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ChargeReader<R> {
    /// Creates a new `ChargeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes charges.
    ///
    /// This allows for processing large batches in a streaming fashion
    /// without loading the entire file into memory.
    pub fn charges(self) -> impl Iterator<Item = Result<Charge>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BrCodeError::from))
    }
}
