use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of a charge batch: an optional PIX key override, the amount
/// due, and an optional beneficiary name. Absent fields fall back to the
/// configured values when the payload is built.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Charge {
    pub key: Option<String>,
    pub amount: Decimal,
    pub name: Option<String>,
}
