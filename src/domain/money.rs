use crate::error::{BrCodeError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a non-negative monetary amount in BRL.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce
/// domain-specific rules. Payloads always carry the amount with exactly two
/// fraction digits and `.` as the decimal separator, which is what
/// `Display` renders.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(BrCodeError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = BrCodeError;

    fn try_from(value: Decimal) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}
