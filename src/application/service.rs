use crate::domain::charge::Charge;
use crate::domain::key::PixKey;
use crate::domain::merchant::MerchantName;
use crate::domain::money::Amount;
use crate::domain::payload::PixPayload;
use crate::domain::ports::ConfigStoreBox;
use crate::error::Result;

/// Configuration entry holding the shop's PIX key.
pub const PIX_KEY_SETTING: &str = "chave_pix";
/// Fallback key used when the setting was never saved.
pub const DEFAULT_PIX_KEY: &str = "19995056708";
/// Beneficiary name used when a charge does not carry one.
pub const DEFAULT_MERCHANT_NAME: &str = "Oficina";

/// Builds payment payloads for charge records.
///
/// `ChargeService` owns the configuration store and resolves the PIX key
/// and beneficiary name for each charge: the record's own values win, then
/// the stored configuration, then the defaults above. The payload
/// assembly itself is pure; only the configuration lookup touches a store.
pub struct ChargeService {
    config: ConfigStoreBox,
}

impl ChargeService {
    pub fn new(config: ConfigStoreBox) -> Self {
        Self { config }
    }

    /// Resolves a charge into a ready-to-render payload.
    pub async fn payload_for(&self, charge: Charge) -> Result<PixPayload> {
        let key = match charge.key {
            Some(key) if !key.trim().is_empty() => key,
            _ => self
                .config
                .get(PIX_KEY_SETTING)
                .await?
                .unwrap_or_else(|| DEFAULT_PIX_KEY.to_string()),
        };
        let name = charge
            .name
            .unwrap_or_else(|| DEFAULT_MERCHANT_NAME.to_string());
        let amount = Amount::new(charge.amount)?;

        Ok(PixPayload::new(
            PixKey::new(&key),
            amount,
            MerchantName::new(&name),
        ))
    }
}
