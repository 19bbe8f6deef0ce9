use super::crc;
use super::emv;
use super::key::PixKey;
use super::merchant::MerchantName;
use super::money::Amount;

// Fixed field content for a static single-merchant BR Code.
const PAYLOAD_FORMAT: &str = "01";
const PIX_GUI: &str = "br.gov.bcb.pix";
const MERCHANT_CATEGORY: &str = "0000";
const CURRENCY_BRL: &str = "986";
const COUNTRY: &str = "BR";
const MERCHANT_CITY: &str = "SAO PAULO";
const REFERENCE: &str = "***";

/// A complete PIX BR Code payload for one charge.
///
/// Assembles the EMV tag-length-value record a banking app scans: payload
/// format, merchant account information (the PIX key under the central
/// bank's domain), category code, currency, amount, country, merchant name
/// and city, a transaction reference placeholder, and the CRC-16 checksum
/// that closes the record.
#[derive(Debug, Clone, PartialEq)]
pub struct PixPayload {
    key: PixKey,
    amount: Amount,
    merchant: MerchantName,
}

impl PixPayload {
    pub fn new(key: PixKey, amount: Amount, merchant: MerchantName) -> Self {
        Self {
            key,
            amount,
            merchant,
        }
    }

    pub fn key(&self) -> &PixKey {
        &self.key
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn merchant(&self) -> &MerchantName {
        &self.merchant
    }

    /// Renders the payload string.
    ///
    /// The checksum covers the literal byte sequence of everything before
    /// it, including its own `6304` header, so the fields must be
    /// concatenated in exactly this order before it is computed.
    pub fn build(&self) -> String {
        let account = emv::field(
            "26",
            &format!(
                "{}{}",
                emv::field("00", PIX_GUI),
                emv::field("01", self.key.as_str())
            ),
        );
        let additional = emv::field("62", &emv::field("05", REFERENCE));

        let mut payload = String::new();
        payload.push_str(&emv::field("00", PAYLOAD_FORMAT));
        payload.push_str(&account);
        payload.push_str(&emv::field("52", MERCHANT_CATEGORY));
        payload.push_str(&emv::field("53", CURRENCY_BRL));
        payload.push_str(&emv::field("54", &self.amount.to_string()));
        payload.push_str(&emv::field("58", COUNTRY));
        payload.push_str(&emv::field("59", self.merchant.as_str()));
        payload.push_str(&emv::field("60", MERCHANT_CITY));
        payload.push_str(&additional);
        payload.push_str("6304");

        let check = crc::encode(&payload);
        payload.push_str(&check);
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payload(key: &str, amount: rust_decimal::Decimal, name: &str) -> PixPayload {
        PixPayload::new(
            PixKey::new(key),
            Amount::new(amount).unwrap(),
            MerchantName::new(name),
        )
    }

    #[test]
    fn test_known_payload() {
        let built = payload("19995056708", dec!(25.50), "OFICINA").build();
        assert_eq!(
            built,
            "00020126360014br.gov.bcb.pix0114+5519995056708520400005303986540525.50\
             5802BR5907OFICINA6009SAO PAULO62070503***6304BD8F"
        );
    }

    #[test]
    fn test_checksum_matches_preceding_bytes() {
        let built = payload("oficina@example.com", dec!(150), "Oficina").build();
        assert!(crc::verify(&built));
    }

    #[test]
    fn test_zero_amount() {
        let built = payload("19995056708", dec!(0), "Oficina").build();
        assert!(built.contains("54040.00"));
        assert!(crc::verify(&built));
    }
}
