/// Merchant display name embedded in the payload.
///
/// The merchant name field is capped at 25 characters; longer names are
/// truncated and the result upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantName(String);

impl MerchantName {
    pub const MAX_LEN: usize = 25;

    pub fn new(raw: &str) -> Self {
        let name: String = raw.chars().take(Self::MAX_LEN).collect();
        Self(name.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MerchantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
