/// A PIX key identifying the payment recipient.
///
/// Keys come in four shapes: phone number, email address, CPF/CNPJ, or a
/// random (EVP) key. Construction strips the formatting characters an
/// administrator may have typed and normalizes phone numbers into the
/// `+55...` form scanning apps expect; every other shape passes through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixKey(String);

impl PixKey {
    pub fn new(raw: &str) -> Self {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '+'))
            .collect();

        // A bare digit string of 10+ characters is an area code plus a
        // phone number; shorter digit strings (e.g. a CPF fragment) are
        // treated as opaque keys.
        let is_phone = !cleaned.is_empty()
            && cleaned.len() >= 10
            && cleaned.chars().all(|c| c.is_ascii_digit());

        if is_phone {
            let with_country = if cleaned.starts_with("55") {
                cleaned
            } else {
                format!("55{cleaned}")
            };
            Self(format!("+{with_country}"))
        } else {
            Self(cleaned)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PixKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
