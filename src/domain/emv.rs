use crate::error::{BrCodeError, Result};

/// One decoded `ID + LEN + VALUE` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    pub id: String,
    pub value: String,
}

/// Encodes a single field: two-character ID, decimal byte length of the
/// value left-padded to two digits, then the value itself.
pub fn field(id: &str, value: &str) -> String {
    format!("{id}{:02}{value}", value.len())
}

/// Decodes a flat sequence of `ID + LEN + VALUE` fields.
///
/// Composite values (merchant account information, additional data) nest
/// the same grammar and can be fed back through this function.
pub fn decode(data: &str) -> Result<Vec<Tlv>> {
    if !data.is_ascii() {
        return Err(BrCodeError::PayloadError(
            "payload must be ASCII".to_string(),
        ));
    }

    let mut fields = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        if rest.len() < 4 {
            return Err(BrCodeError::PayloadError(format!(
                "truncated field header: {rest:?}"
            )));
        }
        let id = &rest[..2];
        let len: usize = rest[2..4]
            .parse()
            .map_err(|_| BrCodeError::PayloadError(format!("bad length in field {id}")))?;
        let value_end = 4 + len;
        if rest.len() < value_end {
            return Err(BrCodeError::PayloadError(format!(
                "field {id} declares {len} bytes but only {} remain",
                rest.len() - 4
            )));
        }
        fields.push(Tlv {
            id: id.to_string(),
            value: rest[4..value_end].to_string(),
        });
        rest = &rest[value_end..];
    }
    Ok(fields)
}
