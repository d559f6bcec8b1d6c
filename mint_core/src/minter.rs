use std::fmt;

use serde::Serialize;

use crate::{
    checksum, codec,
    config::MintConfig,
    error::{MintError, Result},
    template::AddressTemplate,
};

/// A minted base58-check address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MintAddress(String);

impl MintAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MintAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The address together with the hex pieces it was assembled from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintReceipt {
    pub payload_hex: String,
    pub checksum_hex: String,
    pub address: MintAddress,
}

/// Burn a template into an address.
pub fn mint(template: &AddressTemplate) -> Result<MintAddress> {
    mint_receipt(template).map(|receipt| receipt.address)
}

/// Burn a template, keeping the intermediate payload and checksum.
///
/// The decoded template loses its last `trim_bytes` bytes, which are filler and
/// are dropped without any verification. The checksum is computed over the
/// remaining raw bytes, not over their hex form.
pub fn mint_receipt(template: &AddressTemplate) -> Result<MintReceipt> {
    let decoded = codec::decode(template.as_str())?;
    let trim = template.trim_bytes();
    if decoded.len() <= trim {
        return Err(MintError::TemplateLayout(format!(
            "[minter::mint] ERROR: {} decoded bytes cannot lose {} bytes of filler",
            decoded.len(),
            trim
        )));
    }

    let payload = &decoded[..decoded.len() - trim];
    let payload_hex = hex::encode(payload);
    let checksum_hex = checksum::checksum_hex(payload);

    // Payload and checksum are joined as one hex string before encoding
    let full = hex::decode(format!("{}{}", payload_hex, checksum_hex))
        .map_err(|e| MintError::TemplateLayout(format!("[minter::mint] ERROR: {}", e)))?;

    Ok(MintReceipt {
        payload_hex,
        checksum_hex,
        address: MintAddress(codec::encode(&full)),
    })
}

/// Parse and burn a raw template string. A malformed template is a hard failure.
pub fn burn(text: &str, config: &MintConfig) -> Result<MintAddress> {
    let template = AddressTemplate::parse(text, config)?;
    mint(&template)
}
