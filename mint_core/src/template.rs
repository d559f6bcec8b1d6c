use std::fmt;

use serde::Serialize;

use crate::{
    codec,
    config::MintConfig,
    constants::FINGERPRINT_LEN,
    error::{MintError, Result},
    fingerprint::FingerprintHash,
};

/// `prefix + fingerprint + filler`, e.g. `1BtcMintbafa52e3c9b5c87242bXXXXXXX`.
///
/// A template only exists once its layout has been checked: it decodes to
/// exactly `template_bytes` bytes, the first being the version byte. That is
/// what makes dropping the last `trim_bytes` bytes during minting remove the
/// filler and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressTemplate {
    text: String,
    #[serde(skip)]
    trim_bytes: usize,
}

impl AddressTemplate {
    /// Build the template for a fingerprint with the default layout
    pub fn new(fingerprint: &FingerprintHash) -> Result<Self> {
        AddressTemplate::build(fingerprint, &MintConfig::default())
    }

    pub fn build(fingerprint: &FingerprintHash, config: &MintConfig) -> Result<Self> {
        let text = format!("{}{}{}", config.prefix, fingerprint, config.filler);
        AddressTemplate::parse(&text, config)
    }

    /// Check an arbitrary string against the template layout
    pub fn parse(text: &str, config: &MintConfig) -> Result<Self> {
        let expected_len = config.prefix.len() + FINGERPRINT_LEN + config.filler.len();
        if text.len() != expected_len
            || !text.starts_with(&config.prefix)
            || !text.ends_with(&config.filler)
        {
            return Err(MintError::TemplateLayout(format!(
                "expected {:?} + {} characters + {:?}, got {:?}",
                config.prefix, FINGERPRINT_LEN, config.filler, text
            )));
        }

        let decoded = codec::decode(text)?;
        if decoded.len() != config.template_bytes {
            return Err(MintError::TemplateLayout(format!(
                "{:?} decodes to {} bytes, expected {}",
                text,
                decoded.len(),
                config.template_bytes
            )));
        }
        if decoded[0] != config.version_byte {
            return Err(MintError::TemplateLayout(format!(
                "{:?} decodes to version byte {:#04x}, expected {:#04x}",
                text, decoded[0], config.version_byte
            )));
        }

        Ok(AddressTemplate {
            text: text.to_string(),
            trim_bytes: config.trim_bytes,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of decoded bytes that belong to the filler
    pub fn trim_bytes(&self) -> usize {
        self.trim_bytes
    }
}

impl fmt::Display for AddressTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
