use log::info;
use serde::Serialize;

use crate::{
    config::MintConfig,
    error::Result,
    feature::{FeatureElement, FeatureVector},
    fingerprint::{FingerprintHash, FingerprintHasher},
    minter::{self, MintAddress, MintReceipt},
    template::AddressTemplate,
    validator,
};

/// Everything produced while turning one feature vector into an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derivation {
    pub descriptors: usize,
    pub probe_counter: u64,
    pub fingerprint: FingerprintHash,
    pub template: AddressTemplate,
    pub payload_hex: String,
    pub checksum_hex: String,
    pub address: MintAddress,
    pub valid: bool,
}

/// Feature vector -> fingerprint -> template -> address -> validity.
///
/// Holds nothing but immutable configuration, so one engine can be shared
/// between threads and every call is independent.
#[derive(Debug, Clone)]
pub struct Engine {
    config: MintConfig,
    hasher: FingerprintHasher,
}

impl Default for Engine {
    fn default() -> Self {
        let config = MintConfig::default();
        let hasher = FingerprintHasher::from_config(&config);
        Engine { config, hasher }
    }
}

impl Engine {
    pub fn new(config: MintConfig) -> Result<Self> {
        config.validate()?;
        let hasher = FingerprintHasher::from_config(&config);
        Ok(Engine { config, hasher })
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    pub fn derive<T: FeatureElement>(&self, vector: &FeatureVector<T>) -> Result<Derivation> {
        let probe = self.hasher.probe(vector)?;
        let template = AddressTemplate::build(&probe.fingerprint, &self.config)?;
        let MintReceipt {
            payload_hex,
            checksum_hex,
            address,
        } = minter::mint_receipt(&template)?;
        let valid = validator::is_valid_for(address.as_str(), self.config.version_byte);

        info!(
            "Derived {} from {} descriptor(s) (valid: {})",
            address,
            vector.descriptor_count(),
            valid
        );

        Ok(Derivation {
            descriptors: vector.descriptor_count(),
            probe_counter: probe.counter,
            fingerprint: probe.fingerprint,
            template,
            payload_hex,
            checksum_hex,
            address,
            valid,
        })
    }

    /// Burn an explicit template string under this engine's layout
    pub fn mint_template(&self, text: &str) -> Result<MintReceipt> {
        let template = AddressTemplate::parse(text, &self.config)?;
        minter::mint_receipt(&template)
    }

    pub fn validate(&self, address: &str) -> bool {
        validator::is_valid_for(address, self.config.version_byte)
    }
}
