use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    codec::is_base58_char,
    constants::{
        FILLER_BYTES, MAX_PROBE_ITERATIONS, P2PKH_VERSION, TEMPLATE_BYTES, TEMPLATE_FILLER,
        TEMPLATE_PREFIX,
    },
    error::{MintError, Result},
};

/// Tunables of the derivation. Any field left out of a config file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MintConfig {
    pub prefix: String,
    pub filler: String,
    /// Bytes the decoded filler occupies at the end of a template
    pub trim_bytes: usize,
    /// Decoded length every template must have
    pub template_bytes: usize,
    pub version_byte: u8,
    pub max_probe_iterations: u64,
}

impl Default for MintConfig {
    fn default() -> Self {
        MintConfig {
            prefix: TEMPLATE_PREFIX.to_string(),
            filler: TEMPLATE_FILLER.to_string(),
            trim_bytes: FILLER_BYTES,
            template_bytes: TEMPLATE_BYTES,
            version_byte: P2PKH_VERSION,
            max_probe_iterations: MAX_PROBE_ITERATIONS,
        }
    }
}

impl MintConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MintConfig = serde_json::from_str(json).map_err(|e| {
            MintError::Config(format!("[MintConfig::from_json_str] ERROR: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        MintConfig::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_probe_iterations == 0 {
            return Err(MintError::Config(
                "max_probe_iterations must be at least 1".into(),
            ));
        }
        if self.trim_bytes >= self.template_bytes {
            return Err(MintError::Config(format!(
                "trim_bytes ({}) must be smaller than template_bytes ({})",
                self.trim_bytes, self.template_bytes
            )));
        }
        for (name, text) in [("prefix", &self.prefix), ("filler", &self.filler)] {
            if let Some(c) = text.chars().find(|c| !is_base58_char(*c)) {
                return Err(MintError::Config(format!(
                    "{} contains {:?}, which is not a base58 character",
                    name, c
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = MintConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.prefix, "1BtcMint");
        assert_eq!(config.filler, "XXXXXXX");
        assert_eq!(config.max_probe_iterations, 10_000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MintConfig::from_json_str(r#"{ "max_probe_iterations": 25 }"#).unwrap();
        assert_eq!(config.max_probe_iterations, 25);
        assert_eq!(config.prefix, TEMPLATE_PREFIX);
        assert_eq!(config.trim_bytes, FILLER_BYTES);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            MintConfig::from_json_str(r#"{ "max_probe_iterations": 0 }"#),
            Err(MintError::Config(_))
        ));
        assert!(matches!(
            MintConfig::from_json_str(r#"{ "prefix": "0BtcMint" }"#),
            Err(MintError::Config(_))
        ));
        assert!(matches!(
            MintConfig::from_json_str(r#"{ "trim_bytes": 25 }"#),
            Err(MintError::Config(_))
        ));
        assert!(matches!(
            MintConfig::from_json_str("not json"),
            Err(MintError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "filler": "ZZZZZZZ" }}"#).unwrap();

        let config = MintConfig::load(file.path()).unwrap();
        assert_eq!(config.filler, "ZZZZZZZ");
    }
}
