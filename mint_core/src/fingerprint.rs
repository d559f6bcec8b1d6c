use std::fmt;

use log::{debug, trace};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{
    config::MintConfig,
    constants::{EXCLUDED_FINGERPRINT_CHARS, FINGERPRINT_LEN, MAX_PROBE_ITERATIONS},
    error::{MintError, Result},
    feature::{FeatureElement, FeatureVector},
};

/// 19 lowercase hex characters derived from a feature vector, never containing '0'
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FingerprintHash(String);

impl FingerprintHash {
    /// Parse a fingerprint produced elsewhere, e.g. one pasted into the CLI
    pub fn parse(text: &str) -> Result<Self> {
        if text.len() != FINGERPRINT_LEN {
            return Err(MintError::TemplateLayout(format!(
                "fingerprint must be {} characters, got {}",
                FINGERPRINT_LEN,
                text.len()
            )));
        }
        if !text.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(MintError::TemplateLayout(format!(
                "fingerprint {:?} is not lowercase hex",
                text
            )));
        }
        if !is_acceptable(text) {
            return Err(MintError::TemplateLayout(format!(
                "fingerprint {:?} contains an excluded character",
                text
            )));
        }
        Ok(FingerprintHash(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FingerprintHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a successful probe: the fingerprint and the rotation that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub fingerprint: FingerprintHash,
    pub counter: u64,
}

/// Whether a candidate fingerprint is free of excluded characters.
///
/// The 'I' half of the rule is dead logic: candidates are lowercase hex and can
/// never contain it. The check stays so the acceptance rule is unchanged.
pub fn is_acceptable(candidate: &str) -> bool {
    !candidate.contains(EXCLUDED_FINGERPRINT_CHARS)
}

/// Rotate-and-rehash search for an acceptable fingerprint.
///
/// Rotation `counter` of the vector is hashed with SHA-256 and the first 19 hex
/// characters are kept. The first candidate without excluded characters wins.
/// Rotations repeat with the vector's period, so the search is bounded by
/// `max_iterations` instead of running until a candidate turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintHasher {
    max_iterations: u64,
}

impl Default for FingerprintHasher {
    fn default() -> Self {
        FingerprintHasher {
            max_iterations: MAX_PROBE_ITERATIONS,
        }
    }
}

impl FingerprintHasher {
    pub fn new(max_iterations: u64) -> Self {
        FingerprintHasher { max_iterations }
    }

    pub fn from_config(config: &MintConfig) -> Self {
        FingerprintHasher::new(config.max_probe_iterations)
    }

    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    pub fn hash<T: FeatureElement>(&self, vector: &FeatureVector<T>) -> Result<FingerprintHash> {
        self.probe(vector).map(|p| p.fingerprint)
    }

    pub fn probe<T: FeatureElement>(&self, vector: &FeatureVector<T>) -> Result<Probe> {
        // An empty vector rotates to itself forever and its hash starts "e3b0",
        // so the search could never succeed.
        if vector.is_empty() {
            return Err(MintError::EmptyInput);
        }

        for counter in 0..self.max_iterations {
            let candidate = candidate(&vector.rotated_bytes(counter));
            if is_acceptable(&candidate) {
                debug!(
                    "[FingerprintHasher::probe] accepted {} after {} rotation(s)",
                    candidate, counter
                );
                return Ok(Probe {
                    fingerprint: FingerprintHash(candidate),
                    counter,
                });
            }
            trace!(
                "[FingerprintHasher::probe] rejected {} at rotation {}",
                candidate, counter
            );
        }

        Err(MintError::HashSearchExhausted {
            attempts: self.max_iterations,
        })
    }
}

fn candidate(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut hexed = hex::encode(digest);
    hexed.truncate(FINGERPRINT_LEN);
    hexed
}
