use sha2::{Digest, Sha256};

use crate::{
    codec,
    constants::CHECKSUM_LEN,
    error::{MintError, Result},
};

/// SHA-256 applied twice
pub fn double_sha256(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let hash1 = hasher.finalize();

    let mut hasher = Sha256::new();
    hasher.update(hash1);
    hasher.finalize().into()
}

/// Calculates the checksum - first 4 bytes of SHA-256(SHA-256(bytes))
pub fn checksum(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(bytes);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}

/// The checksum rendered as 8 lowercase hex characters
pub fn checksum_hex(bytes: &[u8]) -> String {
    hex::encode(checksum(bytes))
}

/// Append the checksum to the given bytes and base58 encode the result
pub fn checked_encode(bytes: &[u8]) -> String {
    let full = [bytes, &checksum(bytes)[..]].concat();
    codec::encode(&full)
}

/// Decode a base58-check string and verify its trailing checksum.
/// Returns the bytes in front of the checksum (version byte + payload).
pub fn checked_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut decoded = codec::decode(encoded)?;

    if decoded.len() < CHECKSUM_LEN {
        return Err(MintError::MalformedBase58(format!(
            "[checksum::checked_decode] ERROR: {} bytes is too short to carry a checksum",
            decoded.len()
        )));
    }

    let found = decoded.split_off(decoded.len() - CHECKSUM_LEN);
    let expected = checksum(&decoded);
    if found[..] != expected[..] {
        return Err(MintError::ChecksumMismatch {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }

    Ok(decoded)
}
