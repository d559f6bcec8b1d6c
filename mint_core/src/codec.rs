//! Plain base58 with the Bitcoin alphabet, no checksum.

use crate::error::{MintError, Result};

pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn is_base58_char(c: char) -> bool {
    ALPHABET.contains(c)
}

/// Base58 encode a byte string. Every leading zero byte becomes one leading '1'.
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a base58 string back into bytes, failing on any glyph outside the alphabet
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    if let Some((idx, c)) = encoded.char_indices().find(|(_, c)| !is_base58_char(*c)) {
        return Err(MintError::MalformedBase58(format!(
            "[codec::decode] ERROR: invalid character {:?} at position {}",
            c, idx
        )));
    }

    bs58::decode(encoded)
        .into_vec()
        .map_err(|e| MintError::MalformedBase58(format!("[codec::decode] ERROR: {}", e)))
}
