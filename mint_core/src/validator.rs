use log::debug;

use crate::{
    checksum::checked_decode,
    constants::P2PKH_VERSION,
    error::{MintError, Result},
};

/// True iff the address is base58-check valid and carries the mainnet P2PKH
/// version byte. Never fails: every decode or checksum error reads as `false`.
pub fn is_valid(address: &str) -> bool {
    is_valid_for(address, P2PKH_VERSION)
}

pub fn is_valid_for(address: &str, version: u8) -> bool {
    match version_byte(address) {
        Ok(v) => v == version,
        Err(e) => {
            debug!("[validator::is_valid] {:?} rejected: {}", address, e);
            false
        }
    }
}

/// Version byte of a base58-check address
pub fn version_byte(address: &str) -> Result<u8> {
    let prefix = checked_decode(address)?;
    prefix.first().copied().ok_or_else(|| {
        MintError::MalformedBase58("[validator::version_byte] ERROR: empty payload".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::checked_encode;

    #[test]
    fn test_p2pkh_address_is_valid() {
        assert!(is_valid("1111111111111111111114oLvT2"));
        assert!(is_valid("1BtcMintbafa52e3c9b5c87242bXSTR6Yg"));
    }

    #[test]
    fn test_other_version_is_invalid() {
        // version 5 (P2SH) with an all-zero hash
        let p2sh = "31h1vYVSYuKP6AhS86fbRdMw9XHieotbST";
        assert_eq!(version_byte(p2sh).unwrap(), 0x05);
        assert!(!is_valid(p2sh));
        assert!(is_valid_for(p2sh, 0x05));
    }

    #[test]
    fn test_flipped_trailing_character_is_invalid() {
        assert!(!is_valid("1BtcMintbafa52e3c9b5c87242bXSTR6Yh"));
    }

    #[test]
    fn test_garbage_is_invalid_not_an_error() {
        for addr in ["", "0OIl", "Ldp", "not an address"] {
            assert!(!is_valid(addr));
        }
        // checksum of nothing: decodes fine but has no version byte
        assert!(!is_valid(&checked_encode(&[])));
    }
}
