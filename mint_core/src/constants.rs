/// Leading text of every address template. The leading '1' decodes to the 0x00 version byte.
pub const TEMPLATE_PREFIX: &str = "1BtcMint";
/// Placeholder tail of every address template, dropped again after decoding
pub const TEMPLATE_FILLER: &str = "XXXXXXX";

pub const FINGERPRINT_LEN: usize = 19;

// "1BtcMint" + 19 fingerprint chars + "XXXXXXX" always decodes to 25 bytes,
// the last 4 of which belong to the filler.
pub const TEMPLATE_BYTES: usize = 25;
pub const FILLER_BYTES: usize = 4;

pub const CHECKSUM_LEN: usize = 4;

/// Mainnet P2PKH version byte
pub const P2PKH_VERSION: u8 = 0x00;

pub const MAX_PROBE_ITERATIONS: u64 = 10_000;

/// Width of one SIFT descriptor
pub const DESCRIPTOR_WIDTH: usize = 128;

/// Characters a fingerprint may never contain. 'I' can never show up in
/// lowercase hex, so only '0' ever rejects a candidate.
pub const EXCLUDED_FINGERPRINT_CHARS: [char; 2] = ['0', 'I'];
