pub mod checksum;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod feature;
pub mod fingerprint;
pub mod minter;
pub mod pipeline;
pub mod template;
pub mod validator;

pub use config::MintConfig;
pub use error::{MintError, Result};
pub use feature::FeatureVector;
pub use fingerprint::{FingerprintHash, FingerprintHasher};
pub use minter::MintAddress;
pub use pipeline::{Derivation, Engine};
pub use template::AddressTemplate;
