use std::path::{Path, PathBuf};

use log::debug;
use mint_core::{
    feature::FeatureElement, fingerprint::Probe, validator, Derivation, Engine, FeatureVector,
    FingerprintHasher, MintConfig,
};
use serde::Serialize;

use crate::cli::cli::CliUI;

#[derive(Serialize)]
struct ValidationReport<'a> {
    address: &'a str,
    valid: bool,
    version_byte: Option<u8>,
}

/// Build the engine from the optional config file and probe override
pub fn load_engine(config_path: &Option<PathBuf>, max_probes: Option<u64>) -> Engine {
    let mut config = match config_path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            unwrap_or_exit(MintConfig::load(path), "failed to load config")
        }
        None => MintConfig::default(),
    };
    if let Some(max) = max_probes {
        config.max_probe_iterations = max;
    }

    unwrap_or_exit(Engine::new(config), "invalid configuration")
}

pub fn handle_derive(engine: &Engine, file: &Path, float: bool, json: bool) {
    let derivation = if float {
        let vector = unwrap_or_exit(
            FeatureVector::<f32>::read_from(file),
            "failed to read feature file",
        );
        derive_vector(engine, &vector)
    } else {
        let vector = unwrap_or_exit(
            FeatureVector::<u8>::read_from(file),
            "failed to read feature file",
        );
        derive_vector(engine, &vector)
    };

    if json {
        print_json(&derivation);
        return;
    }

    CliUI::print_header("Derive Address");
    CliUI::print_kv("Descriptors", &derivation.descriptors.to_string());
    CliUI::print_kv("Fingerprint", derivation.fingerprint.as_str());
    CliUI::print_kv("Probe rotations", &derivation.probe_counter.to_string());
    CliUI::print_kv("Template", derivation.template.as_str());
    CliUI::print_kv("BTC Address", derivation.address.as_str());
    CliUI::print_kv("Valid format?", yes_no(derivation.valid));
}

pub fn handle_fingerprint(engine: &Engine, file: &Path, float: bool) {
    CliUI::print_header("Fingerprint");
    let hasher = FingerprintHasher::from_config(engine.config());
    let probe: Probe = if float {
        let vector = unwrap_or_exit(
            FeatureVector::<f32>::read_from(file),
            "failed to read feature file",
        );
        unwrap_or_exit(hasher.probe(&vector), "failed to fingerprint feature vector")
    } else {
        let vector = unwrap_or_exit(
            FeatureVector::<u8>::read_from(file),
            "failed to read feature file",
        );
        unwrap_or_exit(hasher.probe(&vector), "failed to fingerprint feature vector")
    };

    CliUI::print_kv("Fingerprint", probe.fingerprint.as_str());
    CliUI::print_kv("Probe rotations", &probe.counter.to_string());
}

pub fn handle_mint(engine: &Engine, template: &str, json: bool) {
    let receipt = unwrap_or_exit(engine.mint_template(template), "failed to mint template");

    if json {
        print_json(&receipt);
        return;
    }

    CliUI::print_header("Mint Address");
    CliUI::print_kv("Template", template);
    CliUI::print_kv("Payload", &receipt.payload_hex);
    CliUI::print_kv("Checksum", &receipt.checksum_hex);
    CliUI::print_kv("BTC Address", receipt.address.as_str());
    CliUI::print_kv(
        "Valid format?",
        yes_no(engine.validate(receipt.address.as_str())),
    );
}

pub fn handle_validate(engine: &Engine, address: &str, verbose: bool, json: bool) {
    let valid = engine.validate(address);
    let version_byte = validator::version_byte(address);

    if json {
        print_json(&ValidationReport {
            address,
            valid,
            version_byte: version_byte.as_ref().ok().copied(),
        });
        return;
    }

    CliUI::print_header("Validate Address");
    CliUI::print_kv("Address", address);
    CliUI::print_kv("Valid format?", yes_no(valid));
    if verbose {
        match version_byte {
            Ok(v) => CliUI::print_kv("Version byte", &format!("{:#04x}", v)),
            Err(e) => CliUI::print_kv("Decode error", &e.to_string()),
        }
    }
}

fn derive_vector<T: FeatureElement>(engine: &Engine, vector: &FeatureVector<T>) -> Derivation {
    if vector.is_empty() {
        CliUI::print_text("No descriptors found in feature file");
    }
    unwrap_or_exit(engine.derive(vector), "failed to derive address")
}

fn print_json<T: Serialize>(value: &T) {
    CliUI::print_text(&unwrap_or_exit(
        serde_json::to_string_pretty(value),
        "failed to serialize output",
    ));
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn unwrap_or_exit<T, E: std::fmt::Display>(res: std::result::Result<T, E>, msg: &str) -> T {
    res.unwrap_or_else(|e| {
        CliUI::print_error(&format!("{}: {}", msg, e));
        std::process::exit(1);
    })
}
