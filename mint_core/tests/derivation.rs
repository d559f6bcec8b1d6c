use std::{sync::Arc, thread};

use mint_core::{
    checksum, codec, validator, Engine, FeatureVector, FingerprintHasher, MintConfig, MintError,
};

fn one_descriptor() -> FeatureVector {
    FeatureVector::new((1..=128).collect::<Vec<u8>>())
}

#[test]
fn single_descriptor_derives_pinned_address() {
    let derivation = Engine::default().derive(&one_descriptor()).unwrap();

    assert_eq!(derivation.descriptors, 1);
    assert_eq!(derivation.probe_counter, 0);
    assert_eq!(derivation.fingerprint.as_str(), "bafa52e3c9b5c87242b");
    assert_eq!(
        derivation.template.as_str(),
        "1BtcMintbafa52e3c9b5c87242bXXXXXXX"
    );
    assert_eq!(
        derivation.payload_hex,
        "007773fc942546b8c370ffe357907574a70a19c929"
    );
    assert_eq!(derivation.checksum_hex, "1261a061");
    assert_eq!(
        derivation.address.as_str(),
        "1BtcMintbafa52e3c9b5c87242bXSTR6Yg"
    );
    assert!(derivation.address.as_str().len() >= 25);
    assert!(derivation.valid);

    let decoded = codec::decode(derivation.address.as_str()).unwrap();
    assert_eq!(
        hex::encode(decoded),
        "007773fc942546b8c370ffe357907574a70a19c9291261a061"
    );
}

#[test]
fn float_descriptors_use_their_raw_bytes() {
    let vector = FeatureVector::new((1..=128).map(|i| i as f32).collect::<Vec<f32>>());
    let derivation = Engine::default().derive(&vector).unwrap();
    assert_eq!(derivation.fingerprint.as_str(), "6fdb67abbe287e86e4a");
    assert!(derivation.valid);
}

#[test]
fn empty_vector_is_rejected_without_looping() {
    let empty = FeatureVector::new(Vec::<u8>::new());
    assert!(matches!(
        Engine::default().derive(&empty),
        Err(MintError::EmptyInput)
    ));
}

#[test]
fn degenerate_vector_exhausts_the_bounded_search() {
    let constant = FeatureVector::new(vec![1u8; 256]);
    let hasher = FingerprintHasher::default();
    match hasher.hash(&constant) {
        Err(MintError::HashSearchExhausted { attempts }) => {
            assert_eq!(attempts, hasher.max_iterations())
        }
        other => panic!("expected HashSearchExhausted, got {other:?}"),
    }
}

#[test]
fn validator_agrees_with_checked_primitives() {
    let payload = hex::decode("007773fc942546b8c370ffe357907574a70a19c929").unwrap();
    let address = checksum::checked_encode(&payload);
    assert_eq!(address, "1BtcMintbafa52e3c9b5c87242bXSTR6Yg");
    assert!(validator::is_valid(&address));

    let mut flipped = address.clone();
    flipped.pop();
    flipped.push('h');
    assert!(!validator::is_valid(&flipped));
}

#[test]
fn derivations_are_independent_across_threads() {
    let engine = Arc::new(Engine::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.derive(&one_descriptor()).unwrap().address)
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap().as_str(),
            "1BtcMintbafa52e3c9b5c87242bXSTR6Yg"
        );
    }
}

#[test]
fn derivation_serializes_to_json() {
    let derivation = Engine::default().derive(&one_descriptor()).unwrap();
    let json = serde_json::to_value(&derivation).unwrap();

    assert_eq!(json["fingerprint"], "bafa52e3c9b5c87242b");
    assert_eq!(json["template"], "1BtcMintbafa52e3c9b5c87242bXXXXXXX");
    assert_eq!(json["address"], "1BtcMintbafa52e3c9b5c87242bXSTR6Yg");
    assert_eq!(json["valid"], true);
}

#[test]
fn config_file_drives_the_engine() {
    let config = MintConfig::from_json_str(r#"{ "filler": "ZZZZZZZ" }"#).unwrap();
    let derivation = Engine::new(config).unwrap().derive(&one_descriptor()).unwrap();
    assert_eq!(
        derivation.address.as_str(),
        "1BtcMintbafa52e3c9b5c87242bZYypw92"
    );
}
