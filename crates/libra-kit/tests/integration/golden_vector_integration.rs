//! Wallet derivation against vectors produced by the historical Libra wallet.

use libra_kit::wallet::{ChildNumber, KeyFactory, Mnemonic, Seed};

use crate::init_tracing;

/// Built from arbitrary dictionary words, so the checksum is not meaningful.
const PHRASE: &str = "hurry seven priority awful wear jeans antique add fetch sure negative \
                      finish suit draft myself chimney spend marine clock furnace draft public \
                      erase evidence";
const SALT: &str = "LIBRA";

fn factory() -> KeyFactory {
    let mnemonic = Mnemonic::parse_unchecked(PHRASE).unwrap();
    KeyFactory::new(&Seed::new(&mnemonic, SALT))
}

#[test]
fn test_seed() {
    init_tracing();
    let mnemonic = Mnemonic::parse_unchecked(PHRASE).unwrap();
    assert_eq!(mnemonic.word_count(), 24);
    assert_eq!(
        hex::encode(Seed::new(&mnemonic, SALT).as_bytes()),
        "9e9ff712b382f9e35d8d0125832d12e910fcc82570a908e2dcdc7bb13c021395"
    );
}

#[test]
fn test_master_prk() {
    init_tracing();
    assert_eq!(
        hex::encode(factory().master().chain_code()),
        "fdebeb867536081e8f1040e5ffd9036a9afd1aa65ea5be9d30270cac8ba606a3"
    );
}

#[test]
fn test_first_account() {
    init_tracing();
    let child = factory().private_child(ChildNumber::new(0));
    assert_eq!(
        hex::encode(child.secret_key().as_bytes()),
        "982dbfaed0378c522c4831f0f96056c478bd259f1c8a5be3981a2be764e9dc1d"
    );
    assert_eq!(
        child.public_key().to_string(),
        "4f09165288ff72f79288db4770ea31f13619805ac185b71bd961f0261b314655"
    );
    assert_eq!(
        child.address().to_string(),
        "0703a61585597d9b56a46a658464738dff58222b4393d32dd9899bedb58666e9"
    );
}

#[test]
fn test_second_account() {
    init_tracing();
    let child = factory().private_child(ChildNumber::try_from(1i64).unwrap());
    assert_eq!(
        hex::encode(child.chain_code()),
        "526b88b698ca45fb6e4677844369a53afe93713f8a3f177458386001616074cb"
    );
    assert_eq!(
        child.public_key().to_string(),
        "5c55e0f7ec22e218fe3a62ca7ca4369e48ec237b2557603b465066b5f300896e"
    );
}

#[test]
fn test_phrase_normalization_does_not_change_keys() {
    init_tracing();
    let shouted = Mnemonic::parse_unchecked(&format!("  {}\n", PHRASE.to_uppercase())).unwrap();
    let factory = KeyFactory::new(&Seed::new(&shouted, SALT));
    assert_eq!(
        factory.private_child(0u64).public_key().to_string(),
        "4f09165288ff72f79288db4770ea31f13619805ac185b71bd961f0261b314655"
    );
}

#[test]
fn test_entropy_phrase_roundtrip_derives_same_keys() {
    init_tracing();
    let original = Mnemonic::generate(18).unwrap();
    let restored: Mnemonic = original.to_string().parse().unwrap();
    assert_eq!(restored.entropy(), original.entropy());

    let a = KeyFactory::new(&Seed::new(&original, SALT)).private_child(3u64);
    let b = KeyFactory::new(&Seed::new(&restored, SALT)).private_child(3u64);
    assert_eq!(a.address(), b.address());
}
