//! Mnemonic to signed transaction, entirely offline.

use libra_kit::wallet::{KeyFactory, Mnemonic, Seed};
use libra_kit::{
    AccountAddress, HashValue, InMemorySigner, Program, RawTransaction, SignedTransaction,
    Signer, SignerError, TransactionArgument, TransactionBuilder, TransactionConfig,
    sign_transaction,
};

use crate::init_tracing;

fn account() -> libra_kit::ExtendedKeyPair {
    let mnemonic = Mnemonic::from_entropy(&[0x3c; 32]).unwrap();
    KeyFactory::new(&Seed::new(&mnemonic, "LIBRA")).private_child(0u64)
}

fn transfer(sender: AccountAddress) -> RawTransaction {
    TransactionBuilder::new()
        .config(TransactionConfig {
            max_gas_amount: 10_000,
            gas_unit_price: 0,
            expiration_delta: 60,
        })
        .sender(sender)
        .sequence_number(3)
        .program(Program::peer_to_peer_transfer(
            vec![0x4c, 0x49, 0x42, 0x52],
            AccountAddress::new([0x77; 32]),
            2_500_000,
        ))
        .expiration_time(1_600_000_000)
        .build()
        .unwrap()
}

#[test]
fn test_sign_and_verify() {
    init_tracing();
    let account = account();
    let txn = transfer(account.address());
    let signed = txn.sign(&account).unwrap();

    assert!(signed.verify());
    assert_eq!(signed.public_key(), account.public_key());
    assert_eq!(signed.raw_txn_bytes(), txn.to_bytes().as_slice());
    assert_eq!(signed.hash(), HashValue::raw_transaction(&txn.to_bytes()));
    assert_eq!(signed.raw_transaction().unwrap(), txn);
}

#[test]
fn test_transfer_arguments_in_script_order() {
    init_tracing();
    let txn = transfer(AccountAddress::ZERO);
    assert_eq!(
        txn.program.args,
        vec![
            TransactionArgument::Address(AccountAddress::new([0x77; 32])),
            TransactionArgument::U64(2_500_000),
        ]
    );
    assert_eq!(txn.gas_unit_price, 0);
    assert_eq!(txn.max_gas_amount, 10_000);
}

#[test]
fn test_base64_transport() {
    init_tracing();
    let account = account();
    let signed = transfer(account.address()).sign(&account).unwrap();

    let restored = SignedTransaction::from_base64(&signed.to_base64()).unwrap();
    assert_eq!(restored, signed);
    assert!(restored.verify());
}

#[test]
fn test_signature_covers_exact_bytes() {
    init_tracing();
    let account = account();
    let mut bytes = transfer(account.address()).to_bytes();
    let signed = sign_transaction(&account, bytes.clone()).unwrap();
    assert!(signed.verify());

    // Same signature does not verify over different bytes
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    let hash = HashValue::raw_transaction(&bytes);
    assert!(!signed.signature().verify(hash.as_bytes(), signed.public_key()));
}

#[test]
fn test_derived_and_in_memory_signers_agree() {
    init_tracing();
    let account = account();
    let in_memory = InMemorySigner::new(account.secret_key().clone());
    assert_eq!(in_memory.public_key(), *account.public_key());

    let txn = transfer(account.address());
    assert_eq!(
        txn.sign(&account).unwrap(),
        txn.sign(&in_memory).unwrap()
    );
}

#[test]
fn test_watch_only_signer_reports_unavailable_key() {
    init_tracing();
    let account = account();
    let watch_only = InMemorySigner::watch_only(*account.public_key());
    assert_eq!(
        transfer(account.address()).sign(&watch_only),
        Err(SignerError::SigningKeyUnavailable)
    );
}
