//! Decoding account state blobs as a node returns them.

use libra_kit::codec::CanonicalWriter;
use libra_kit::{AccountResource, CodecError, EventHandle, Error, TransactionBuilder};

use crate::init_tracing;

/// Encode an account resource the way the node lays it out.
fn encode(resource: &AccountResource) -> Vec<u8> {
    let mut writer = CanonicalWriter::new();
    writer
        .write_bytes(&resource.authentication_key)
        .write_u64(resource.balance)
        .write_bool(resource.delegated_key_rotation_capability)
        .write_bool(resource.delegated_withdrawal_capability);
    for handle in [&resource.received_events, &resource.sent_events] {
        writer.write_u32(handle.count).write_u32(0).write_bytes(&handle.key);
    }
    writer.write_u32(resource.sequence_number);
    writer.into_bytes()
}

#[test]
fn test_short_key_account() {
    init_tracing();
    #[rustfmt::skip]
    let bytes: Vec<u8> = vec![
        0x04, 0x00, 0x00, 0x00,                         // key length
        0x01, 0x02, 0x03, 0x04,                         // key
        0x40, 0x42, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, // balance 1_000_000
        0x00,                                           // key rotation delegated
        0x00,                                           // withdrawal delegated
        0x00, 0x00, 0x00, 0x00,                         // received count
        0x00, 0x00, 0x00, 0x00,                         // reserved
        0x00, 0x00, 0x00, 0x00,                         // received key length
        0x00, 0x00, 0x00, 0x00,                         // sent count
        0x00, 0x00, 0x00, 0x00,                         // reserved
        0x00, 0x00, 0x00, 0x00,                         // sent key length
        0x05, 0x00, 0x00, 0x00,                         // sequence number
    ];

    let account = AccountResource::from_bytes(&bytes).unwrap();
    assert_eq!(
        account,
        AccountResource {
            authentication_key: vec![0x01, 0x02, 0x03, 0x04],
            balance: 1_000_000,
            delegated_key_rotation_capability: false,
            delegated_withdrawal_capability: false,
            received_events: EventHandle::new(0, vec![]),
            sent_events: EventHandle::new(0, vec![]),
            sequence_number: 5,
        }
    );
}

#[test]
fn test_full_account_roundtrip() {
    init_tracing();
    let account = AccountResource {
        authentication_key: (0u8..32).collect(),
        balance: u64::MAX,
        delegated_key_rotation_capability: true,
        delegated_withdrawal_capability: true,
        received_events: EventHandle::new(u32::MAX, vec![0xee; 40]),
        sent_events: EventHandle::new(1, vec![0x11; 40]),
        sequence_number: 9,
    };
    assert_eq!(AccountResource::from_bytes(&encode(&account)).unwrap(), account);
}

#[test]
fn test_truncated_blob_is_an_error() {
    init_tracing();
    let account = AccountResource {
        authentication_key: vec![7; 32],
        balance: 1,
        delegated_key_rotation_capability: false,
        delegated_withdrawal_capability: false,
        received_events: EventHandle::new(0, vec![1; 32]),
        sent_events: EventHandle::new(0, vec![2; 32]),
        sequence_number: 0,
    };
    let bytes = encode(&account);
    let err = AccountResource::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
    assert_eq!(
        err,
        CodecError::TruncatedInput {
            needed: 4,
            remaining: 3
        }
    );

    // Surfaces through the crate error with its kind intact
    let err: Error = err.into();
    assert!(matches!(err, Error::Codec(CodecError::TruncatedInput { .. })));
}

#[test]
fn test_decoded_sequence_number_feeds_builder() {
    init_tracing();
    let account = AccountResource {
        authentication_key: vec![0; 32],
        balance: 500,
        delegated_key_rotation_capability: false,
        delegated_withdrawal_capability: false,
        received_events: EventHandle::new(2, vec![]),
        sent_events: EventHandle::new(17, vec![]),
        sequence_number: 17,
    };
    let decoded = AccountResource::from_bytes(&encode(&account)).unwrap();

    let txn = TransactionBuilder::new()
        .sender(libra_kit::AccountAddress::ZERO)
        .sequence_number_from(&decoded)
        .program(libra_kit::Program::new(vec![0u8]))
        .expiration_time(1)
        .build()
        .unwrap();
    assert_eq!(txn.sequence_number, 17);
}
