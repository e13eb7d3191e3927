//! Test utilities for Ethereum transaction data.
#![warn(missing_docs)]

/// Raw transaction payloads signed by real wallets
pub mod fixture;

use ethtx_primitives::Bytes;
use ethtx_rlp::{RlpItem, encode_list};

/// Decodes a hex string, with or without `0x` prefix.
///
/// # Panics
///
/// Panics if the string is not valid hex.
pub fn bytes_from_hex(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("fixture must be valid hex")
}

/// Creates an RLP list of `count` distinct single-byte strings.
pub fn dummy_rlp_list(count: usize) -> Vec<u8> {
    let items: Vec<_> = (0..count)
        .map(|index| RlpItem::string(vec![(index % 0x7f) as u8 + 1]))
        .collect();

    encode_list(&items)
}

/// Creates zero-filled call data of the provided length.
pub fn zeroed_call_data(length: usize) -> Bytes {
    Bytes::from(vec![0u8; length])
}
