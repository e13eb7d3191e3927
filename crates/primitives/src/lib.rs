//! Primitive types shared by the Ethereum transaction data crates.
//!
//! The fixed-width types are those of `alloy-primitives`, so values can be
//! handed to other Ethereum tooling without conversion.

/// Canonical big-endian encoding of unsigned integers
pub mod uint;

pub use alloy_primitives::{Address, B256, Bytes, U256, address, b256, bytes, hex, keccak256};
