//! Ethereum transaction data
//!
//! Converts between the raw bytes produced by an Ethereum transaction signer
//! and a structured representation. Two formats are supported: the legacy
//! bare RLP list (with or without EIP-155 replay protection) and the EIP-1559
//! fee market transaction prefixed by its type byte.
//!
//! Encoding is lossless: decoding canonical bytes and encoding the result
//! reproduces the input exactly, which keeps third-party signatures valid.

mod access_list;
mod eip1559;
mod error;
mod legacy;
mod r#type;
/// Helpers shared by the transaction codecs
pub mod utils;

use core::fmt;

use ethtx_primitives::{B256, Bytes, keccak256};
use ethtx_rlp::{RlpItem, RlpSequence};

pub use self::{
    access_list::AccessListItem,
    eip1559::{Eip1559, Eip1559Args},
    error::{DecodeError, MalformedEncoding},
    legacy::{Legacy, LegacyArgs},
    r#type::TransactionType,
};

/// Ethereum transaction data of one of the supported formats.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "type", rename_all = "camelCase")
)]
pub enum TransactionData {
    /// Legacy transaction
    Legacy(Legacy),
    /// EIP-1559 transaction
    Eip1559(Eip1559),
}

impl TransactionData {
    /// Decodes transaction data from the raw bytes produced by a signer.
    ///
    /// The outermost RLP item decides the format: a list is a legacy
    /// transaction, anything else must be a typed transaction starting with
    /// its type byte. The selected format validates the whole input.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let result = Self::sniff_and_decode(bytes);
        if let Err(error) = &result {
            log::debug!("Rejected Ethereum transaction data: {error}");
        }

        result
    }

    fn sniff_and_decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut sequence = RlpSequence::new(bytes);
        let first = sequence.next().ok_or(MalformedEncoding::Empty)??;

        match first {
            RlpItem::List(_) => {
                let remaining = sequence.remaining().len();
                if remaining > 0 {
                    return Err(ethtx_rlp::RlpError::TrailingBytes { remaining }.into());
                }

                log::trace!("Decoding legacy transaction data");
                Legacy::from_rlp(first).map(Self::Legacy)
            }
            RlpItem::String(_) => {
                log::trace!("Decoding typed transaction data");
                Eip1559::from_bytes(bytes).map(Self::Eip1559)
            }
        }
    }

    /// Returns the canonical encoding of the transaction data.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            TransactionData::Legacy(transaction) => transaction.to_bytes(),
            TransactionData::Eip1559(transaction) => transaction.to_bytes(),
        }
    }

    /// The type of the transaction.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            TransactionData::Legacy(_) => TransactionType::Legacy,
            TransactionData::Eip1559(_) => TransactionType::Eip1559,
        }
    }

    /// The Ethereum transaction hash, i.e. the keccak-256 hash of
    /// [`Self::to_bytes`].
    pub fn transaction_hash(&self) -> B256 {
        keccak256(self.to_bytes())
    }

    /// The call data.
    pub fn call_data(&self) -> &Bytes {
        match self {
            TransactionData::Legacy(transaction) => transaction.call_data(),
            TransactionData::Eip1559(transaction) => transaction.call_data(),
        }
    }

    /// Replaces the call data.
    pub fn set_call_data(&mut self, call_data: Bytes) {
        match self {
            TransactionData::Legacy(transaction) => transaction.set_call_data(call_data),
            TransactionData::Eip1559(transaction) => transaction.set_call_data(call_data),
        }
    }

    /// Returns a copy with the call data replaced.
    pub fn with_call_data(mut self, call_data: Bytes) -> Self {
        self.set_call_data(call_data);
        self
    }

    /// Returns the legacy transaction, if this is one.
    pub fn as_legacy(&self) -> Option<&Legacy> {
        match self {
            TransactionData::Legacy(transaction) => Some(transaction),
            TransactionData::Eip1559(_) => None,
        }
    }

    /// Returns the EIP-1559 transaction, if this is one.
    pub fn as_eip1559(&self) -> Option<&Eip1559> {
        match self {
            TransactionData::Legacy(_) => None,
            TransactionData::Eip1559(transaction) => Some(transaction),
        }
    }
}

impl From<Legacy> for TransactionData {
    fn from(transaction: Legacy) -> Self {
        Self::Legacy(transaction)
    }
}

impl From<Eip1559> for TransactionData {
    fn from(transaction: Eip1559) -> Self {
        Self::Eip1559(transaction)
    }
}

impl TryFrom<&[u8]> for TransactionData {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for TransactionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionData::Legacy(transaction) => fmt::Display::fmt(transaction, f),
            TransactionData::Eip1559(transaction) => fmt::Display::fmt(transaction, f),
        }
    }
}
