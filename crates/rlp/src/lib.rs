//! Recursive Length Prefix (RLP) items
//!
//! A generic, schema-less view on RLP: every value is either a byte string or
//! a list of values. Prefix framing is delegated to [`alloy_rlp::Header`],
//! which rejects non-minimal length prefixes, so decoding here is always
//! strict.

mod encode;
mod item;
mod sequence;

pub use self::{
    encode::{encode_list, encode_raw_list, encode_string},
    item::RlpItem,
    sequence::RlpSequence,
};

/// Maximum number of nested lists accepted by the decoder.
pub const MAX_DEPTH: usize = 64;

/// An error that occurs when decoding RLP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// Invalid or non-canonical prefix, or truncated input.
    #[error("{0}")]
    Header(alloy_rlp::Error),
    /// Input remains after a single top-level item.
    #[error("{remaining} trailing byte(s) after RLP item")]
    TrailingBytes {
        /// Number of unconsumed bytes.
        remaining: usize,
    },
    /// Lists are nested deeper than [`MAX_DEPTH`].
    #[error("RLP lists nested deeper than {max} levels")]
    NestingTooDeep {
        /// The maximum depth.
        max: usize,
    },
}

impl From<alloy_rlp::Error> for RlpError {
    fn from(error: alloy_rlp::Error) -> Self {
        Self::Header(error)
    }
}
