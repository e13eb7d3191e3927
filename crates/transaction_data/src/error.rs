use ethtx_primitives::uint::IntegerOverflow;
use ethtx_rlp::RlpError;

/// Reasons for which bytes are not a valid encoding of transaction data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEncoding {
    /// The input is empty.
    #[error("empty input")]
    Empty,
    /// The bytes are not valid RLP.
    #[error(transparent)]
    Rlp(#[from] RlpError),
    /// A numeric field does not fit in 256 bits.
    #[error(transparent)]
    IntegerOverflow(#[from] IntegerOverflow),
    /// A field that must be a byte string is a list.
    #[error("expected {field} to be a byte string, found a list")]
    UnexpectedList {
        /// Name of the field
        field: &'static str,
    },
    /// A field that must be a list is a byte string.
    #[error("expected {field} to be a list, found a byte string")]
    UnexpectedString {
        /// Name of the field
        field: &'static str,
    },
    /// A fixed-width field has the wrong number of bytes.
    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidFieldLength {
        /// Name of the field
        field: &'static str,
        /// Required number of bytes
        expected: usize,
        /// Actual number of bytes
        actual: usize,
    },
}

/// An error that occurs when decoding transaction data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not a valid encoding.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] MalformedEncoding),
    /// A list has the wrong number of elements for the format being decoded.
    #[error("unexpected element count: expected {expected}, got {actual}")]
    UnexpectedElementCount {
        /// Number of elements required by the format
        expected: usize,
        /// Number of elements in the decoded list
        actual: usize,
    },
    /// The leading type byte does not identify a supported transaction type.
    #[error("unsupported transaction type: {0:#04x}")]
    UnsupportedFormat(u8),
}

impl From<RlpError> for DecodeError {
    fn from(error: RlpError) -> Self {
        Self::MalformedEncoding(error.into())
    }
}

impl From<IntegerOverflow> for DecodeError {
    fn from(error: IntegerOverflow) -> Self {
        Self::MalformedEncoding(error.into())
    }
}
