use ethtx_primitives::Bytes;
use ethtx_rlp::RlpItem;

use crate::{DecodeError, MalformedEncoding};

/// Prepends the provided (RLP-encoded) bytes with the provided type byte.
pub fn envelop_bytes(id: u8, bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + bytes.len());
    out.push(id);
    out.extend_from_slice(bytes);

    out
}

/// Unwraps a list of exactly `N` elements.
pub(crate) fn expect_list<const N: usize>(
    item: RlpItem,
    field: &'static str,
) -> Result<[RlpItem; N], DecodeError> {
    let elements = item
        .into_list()
        .ok_or(MalformedEncoding::UnexpectedString { field })?;

    <[RlpItem; N]>::try_from(elements).map_err(|elements| DecodeError::UnexpectedElementCount {
        expected: N,
        actual: elements.len(),
    })
}

/// Unwraps a list of any length.
pub(crate) fn expect_any_list(
    item: RlpItem,
    field: &'static str,
) -> Result<Vec<RlpItem>, MalformedEncoding> {
    item.into_list()
        .ok_or(MalformedEncoding::UnexpectedString { field })
}

/// Unwraps a byte string.
pub(crate) fn expect_string(item: RlpItem, field: &'static str) -> Result<Bytes, MalformedEncoding> {
    item.into_bytes()
        .ok_or(MalformedEncoding::UnexpectedList { field })
}

/// Unwraps a byte string of exactly `N` bytes.
pub(crate) fn expect_fixed<const N: usize>(
    item: RlpItem,
    field: &'static str,
) -> Result<[u8; N], MalformedEncoding> {
    let bytes = expect_string(item, field)?;

    <[u8; N]>::try_from(&bytes[..]).map_err(|_error| MalformedEncoding::InvalidFieldLength {
        field,
        expected: N,
        actual: bytes.len(),
    })
}
