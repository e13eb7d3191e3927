use alloy_rlp::{BufMut, Encodable, Header};
use ethtx_primitives::Bytes;

use crate::{MAX_DEPTH, RlpError};

/// A decoded RLP value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RlpItem {
    /// An opaque byte string
    String(Bytes),
    /// An ordered list of items
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Decodes a single item that must span all of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self, RlpError> {
        let mut buf = bytes;
        let item = Self::decode_next(&mut buf)?;

        if buf.is_empty() {
            Ok(item)
        } else {
            Err(RlpError::TrailingBytes {
                remaining: buf.len(),
            })
        }
    }

    /// Decodes the item at the start of `buf` and advances `buf` past it.
    /// Bytes after the item are left untouched.
    pub fn decode_next(buf: &mut &[u8]) -> Result<Self, RlpError> {
        decode_with_depth(buf, 0)
    }

    /// Constructs a byte string item.
    pub fn string(bytes: impl Into<Bytes>) -> Self {
        Self::String(bytes.into())
    }

    /// Whether the item is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the bytes, if the item is a byte string.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::String(bytes) => Some(bytes),
            Self::List(_) => None,
        }
    }

    /// Returns the elements, if the item is a list.
    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            Self::String(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Converts the item into its bytes, if it is a byte string.
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            Self::String(bytes) => Some(bytes),
            Self::List(_) => None,
        }
    }

    /// Converts the item into its elements, if it is a list.
    pub fn into_list(self) -> Option<Vec<RlpItem>> {
        match self {
            Self::String(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Returns the canonical encoding of the item.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.length());
        self.encode(&mut out);
        out
    }

    fn payload_length(items: &[RlpItem]) -> usize {
        items.iter().map(Encodable::length).sum()
    }
}

fn decode_with_depth(buf: &mut &[u8], depth: usize) -> Result<RlpItem, RlpError> {
    let header = Header::decode(buf)?;

    // `Header::decode` leaves a single byte below 0x80 in place as its own
    // payload, so the payload always starts at the current position.
    let (payload, rest) = buf
        .split_at_checked(header.payload_length)
        .ok_or(alloy_rlp::Error::InputTooShort)?;
    *buf = rest;

    if !header.list {
        return Ok(RlpItem::String(Bytes::copy_from_slice(payload)));
    }

    if depth >= MAX_DEPTH {
        return Err(RlpError::NestingTooDeep { max: MAX_DEPTH });
    }

    let mut payload = payload;
    let mut items = Vec::new();
    while !payload.is_empty() {
        items.push(decode_with_depth(&mut payload, depth + 1)?);
    }

    Ok(RlpItem::List(items))
}

impl Encodable for RlpItem {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::String(bytes) => {
                let bytes: &[u8] = bytes;
                bytes.encode(out);
            }
            Self::List(items) => {
                Header {
                    list: true,
                    payload_length: Self::payload_length(items),
                }
                .encode(out);

                for item in items {
                    item.encode(out);
                }
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::String(bytes) => {
                let bytes: &[u8] = bytes;
                bytes.length()
            }
            Self::List(items) => {
                let payload_length = Self::payload_length(items);
                alloy_rlp::length_of_length(payload_length) + payload_length
            }
        }
    }
}

impl From<Bytes> for RlpItem {
    fn from(bytes: Bytes) -> Self {
        Self::String(bytes)
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<RlpItem>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(bytes: &[u8]) -> RlpItem {
        RlpItem::string(bytes.to_vec())
    }

    #[test]
    fn decode_single_byte() {
        assert_eq!(RlpItem::decode(&[0x0f]).unwrap(), string(&[0x0f]));
        assert_eq!(RlpItem::decode(&[0x80]).unwrap(), string(&[]));
        assert_eq!(RlpItem::decode(&[0x81, 0x80]).unwrap(), string(&[0x80]));
    }

    #[test]
    fn decode_short_string() {
        let decoded = RlpItem::decode(&hex::decode("83646f67").unwrap()).unwrap();
        assert_eq!(decoded, string(b"dog"));
    }

    #[test]
    fn decode_long_string() {
        let text = b"Lorem ipsum dolor sit amet, consectetur adipisicing elit";
        let mut encoded = vec![0xb8, 0x38];
        encoded.extend_from_slice(text);

        assert_eq!(RlpItem::decode(&encoded).unwrap(), string(text));
        assert_eq!(string(text).to_bytes(), encoded);
    }

    #[test]
    fn decode_nested_lists() {
        // The set theoretical representation of three
        let encoded = hex::decode("c7c0c1c0c3c0c1c0").unwrap();
        let empty = || RlpItem::List(Vec::new());
        let expected = RlpItem::List(vec![
            empty(),
            RlpItem::List(vec![empty()]),
            RlpItem::List(vec![empty(), RlpItem::List(vec![empty()])]),
        ]);

        let decoded = RlpItem::decode(&encoded).unwrap();
        assert_eq!(decoded, expected);
        assert_eq!(decoded.to_bytes(), encoded);
    }

    #[test]
    fn decode_rejects_non_canonical_single_byte() {
        assert_eq!(
            RlpItem::decode(&[0x81, 0x05]),
            Err(RlpError::Header(alloy_rlp::Error::NonCanonicalSingleByte))
        );
    }

    #[test]
    fn decode_rejects_long_form_for_short_payload() {
        let mut encoded = vec![0xb8, 0x05];
        encoded.extend_from_slice(b"hello");

        assert_eq!(
            RlpItem::decode(&encoded),
            Err(RlpError::Header(alloy_rlp::Error::NonCanonicalSize))
        );
    }

    #[test]
    fn decode_rejects_leading_zero_in_length() {
        let mut encoded = vec![0xb9, 0x00, 0x38];
        encoded.extend_from_slice(&[0xaa; 56]);

        assert_eq!(
            RlpItem::decode(&encoded),
            Err(RlpError::Header(alloy_rlp::Error::LeadingZero))
        );
    }

    #[test]
    fn decode_rejects_truncated_input() {
        assert_eq!(
            RlpItem::decode(&[0x83, 0x64, 0x6f]),
            Err(RlpError::Header(alloy_rlp::Error::InputTooShort))
        );
        assert_eq!(
            RlpItem::decode(&[]),
            Err(RlpError::Header(alloy_rlp::Error::InputTooShort))
        );
        // The list claims three bytes but its only element claims four.
        assert!(RlpItem::decode(&[0xc3, 0x83, 0x01, 0x02]).is_err());
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        assert_eq!(
            RlpItem::decode(&[0x80, 0x80]),
            Err(RlpError::TrailingBytes { remaining: 1 })
        );
    }

    #[test]
    fn decode_next_leaves_rest() {
        let encoded = [0x02, 0xc1, 0x01];
        let mut buf = &encoded[..];

        assert_eq!(RlpItem::decode_next(&mut buf).unwrap(), string(&[0x02]));
        assert_eq!(buf, &[0xc1, 0x01]);
    }

    #[test]
    fn decode_rejects_deep_nesting() {
        let mut item = RlpItem::List(Vec::new());
        for _ in 0..MAX_DEPTH {
            item = RlpItem::List(vec![item]);
        }

        assert_eq!(
            RlpItem::decode(&item.to_bytes()),
            Err(RlpError::NestingTooDeep { max: MAX_DEPTH })
        );
    }

    #[test]
    fn length_matches_encoding() {
        let item = RlpItem::List(vec![
            string(&[0x7f]),
            string(&[0x80]),
            string(&[0xab; 60]),
            RlpItem::List(vec![string(&[0xcd; 1024])]),
        ]);

        assert_eq!(item.length(), item.to_bytes().len());
    }
}
