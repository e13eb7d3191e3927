use alloy_rlp::{Encodable, Header};

use crate::RlpItem;

/// Returns the canonical encoding of a single byte string.
pub fn encode_string(bytes: &[u8]) -> Vec<u8> {
    alloy_rlp::encode(bytes)
}

/// Returns the canonical encoding of a list of items.
pub fn encode_list(items: &[RlpItem]) -> Vec<u8> {
    let payload_length = items.iter().map(Encodable::length).sum();

    let mut out = Vec::with_capacity(alloy_rlp::length_of_length(payload_length) + payload_length);
    Header {
        list: true,
        payload_length,
    }
    .encode(&mut out);

    for item in items {
        item.encode(&mut out);
    }

    out
}

/// Wraps already encoded items in a list header.
///
/// The elements are copied verbatim, so the caller is responsible for each of
/// them being a valid RLP encoding.
pub fn encode_raw_list<T: AsRef<[u8]>>(encoded_items: &[T]) -> Vec<u8> {
    let payload_length = encoded_items.iter().map(|item| item.as_ref().len()).sum();

    let mut out = Vec::with_capacity(alloy_rlp::length_of_length(payload_length) + payload_length);
    Header {
        list: true,
        payload_length,
    }
    .encode(&mut out);

    for item in encoded_items {
        out.extend_from_slice(item.as_ref());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_string_short_forms() {
        assert_eq!(encode_string(&[]), vec![0x80]);
        assert_eq!(encode_string(&[0x00]), vec![0x00]);
        assert_eq!(encode_string(&[0x7f]), vec![0x7f]);
        assert_eq!(encode_string(&[0x80]), vec![0x81, 0x80]);
        assert_eq!(encode_string(b"dog"), hex::decode("83646f67").unwrap());
    }

    #[test]
    fn encode_string_length_of_length() {
        let encoded = encode_string(&[0x11; 55]);
        assert_eq!(encoded.first(), Some(&0xb7));

        let encoded = encode_string(&[0x11; 56]);
        assert_eq!(encoded.get(..2), Some(&[0xb8, 0x38][..]));

        let encoded = encode_string(&[0x11; 1024]);
        assert_eq!(encoded.get(..3), Some(&[0xb9, 0x04, 0x00][..]));
        assert_eq!(encoded.len(), 1027);
    }

    #[test]
    fn encode_list_of_strings() {
        let items = [RlpItem::string(&b"cat"[..]), RlpItem::string(&b"dog"[..])];

        assert_eq!(
            encode_list(&items),
            hex::decode("c88363617483646f67").unwrap()
        );
        assert_eq!(encode_list(&[]), vec![0xc0]);
    }

    #[test]
    fn encode_long_list() {
        let items = vec![RlpItem::string(vec![0x22; 60])];
        let encoded = encode_list(&items);

        assert_eq!(encoded.get(..2), Some(&[0xf8, 0x3e][..]));
        assert_eq!(RlpItem::decode(&encoded).unwrap(), RlpItem::List(items));
    }

    #[test]
    fn encode_raw_list_matches_encode_list() {
        let items = [
            RlpItem::string(vec![0x01]),
            RlpItem::List(vec![RlpItem::string(vec![0x02, 0x03])]),
        ];
        let pre_encoded: Vec<Vec<u8>> = items.iter().map(RlpItem::to_bytes).collect();

        assert_eq!(encode_raw_list(&pre_encoded), encode_list(&items));
    }
}
