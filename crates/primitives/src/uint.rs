//! Numeric fields of an Ethereum transaction are RLP byte strings holding an
//! unsigned big-endian magnitude without leading zero bytes. Zero is the empty
//! byte string.
//!
//! Decoding is lenient and accepts leading zero bytes; encoding always
//! produces the minimal form.

use alloy_primitives::U256;

use crate::Bytes;

/// A big-endian magnitude that does not fit in 256 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("integer of {length} significant bytes exceeds 256 bits")]
pub struct IntegerOverflow {
    /// Number of significant bytes, excluding leading zeros.
    pub length: usize,
}

/// Returns the minimal big-endian representation of `value`.
pub fn to_minimal_be_bytes(value: U256) -> Bytes {
    value
        .to_be_bytes::<32>()
        .into_iter()
        .skip_while(|byte| *byte == 0)
        .collect::<Vec<u8>>()
        .into()
}

/// Returns the minimal big-endian representation of `value`.
pub fn u64_to_minimal_be_bytes(value: u64) -> Bytes {
    to_minimal_be_bytes(U256::from(value))
}

/// Interprets `bytes` as an unsigned big-endian magnitude.
pub fn from_be_bytes(bytes: &[u8]) -> Result<U256, IntegerOverflow> {
    let significant = strip_leading_zeros(bytes);
    if significant.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::try_from_be_slice(significant).ok_or(IntegerOverflow {
        length: significant.len(),
    })
}

/// Interprets `bytes` as an unsigned big-endian magnitude, returning `None`
/// if it exceeds `u64::MAX`.
pub fn to_u64(bytes: &[u8]) -> Option<u64> {
    from_be_bytes(bytes)
        .ok()
        .and_then(|value| u64::try_from(value).ok())
}

/// Whether `bytes` is the minimal encoding of the integer it represents.
pub fn is_canonical(bytes: &[u8]) -> bool {
    bytes.first() != Some(&0)
}

/// Removes all leading zero bytes.
pub fn strip_leading_zeros(mut bytes: &[u8]) -> &[u8] {
    while let [0, rest @ ..] = bytes {
        bytes = rest;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_is_empty() {
        assert!(to_minimal_be_bytes(U256::ZERO).is_empty());
        assert_eq!(from_be_bytes(&[]), Ok(U256::ZERO));
    }

    #[test]
    fn canonical_integer_law() {
        for n in [0u64, 1, 255, 256, 65536] {
            let encoded = u64_to_minimal_be_bytes(n);

            assert!(is_canonical(&encoded), "{n} encoded as {encoded}");
            assert_eq!(from_be_bytes(&encoded), Ok(U256::from(n)));
        }

        assert_eq!(&u64_to_minimal_be_bytes(256)[..], &[0x01, 0x00]);
        assert_eq!(&u64_to_minimal_be_bytes(65536)[..], &[0x01, 0x00, 0x00]);
    }

    #[test]
    fn leading_zeros_are_accepted_on_decode() {
        assert_eq!(from_be_bytes(&[0x00, 0x00, 0x01]), Ok(U256::from(1)));
        assert!(!is_canonical(&[0x00, 0x01]));
        assert_eq!(
            &to_minimal_be_bytes(from_be_bytes(&[0x00, 0x2a]).unwrap())[..],
            &[0x2a]
        );
    }

    #[test]
    fn oversize_magnitude_overflows() {
        let mut bytes = vec![0u8; 3];
        bytes.extend_from_slice(&[0xff; 33]);

        assert_eq!(from_be_bytes(&bytes), Err(IntegerOverflow { length: 33 }));
        assert_eq!(to_u64(&bytes), None);
    }

    #[test]
    fn u64_bounds() {
        assert_eq!(to_u64(&[0xff; 8]), Some(u64::MAX));
        assert_eq!(to_u64(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]), None);
    }

    proptest! {
        #[test]
        fn round_trips_any_u256(limbs in any::<[u64; 4]>()) {
            let value = U256::from_limbs(limbs);
            let encoded = to_minimal_be_bytes(value);

            prop_assert!(is_canonical(&encoded));
            prop_assert_eq!(from_be_bytes(&encoded), Ok(value));
        }

        #[test]
        fn canonical_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
            let canonical = strip_leading_zeros(&bytes);
            let decoded = from_be_bytes(canonical).unwrap();

            prop_assert_eq!(&to_minimal_be_bytes(decoded)[..], canonical);
        }
    }
}
