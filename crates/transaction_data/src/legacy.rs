use core::fmt;

use ethtx_primitives::{
    Bytes, U256,
    uint::{self, IntegerOverflow},
};
use ethtx_rlp::{RlpItem, encode_list};

use crate::{
    DecodeError,
    utils::{expect_list, expect_string},
};

/// Values of `v` above this carry an EIP-155 chain ID.
const MAX_PRE_EIP155_V: u64 = 34;
/// Offset of the chain ID in an EIP-155 `v`: `v = chain_id * 2 + 35 + parity`.
const EIP155_V_OFFSET: u64 = 35;

/// Legacy (untyped) Ethereum transaction data, with or without EIP-155 replay
/// protection.
///
/// Numeric fields hold the big-endian bytes exactly as they were encoded.
/// `chain_id` and `recovery_id` are derived from `v`, which is the only
/// signature parameter that is encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Legacy {
    // The order of these fields determines encoding order.
    nonce: Bytes,
    gas_price: Bytes,
    gas_limit: Bytes,
    to: Bytes,
    value: Bytes,
    call_data: Bytes,
    v: Bytes,
    r: Bytes,
    s: Bytes,
    chain_id: Bytes,
    recovery_id: u8,
}

/// Arguments for constructing a new [`Legacy`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyArgs {
    /// Sender nonce
    pub nonce: Bytes,
    /// Gas price
    pub gas_price: Bytes,
    /// Gas limit
    pub gas_limit: Bytes,
    /// Recipient; empty for contract creation
    pub to: Bytes,
    /// Transferred value
    pub value: Bytes,
    /// Call data
    pub call_data: Bytes,
    /// Signature `v`
    pub v: Bytes,
    /// Signature `r`
    pub r: Bytes,
    /// Signature `s`
    pub s: Bytes,
}

impl Legacy {
    /// Number of elements in the RLP list of a legacy transaction.
    pub const ELEMENT_COUNT: usize = 9;

    /// The type identifier for a legacy transaction. It is never encoded.
    pub const TYPE: u8 = 0x00;

    /// Constructs a new instance, deriving the chain ID and recovery ID from
    /// `v`.
    pub fn new(args: LegacyArgs) -> Result<Self, IntegerOverflow> {
        let LegacyArgs {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            call_data,
            v,
            r,
            s,
        } = args;

        let (chain_id, recovery_id) = signature_params_from_v(&v)?;

        Ok(Self {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            call_data,
            v,
            r,
            s,
            chain_id,
            recovery_id,
        })
    }

    /// Decodes a legacy transaction from its RLP list encoding.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::from_rlp(RlpItem::decode(bytes)?)
    }

    pub(crate) fn from_rlp(item: RlpItem) -> Result<Self, DecodeError> {
        let [nonce, gas_price, gas_limit, to, value, call_data, v, r, s] =
            expect_list(item, "legacy transaction")?;

        let args = LegacyArgs {
            nonce: expect_string(nonce, "nonce")?,
            gas_price: expect_string(gas_price, "gas price")?,
            gas_limit: expect_string(gas_limit, "gas limit")?,
            to: expect_string(to, "to")?,
            value: expect_string(value, "value")?,
            call_data: expect_string(call_data, "call data")?,
            v: expect_string(v, "v")?,
            r: expect_string(r, "r")?,
            s: expect_string(s, "s")?,
        };

        Ok(Self::new(args)?)
    }

    /// Returns the RLP encoding of the transaction.
    pub fn to_bytes(&self) -> Vec<u8> {
        let fields = [
            &self.nonce,
            &self.gas_price,
            &self.gas_limit,
            &self.to,
            &self.value,
            &self.call_data,
            &self.v,
            &self.r,
            &self.s,
        ]
        .map(|field| RlpItem::String(field.clone()));

        encode_list(&fields)
    }

    /// Returns a copy with the call data replaced.
    pub fn with_call_data(mut self, call_data: Bytes) -> Self {
        self.call_data = call_data;
        self
    }

    /// Replaces the call data.
    pub fn set_call_data(&mut self, call_data: Bytes) {
        self.call_data = call_data;
    }

    /// The sender's nonce.
    pub fn nonce(&self) -> &Bytes {
        &self.nonce
    }

    /// The gas price.
    pub fn gas_price(&self) -> &Bytes {
        &self.gas_price
    }

    /// The gas limit.
    pub fn gas_limit(&self) -> &Bytes {
        &self.gas_limit
    }

    /// The recipient. Empty for contract creation.
    pub fn to(&self) -> &Bytes {
        &self.to
    }

    /// The transferred value.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// The call data.
    pub fn call_data(&self) -> &Bytes {
        &self.call_data
    }

    /// The `v` value of the signature.
    pub fn v(&self) -> &Bytes {
        &self.v
    }

    /// The `r` value of the signature.
    pub fn r(&self) -> &Bytes {
        &self.r
    }

    /// The `s` value of the signature.
    pub fn s(&self) -> &Bytes {
        &self.s
    }

    /// The chain ID derived from `v`. Empty for pre-EIP-155 transactions.
    pub fn chain_id(&self) -> &Bytes {
        &self.chain_id
    }

    /// The chain ID, if any and if it fits in a `u64`.
    pub fn chain_id_u64(&self) -> Option<u64> {
        if self.chain_id.is_empty() {
            None
        } else {
            uint::to_u64(&self.chain_id)
        }
    }

    /// The recovery ID derived from `v`: 0 when `v` is odd, otherwise 1.
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// Whether `v` encodes a chain ID.
    pub fn is_eip155(&self) -> bool {
        !self.chain_id.is_empty()
    }
}

/// Derives the chain ID and recovery ID from a legacy `v` value.
fn signature_params_from_v(v: &[u8]) -> Result<(Bytes, u8), IntegerOverflow> {
    let v = uint::from_be_bytes(v)?;

    let recovery_id = u8::from(!v.bit(0));
    let chain_id = if v > U256::from(MAX_PRE_EIP155_V) {
        uint::to_minimal_be_bytes((v - U256::from(EIP155_V_OFFSET)) >> 1)
    } else {
        Bytes::new()
    };

    Ok((chain_id, recovery_id))
}

impl fmt::Display for Legacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Legacy {{ nonce: {}, gas_price: {}, gas_limit: {}, to: {}, value: {}, call_data: {}, v: {}, r: {}, s: {}, chain_id: {}, recovery_id: {} }}",
            self.nonce,
            self.gas_price,
            self.gas_limit,
            self.to,
            self.value,
            self.call_data,
            self.v,
            self.r,
            self.s,
            self.chain_id,
            self.recovery_id,
        )
    }
}
