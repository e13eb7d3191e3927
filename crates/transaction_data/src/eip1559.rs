use core::fmt;

use ethtx_primitives::{Bytes, uint};
use ethtx_rlp::{RlpItem, encode_list};

use crate::{
    DecodeError, MalformedEncoding,
    access_list::{AccessListItem, decode_access_list, encode_access_list},
    utils::{envelop_bytes, expect_list, expect_string},
};

/// EIP-1559 (fee market) Ethereum transaction data.
///
/// Numeric fields hold the big-endian bytes exactly as they were encoded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Eip1559 {
    // The order of these fields determines encoding order.
    chain_id: Bytes,
    nonce: Bytes,
    max_priority_fee_per_gas: Bytes,
    max_fee_per_gas: Bytes,
    gas_limit: Bytes,
    to: Bytes,
    value: Bytes,
    call_data: Bytes,
    access_list: Vec<AccessListItem>,
    recovery_id: Bytes,
    r: Bytes,
    s: Bytes,
}

/// Arguments for constructing a new [`Eip1559`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Eip1559Args {
    /// Chain ID
    pub chain_id: Bytes,
    /// Sender nonce
    pub nonce: Bytes,
    /// Maximum priority fee per gas
    pub max_priority_fee_per_gas: Bytes,
    /// Maximum fee per gas
    pub max_fee_per_gas: Bytes,
    /// Gas limit
    pub gas_limit: Bytes,
    /// Recipient; empty for contract creation
    pub to: Bytes,
    /// Transferred value
    pub value: Bytes,
    /// Call data
    pub call_data: Bytes,
    /// Declared accessed addresses and storage keys
    pub access_list: Vec<AccessListItem>,
    /// Signature recovery ID (Y-parity), 0 or 1
    pub recovery_id: Bytes,
    /// Signature `r`
    pub r: Bytes,
    /// Signature `s`
    pub s: Bytes,
}

impl Eip1559 {
    /// The type identifier for an EIP-1559 transaction.
    pub const TYPE: u8 = 0x02;

    /// Number of elements in the RLP list following the type byte.
    pub const ELEMENT_COUNT: usize = 12;

    /// Constructs a new instance.
    pub fn new(args: Eip1559Args) -> Self {
        let Eip1559Args {
            chain_id,
            nonce,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            gas_limit,
            to,
            value,
            call_data,
            access_list,
            recovery_id,
            r,
            s,
        } = args;

        Self {
            chain_id,
            nonce,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            gas_limit,
            to,
            value,
            call_data,
            access_list,
            recovery_id,
            r,
            s,
        }
    }

    /// Decodes an EIP-1559 transaction from its type byte followed by its RLP
    /// list encoding.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (&transaction_type, payload) = bytes.split_first().ok_or(MalformedEncoding::Empty)?;
        if transaction_type != Self::TYPE {
            return Err(DecodeError::UnsupportedFormat(transaction_type));
        }

        let [
            chain_id,
            nonce,
            max_priority_fee_per_gas,
            max_fee_per_gas,
            gas_limit,
            to,
            value,
            call_data,
            access_list,
            recovery_id,
            r,
            s,
        ] = expect_list(RlpItem::decode(payload)?, "EIP-1559 transaction")?;

        Ok(Self::new(Eip1559Args {
            chain_id: expect_string(chain_id, "chain ID")?,
            nonce: expect_string(nonce, "nonce")?,
            max_priority_fee_per_gas: expect_string(
                max_priority_fee_per_gas,
                "max priority fee per gas",
            )?,
            max_fee_per_gas: expect_string(max_fee_per_gas, "max fee per gas")?,
            gas_limit: expect_string(gas_limit, "gas limit")?,
            to: expect_string(to, "to")?,
            value: expect_string(value, "value")?,
            call_data: expect_string(call_data, "call data")?,
            access_list: decode_access_list(access_list)?,
            recovery_id: expect_string(recovery_id, "recovery ID")?,
            r: expect_string(r, "r")?,
            s: expect_string(s, "s")?,
        }))
    }

    /// Returns the type byte followed by the RLP encoding of the transaction.
    pub fn to_bytes(&self) -> Vec<u8> {
        let string = |field: &Bytes| RlpItem::String(field.clone());

        let fields = [
            string(&self.chain_id),
            string(&self.nonce),
            string(&self.max_priority_fee_per_gas),
            string(&self.max_fee_per_gas),
            string(&self.gas_limit),
            string(&self.to),
            string(&self.value),
            string(&self.call_data),
            encode_access_list(&self.access_list),
            string(&self.recovery_id),
            string(&self.r),
            string(&self.s),
        ];

        envelop_bytes(Self::TYPE, &encode_list(&fields))
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

    /// The chain ID.
    pub fn chain_id(&self) -> &Bytes {
        &self.chain_id
    }

    /// The chain ID, if it fits in a `u64`.
    pub fn chain_id_u64(&self) -> Option<u64> {
        uint::to_u64(&self.chain_id)
    }

    /// The sender's nonce.
    pub fn nonce(&self) -> &Bytes {
        &self.nonce
    }

    /// The maximum priority fee per gas.
    pub fn max_priority_fee_per_gas(&self) -> &Bytes {
        &self.max_priority_fee_per_gas
    }

    /// The maximum fee per gas.
    pub fn max_fee_per_gas(&self) -> &Bytes {
        &self.max_fee_per_gas
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

    /// The access list.
    pub fn access_list(&self) -> &[AccessListItem] {
        &self.access_list
    }

    /// The recovery ID as encoded.
    pub fn recovery_id(&self) -> &Bytes {
        &self.recovery_id
    }

    /// Whether the signature has odd Y-parity, or `None` if the recovery ID
    /// is neither 0 nor 1.
    pub fn y_parity(&self) -> Option<bool> {
        match uint::to_u64(&self.recovery_id) {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        }
    }

    /// The `r` value of the signature.
    pub fn r(&self) -> &Bytes {
        &self.r
    }

    /// The `s` value of the signature.
    pub fn s(&self) -> &Bytes {
        &self.s
    }
}

impl fmt::Display for Eip1559 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Eip1559 {{ chain_id: {}, nonce: {}, max_priority_fee_per_gas: {}, max_fee_per_gas: {}, gas_limit: {}, to: {}, value: {}, call_data: {}, access_list: [",
            self.chain_id,
            self.nonce,
            self.max_priority_fee_per_gas,
            self.max_fee_per_gas,
            self.gas_limit,
            self.to,
            self.value,
            self.call_data,
        )?;

        for (index, item) in self.access_list.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{}: [", item.address)?;
            for (index, key) in item.storage_keys.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}")?;
            }
            f.write_str("]")?;
        }

        write!(
            f,
            "], recovery_id: {}, r: {}, s: {} }}",
            self.recovery_id, self.r, self.s
        )
    }
}
