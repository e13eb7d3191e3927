use ethtx_primitives::{Address, B256};
use ethtx_rlp::RlpItem;

use crate::{
    DecodeError,
    utils::{expect_any_list, expect_fixed, expect_list},
};

/// An address and the storage slots of it that a transaction declares it will
/// access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AccessListItem {
    /// Accessed address
    pub address: Address,
    /// Accessed storage keys
    pub storage_keys: Vec<B256>,
}

impl AccessListItem {
    fn from_rlp(item: RlpItem) -> Result<Self, DecodeError> {
        let [address, storage_keys] = expect_list(item, "access list entry")?;

        let address = Address::from(expect_fixed::<20>(address, "access list address")?);
        let storage_keys = expect_any_list(storage_keys, "access list storage keys")?
            .into_iter()
            .map(|key| expect_fixed::<32>(key, "access list storage key").map(B256::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            address,
            storage_keys,
        })
    }

    fn to_rlp(&self) -> RlpItem {
        let storage_keys = self
            .storage_keys
            .iter()
            .map(|key| RlpItem::string(key.to_vec()))
            .collect();

        RlpItem::List(vec![
            RlpItem::string(self.address.to_vec()),
            RlpItem::List(storage_keys),
        ])
    }
}

pub(crate) fn decode_access_list(item: RlpItem) -> Result<Vec<AccessListItem>, DecodeError> {
    expect_any_list(item, "access list")?
        .into_iter()
        .map(AccessListItem::from_rlp)
        .collect()
}

pub(crate) fn encode_access_list(access_list: &[AccessListItem]) -> RlpItem {
    RlpItem::List(access_list.iter().map(AccessListItem::to_rlp).collect())
}
