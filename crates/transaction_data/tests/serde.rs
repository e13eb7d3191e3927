#![cfg(feature = "serde")]

use ethtx_test_utils::{bytes_from_hex, fixture};
use ethtx_transaction_data::{AccessListItem, TransactionData};
use serde_json::json;

#[test]
fn legacy_serializes_with_hex_fields() {
    let transaction =
        TransactionData::from_bytes(&bytes_from_hex(fixture::LEGACY_EIP155)).unwrap();

    let value = serde_json::to_value(&transaction).unwrap();
    assert_eq!(value["type"], json!("legacy"));
    assert_eq!(value["gasLimit"], json!("0x018000"));
    assert_eq!(value["value"], json!("0x"));
    assert_eq!(value["chainId"], json!("0x012a"));
    assert_eq!(value["recoveryId"], json!(0));
}

#[test]
fn eip1559_serializes_access_list() {
    let transaction = TransactionData::from_bytes(&bytes_from_hex(fixture::EIP1559)).unwrap();

    let value = serde_json::to_value(&transaction).unwrap();
    assert_eq!(value["type"], json!("eip1559"));
    assert_eq!(value["maxFeePerGas"], json!("0x05"));
    assert_eq!(
        value["accessList"][0]["storageKeys"][1],
        json!("0x0000000000000000000000000000000000000000000000000000000000000001")
    );
}

#[test]
fn access_list_item_deserializes() {
    let item: AccessListItem = serde_json::from_value(json!({
        "address": "0xc014ba5ec014ba5ec014ba5ec014ba5ec014ba5e",
        "storageKeys": [
            "0x0000000000000000000000000000000000000000000000000000000000000000"
        ]
    }))
    .unwrap();

    assert_eq!(item.storage_keys.len(), 1);
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
        value["address"].as_str().map(str::to_lowercase).as_deref(),
        Some("0xc014ba5ec014ba5ec014ba5ec014ba5ec014ba5e")
    );
}
