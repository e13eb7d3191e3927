/// A legacy EIP-155 contract call signed for chain 298.
pub const LEGACY_EIP155: &str = "f864012f83018000947e3a9eaf9bcc39e2ffa38eb30bf7a93feacbc18180827653820277a0f9fbff985d374be4a55f296915002eec11ac96f1ce2df183adf992baa9390b2fa00c1e867cc960d9c74ec2e6a662b7908ec4c8cc9f3091e886bcefbeb2290fb792";

/// Fields of [`LEGACY_EIP155`], hex-encoded in decoding order.
pub mod legacy_eip155 {
    /// Nonce
    pub const NONCE: &str = "01";
    /// Gas price
    pub const GAS_PRICE: &str = "2f";
    /// Gas limit
    pub const GAS_LIMIT: &str = "018000";
    /// Recipient
    pub const TO: &str = "7e3a9eaf9bcc39e2ffa38eb30bf7a93feacbc181";
    /// Value
    pub const VALUE: &str = "";
    /// Call data
    pub const CALL_DATA: &str = "7653";
    /// V, which encodes chain ID 298 and recovery ID 0
    pub const V: &str = "0277";
    /// Signature R
    pub const R: &str = "f9fbff985d374be4a55f296915002eec11ac96f1ce2df183adf992baa9390b2f";
    /// Signature S
    pub const S: &str = "0c1e867cc960d9c74ec2e6a662b7908ec4c8cc9f3091e886bcefbeb2290fb792";
    /// Chain ID derived from [`V`]
    pub const CHAIN_ID: &str = "012a";
}

/// An EIP-1559 transaction with a two-key access list, generated by Hardhat.
pub const EIP1559: &str = "02f8be010102050394c014ba5ec014ba5ec014ba5ec014ba5ec014ba5e04821234f85bf859940000000000000000000000000000000000000000f842a00000000000000000000000000000000000000000000000000000000000000000a0000000000000000000000000000000000000000000000000000000000000000101a07764e376b5b4090264f73abee68ebb5fdc9f76050eff800237e5a2bedadcd7eda044c0ae9b07c75cf4e0a14aebfe792ab2fdccd7d89550b166b1b4a4ece0054f02";

/// Fields of [`EIP1559`], hex-encoded in decoding order. The access list
/// holds the zero address with storage keys 0 and 1.
pub mod eip1559 {
    /// Chain ID
    pub const CHAIN_ID: &str = "01";
    /// Nonce
    pub const NONCE: &str = "01";
    /// Max priority fee per gas
    pub const MAX_PRIORITY_FEE_PER_GAS: &str = "02";
    /// Max fee per gas
    pub const MAX_FEE_PER_GAS: &str = "05";
    /// Gas limit
    pub const GAS_LIMIT: &str = "03";
    /// Recipient
    pub const TO: &str = "c014ba5ec014ba5ec014ba5ec014ba5ec014ba5e";
    /// Value
    pub const VALUE: &str = "04";
    /// Call data
    pub const CALL_DATA: &str = "1234";
    /// Recovery ID
    pub const RECOVERY_ID: &str = "01";
    /// Signature R
    pub const R: &str = "7764e376b5b4090264f73abee68ebb5fdc9f76050eff800237e5a2bedadcd7ed";
    /// Signature S
    pub const S: &str = "44c0ae9b07c75cf4e0a14aebfe792ab2fdccd7d89550b166b1b4a4ece0054f02";
}
