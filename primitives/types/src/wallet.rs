use serde::{Deserialize, Serialize};

/// Params of `open_wallet`.
///
/// Opens `filename` from the wallet directory the daemon was started with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWalletRequest {
    /// Wallet file name, relative to the daemon's wallet directory.
    pub filename: String,
    /// Wallet password.
    pub password: String,
}

/// Params of `create_wallet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    /// Wallet file name to create.
    pub filename: String,
    /// Password protecting the new wallet.
    pub password: String,
    /// Mnemonic language, e.g. `English`.
    pub language: String,
}

/// Params of `start_mining`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartMiningRequest {
    /// Number of mining threads.
    #[serde(rename = "threads_count")]
    pub threads: u64,
    /// Mine in the background.
    #[serde(rename = "do_background_mining")]
    pub background: bool,
    /// Keep mining while on battery power.
    pub ignore_battery: bool,
}

/// Params of `sign`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    /// Arbitrary text to sign.
    pub data: String,
}

/// Result of `sign`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignResponse {
    /// Signature over the submitted data.
    #[serde(default)]
    pub signature: String,
}

/// Result of `getaddress`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    /// Primary address of the open wallet.
    #[serde(default)]
    pub address: String,
}

/// Result of `getbalance`.
///
/// Unlocked funds are deep enough in the chain to be spendable; `balance`
/// includes funds that are still locked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Total balance in atomic units.
    #[serde(default)]
    pub balance: u64,
    /// Spendable balance in atomic units.
    #[serde(default)]
    pub unlocked_balance: u64,
}

/// Result of `getheight`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletHeight {
    /// Height the wallet has scanned to.
    #[serde(default)]
    pub height: u64,
}
