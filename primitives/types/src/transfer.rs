use serde::{Deserialize, Serialize};

use crate::is_false;

/// One recipient of a transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDestination {
    /// Amount to send, in atomic units.
    pub amount: u64,
    /// Recipient's public address.
    pub address: String,
}

impl TransferDestination {
    /// Creates a destination paying `amount` atomic units to `address`.
    pub fn new(address: impl Into<String>, amount: u64) -> Self {
        Self { amount, address: address.into() }
    }
}

/// Params of `transfer`.
///
/// Optional fields left at their defaults are not sent, so the daemon applies
/// its own defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Recipients, in the order outputs should be created.
    pub destinations: Vec<TransferDestination>,
    /// Number of decoy outputs mixed with each real input.
    pub mixin: u64,
    /// Blocks before the funds can be spent (0 for no lock).
    pub unlock_time: u64,
    /// 64-character hex payment id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Return the transaction key.
    #[serde(default, skip_serializing_if = "is_false")]
    pub get_tx_key: bool,
    /// Fee priority, 0 (default) to 3.
    #[serde(default)]
    pub priority: u32,
    /// Build the transaction but do not relay it.
    #[serde(default, skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    /// Return the signed transaction as hex.
    #[serde(default, skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
}

impl TransferRequest {
    /// Starts a transfer to `destinations` with every option at its default.
    pub fn new(destinations: Vec<TransferDestination>) -> Self {
        Self { destinations, ..Self::default() }
    }

    /// Sets the ring size parameter.
    pub fn mixin(mut self, mixin: u64) -> Self {
        self.mixin = mixin;
        self
    }

    /// Locks the outputs for `blocks` blocks.
    pub fn unlock_time(mut self, blocks: u64) -> Self {
        self.unlock_time = blocks;
        self
    }

    /// Attaches a payment id.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }

    /// Sets the fee priority.
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Asks the daemon to return the transaction key.
    pub fn with_tx_key(mut self) -> Self {
        self.get_tx_key = true;
        self
    }

    /// Asks the daemon to return the transaction hex.
    pub fn with_tx_hex(mut self) -> Self {
        self.get_tx_hex = true;
        self
    }

    /// Keeps the transaction local instead of relaying it.
    pub fn do_not_relay(mut self) -> Self {
        self.do_not_relay = true;
        self
    }
}

/// Result of `transfer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferResponse {
    /// Fee charged, in atomic units.
    #[serde(default)]
    pub fee: u64,
    /// Publicly searchable transaction hash.
    #[serde(default)]
    pub tx_hash: String,
    /// Transaction key; empty unless requested.
    #[serde(default)]
    pub tx_key: String,
    /// Transaction hex, present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_blob: Option<String>,
}

/// Result of `sweep_dust`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepDustResponse {
    /// Hashes of the sweeping transactions.
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
}

/// Params of `sweep_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepAllRequest {
    /// Address receiving the swept funds.
    pub address: String,
    /// Fee priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Number of decoy outputs mixed with each real input.
    pub mixin: u64,
    /// Blocks before the funds can be spent (0 for no lock).
    pub unlock_time: u64,
    /// 64-character hex payment id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Return the transaction keys.
    #[serde(default, skip_serializing_if = "is_false")]
    pub get_tx_keys: bool,
    /// Only sweep outputs below this amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_amount: Option<u64>,
    /// Build the transactions but do not relay them.
    #[serde(default, skip_serializing_if = "is_false")]
    pub do_not_relay: bool,
    /// Return the signed transactions as hex.
    #[serde(default, skip_serializing_if = "is_false")]
    pub get_tx_hex: bool,
}

impl SweepAllRequest {
    /// Starts a sweep of every unlocked output to `address`.
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into(), ..Self::default() }
    }

    /// Sets the ring size parameter.
    pub fn mixin(mut self, mixin: u64) -> Self {
        self.mixin = mixin;
        self
    }

    /// Locks the outputs for `blocks` blocks.
    pub fn unlock_time(mut self, blocks: u64) -> Self {
        self.unlock_time = blocks;
        self
    }

    /// Sets the fee priority.
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Attaches a payment id.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }

    /// Restricts the sweep to outputs below `amount` atomic units.
    pub fn below_amount(mut self, amount: u64) -> Self {
        self.below_amount = Some(amount);
        self
    }

    /// Asks the daemon to return the transaction keys.
    pub fn with_tx_keys(mut self) -> Self {
        self.get_tx_keys = true;
        self
    }

    /// Asks the daemon to return the transactions as hex.
    pub fn with_tx_hex(mut self) -> Self {
        self.get_tx_hex = true;
        self
    }

    /// Keeps the transactions local instead of relaying them.
    pub fn do_not_relay(mut self) -> Self {
        self.do_not_relay = true;
        self
    }
}

/// Result of `sweep_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepAllResponse {
    /// Hashes of the sweeping transactions.
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    /// Transaction keys, empty unless requested.
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    /// Transaction hex blobs, empty unless requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tx_blob_list: Vec<String>,
}
