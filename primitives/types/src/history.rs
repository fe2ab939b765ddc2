use serde::{Deserialize, Serialize};

use crate::{is_false, TransferDestination};

/// Which outputs `incoming_transfers` should list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    /// Every incoming output.
    #[default]
    All,
    /// Outputs not yet spent.
    Available,
    /// Outputs already spent.
    Unavailable,
}

impl TransferType {
    /// Wire spelling of this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::All => "all",
            TransferType::Available => "available",
            TransferType::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for TransferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Params of `incoming_transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfersRequest {
    /// Output filter.
    pub transfer_type: TransferType,
}

/// One output received by the wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransfer {
    /// Amount in atomic units.
    #[serde(default)]
    pub amount: u64,
    /// Whether the output has been spent.
    #[serde(default)]
    pub spent: bool,
    /// Global output index, mostly for internal use.
    #[serde(default)]
    pub global_index: u64,
    /// Hash of the carrying transaction; shared by outputs of one transaction.
    #[serde(default)]
    pub tx_hash: String,
    /// Size of the carrying transaction in bytes.
    #[serde(default)]
    pub tx_size: u64,
}

/// Result of `incoming_transfers`.
///
/// The daemon leaves out `transfers` entirely when nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingTransferResponse {
    /// Matching outputs in daemon order.
    #[serde(default)]
    pub transfers: Vec<IncomingTransfer>,
}

/// One entry of the wallet's transfer history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Transaction id.
    #[serde(default)]
    pub txid: String,
    /// Payment id, `0000000000000000` when none.
    #[serde(default)]
    pub payment_id: String,
    /// Block height, 0 while unconfirmed.
    #[serde(default)]
    pub height: u64,
    /// Unix timestamp.
    #[serde(default)]
    pub timestamp: u64,
    /// Amount in atomic units.
    #[serde(default)]
    pub amount: u64,
    /// Fee in atomic units.
    #[serde(default)]
    pub fee: u64,
    /// Wallet-local note.
    #[serde(default)]
    pub note: String,
    /// Recipients, only reported for outgoing transfers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<TransferDestination>,
    /// Direction/state tag: `in`, `out`, `pending`, `failed` or `pool`.
    #[serde(default, rename = "type")]
    pub transfer_type: String,
}

/// Params of `get_transfers`.
///
/// Only categories switched on are sent; an all-default request asks the
/// daemon for nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersRequest {
    /// Include incoming transfers.
    #[serde(default, rename = "in", skip_serializing_if = "is_false")]
    pub incoming: bool,
    /// Include outgoing transfers.
    #[serde(default, rename = "out", skip_serializing_if = "is_false")]
    pub outgoing: bool,
    /// Include pending transfers.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pending: bool,
    /// Include failed transfers.
    #[serde(default, skip_serializing_if = "is_false")]
    pub failed: bool,
    /// Include transfers still in the transaction pool.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pool: bool,
    /// Restrict results to `min_height..=max_height`.
    #[serde(default, skip_serializing_if = "is_false")]
    pub filter_by_height: bool,
    /// Lower height bound, used with `filter_by_height`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u64>,
    /// Upper height bound, used with `filter_by_height`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u64>,
}

impl GetTransfersRequest {
    /// Includes incoming transfers.
    pub fn incoming(mut self) -> Self {
        self.incoming = true;
        self
    }

    /// Includes outgoing transfers.
    pub fn outgoing(mut self) -> Self {
        self.outgoing = true;
        self
    }

    /// Includes pending transfers.
    pub fn pending(mut self) -> Self {
        self.pending = true;
        self
    }

    /// Includes failed transfers.
    pub fn failed(mut self) -> Self {
        self.failed = true;
        self
    }

    /// Includes pool transfers.
    pub fn pool(mut self) -> Self {
        self.pool = true;
        self
    }

    /// Includes every category.
    pub fn all() -> Self { Self::default().incoming().outgoing().pending().failed().pool() }

    /// Restricts results to heights in `min..=max`.
    pub fn height_range(mut self, min: u64, max: u64) -> Self {
        self.filter_by_height = true;
        self.min_height = Some(min);
        self.max_height = Some(max);
        self
    }
}

/// Result of `get_transfers`, one list per category.
///
/// Categories the daemon leaves out decode as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransfersResponse {
    /// Incoming transfers.
    #[serde(default, rename = "in")]
    pub incoming: Vec<Transfer>,
    /// Outgoing transfers.
    #[serde(default, rename = "out")]
    pub outgoing: Vec<Transfer>,
    /// Pending transfers.
    #[serde(default)]
    pub pending: Vec<Transfer>,
    /// Failed transfers.
    #[serde(default)]
    pub failed: Vec<Transfer>,
    /// Pool transfers.
    #[serde(default)]
    pub pool: Vec<Transfer>,
}

/// Params of `get_transfer_by_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransferByIdRequest {
    /// Transaction id to look up.
    pub txid: String,
}

/// Result of `get_transfer_by_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransferByIdResponse {
    /// The matching history entry.
    #[serde(default)]
    pub transfer: Transfer,
}

/// One payment received under a payment id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment id the funds were tagged with.
    #[serde(default)]
    pub payment_id: String,
    /// Hash of the carrying transaction.
    #[serde(default)]
    pub tx_hash: String,
    /// Amount in atomic units.
    #[serde(default)]
    pub amount: u64,
    /// Height of the including block.
    #[serde(default)]
    pub block_height: u64,
    /// Blocks before the funds can be spent.
    #[serde(default)]
    pub unlock_time: u64,
}

/// Params of `get_payments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPaymentsRequest {
    /// Payment id to look up.
    pub payment_id: String,
}

/// Result of `get_payments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPaymentsResponse {
    /// Payments in daemon order.
    #[serde(default)]
    pub payments: Vec<Payment>,
}
