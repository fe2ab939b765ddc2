#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wire Schema for the Wallet Daemon
//!
//! This crate defines the request and response records exchanged with the
//! wallet daemon over JSON-RPC. Every struct mirrors the daemon's wire schema:
//! serde attributes carry the snake_case wire names and decide which fields
//! are omitted when empty, while the Rust field names stay descriptive.
//!
//! Units are uniform across the schema: amounts are `u64` atomic units,
//! heights and timestamps are `u64`, flags are plain `bool`s.
//!
//! All records are plain data with no invariants beyond field shape; they are
//! built fresh per call, sent or received once, and dropped.

/// Session-level records: wallet files, address, balance, height, mining.
pub mod wallet;
/// Outgoing funds: transfers and sweeps.
pub mod transfer;
/// Ledger history: transfer lists, payments, incoming outputs.
pub mod history;

pub use history::{
    GetPaymentsRequest, GetPaymentsResponse, GetTransferByIdRequest, GetTransferByIdResponse,
    GetTransfersRequest, GetTransfersResponse, IncomingTransfer, IncomingTransferResponse,
    IncomingTransfersRequest, Payment, Transfer, TransferType,
};
pub use transfer::{
    SweepAllRequest, SweepAllResponse, SweepDustResponse, TransferDestination, TransferRequest,
    TransferResponse,
};
pub use wallet::{
    AddressResponse, BalanceResponse, CreateWalletRequest, OpenWalletRequest, SignRequest,
    SignResponse, StartMiningRequest, WalletHeight,
};

/// `skip_serializing_if` helper for flags the daemon treats as off when absent.
pub(crate) fn is_false(flag: &bool) -> bool { !*flag }
