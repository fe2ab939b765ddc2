// SPDX-License-Identifier: CC0-1.0

//! Wallet RPC umbrella crate.
//!
//! Re-exports the workspace members so applications can depend on a single
//! crate. The typed client lives in `walletrpc-client`, the wire schema in
//! `walletrpc-types` and the transport contract in `walletrpc-transport`.
//!
//! ```no_run
//! use walletrpc::{Config, WalletClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! walletrpc::logging::init(&config.logging)?;
//!
//! let client = WalletClient::from_config(&config.wallet)?;
//! println!("height: {}", client.get_height().await?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use client::{method, WalletClient};
pub use config::{Config, ConfigError, LoggingConfig, WalletConfig};
pub use logging;
pub use transport::{ErrorCategory, Transport, TransportError, TransportExt};
pub use types;

/// Miscellaneous metadata about the workspace.
pub mod walletrpc_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
