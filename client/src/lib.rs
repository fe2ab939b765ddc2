#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `walletrpc-client`: Typed Wallet Daemon Client
//!
//! [`WalletClient`] exposes one async method per procedure of the wallet
//! daemon's JSON-RPC API. Each method is a fixed mapping from typed request
//! fields to a wire procedure name and params, through the
//! [`TransportExt::call`] primitive, back to typed response fields. The client
//! performs no validation of its own: balance, address format and mixin rules
//! are enforced by the daemon and surface as [`TransportError::Daemon`].
//!
//! The client holds no session state beyond its endpoint; the daemon tracks
//! which wallet file is open.
//!
//! ## Example
//! ```no_run
//! use walletrpc_client::WalletClient;
//!
//! # async fn run() -> Result<(), walletrpc_client::TransportError> {
//! let client = WalletClient::new("127.0.0.1:18082")?;
//! client.open_wallet("savings", "hunter2").await?;
//! let balance = client.get_balance().await?;
//! println!("unlocked: {}", balance.unlocked_balance);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use config::WalletConfig;
use http::HttpTransport;
use serde::de::DeserializeOwned;
use serde::Serialize;
pub use transport::{DynTransport, ErrorCategory, Transport, TransportError, TransportExt};
pub use types;

mod funds;
mod session;

/// Wire names of the daemon procedures this client calls.
pub mod method {
    /// `stop_wallet`
    pub const STOP_WALLET: &str = "stop_wallet";
    /// `getaddress`
    pub const GET_ADDRESS: &str = "getaddress";
    /// `rescan_blockchain`
    pub const RESCAN_BLOCKCHAIN: &str = "rescan_blockchain";
    /// `sign`
    pub const SIGN: &str = "sign";
    /// `open_wallet`
    pub const OPEN_WALLET: &str = "open_wallet";
    /// `create_wallet`
    pub const CREATE_WALLET: &str = "create_wallet";
    /// `start_mining`
    pub const START_MINING: &str = "start_mining";
    /// `stop_mining`
    pub const STOP_MINING: &str = "stop_mining";
    /// `incoming_transfers`
    pub const INCOMING_TRANSFERS: &str = "incoming_transfers";
    /// `getbalance`
    pub const GET_BALANCE: &str = "getbalance";
    /// `transfer`
    pub const TRANSFER: &str = "transfer";
    /// `sweep_dust`
    pub const SWEEP_DUST: &str = "sweep_dust";
    /// `sweep_all`
    pub const SWEEP_ALL: &str = "sweep_all";
    /// `get_transfers`
    pub const GET_TRANSFERS: &str = "get_transfers";
    /// `get_transfer_by_id`
    pub const GET_TRANSFER_BY_ID: &str = "get_transfer_by_id";
    /// `get_payments`
    pub const GET_PAYMENTS: &str = "get_payments";
    /// `getheight`
    pub const GET_HEIGHT: &str = "getheight";
}

/// Handle bound to one wallet daemon endpoint.
///
/// Cloning shares the underlying transport, so independent calls can be
/// issued concurrently from clones or from one shared reference.
#[derive(Clone)]
pub struct WalletClient {
    transport: DynTransport,
}

impl fmt::Debug for WalletClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletClient").field("endpoint", &self.transport.endpoint()).finish()
    }
}

impl WalletClient {
    /// Creates a client for `endpoint` (a URL or `host:port`) without
    /// authentication.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, TransportError> {
        Ok(Self::from_transport(Arc::new(HttpTransport::new(endpoint)?)))
    }

    /// Creates a client for `endpoint` using HTTP basic authentication.
    pub fn with_auth(
        endpoint: impl AsRef<str>,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Result<Self, TransportError> {
        Ok(Self::from_transport(Arc::new(HttpTransport::with_auth(endpoint, user, pass)?)))
    }

    /// Creates a client from connection settings.
    ///
    /// Explicit credentials win over a login file; a configured timeout is
    /// applied to every request. A username without a password (or the
    /// reverse) is rejected rather than silently sent unauthenticated.
    pub fn from_config(config: &WalletConfig) -> Result<Self, TransportError> {
        if config.has_partial_credentials() {
            tracing::warn!(endpoint = %config.endpoint, "username and password must be set together");
            return Err(TransportError::Other(
                "Wallet config sets only one of username and password".to_string(),
            ));
        }
        let timeout = config.timeout();
        let transport = match (config.credentials(), &config.login_file) {
            (Some((user, pass)), _) => HttpTransport::build(
                &config.endpoint,
                Some((user.to_string(), pass.to_string())),
                timeout,
            )?,
            (None, Some(path)) => HttpTransport::from_login_file(&config.endpoint, path, timeout)?,
            (None, None) => HttpTransport::build(&config.endpoint, None, timeout)?,
        };
        Ok(Self::from_transport(Arc::new(transport)))
    }

    /// Wraps an existing transport.
    pub fn from_transport(transport: DynTransport) -> Self { Self { transport } }

    /// The endpoint this client is bound to.
    pub fn endpoint(&self) -> &str { self.transport.endpoint() }

    /// The underlying transport.
    pub fn transport(&self) -> &DynTransport { &self.transport }

    /// Calls `method` with `request` and decodes the result.
    async fn call<P, R>(&self, method: &str, request: Option<&P>) -> Result<R, TransportError>
    where
        P: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send,
    {
        tracing::debug!(method, endpoint = self.endpoint(), "wallet rpc call");
        self.transport.call(method, request).await
    }

    /// Calls a parameterless `method` whose result is ignored.
    async fn call_unit(&self, method: &str) -> Result<(), TransportError> {
        self.call::<(), serde_json::Value>(method, None).await.map(|_| ())
    }

    /// Calls `method` with `request`, ignoring the result.
    async fn call_ack<P>(&self, method: &str, request: &P) -> Result<(), TransportError>
    where
        P: Serialize + Sync + ?Sized,
    {
        self.call::<P, serde_json::Value>(method, Some(request)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_endpoint() {
        let client = WalletClient::new("127.0.0.1:18082").expect("valid endpoint");
        assert_eq!(client.endpoint(), "http://127.0.0.1:18082/json_rpc");
        assert!(format!("{:?}", client).contains("127.0.0.1:18082"));
    }

    #[test]
    fn test_new_rejects_empty_endpoint() {
        let err = WalletClient::new("").expect_err("empty endpoint");
        assert_eq!(err.category(), ErrorCategory::Transport);
    }

    #[test]
    fn test_from_config() {
        let mut config = WalletConfig::new("http://10.1.1.1:28088/json_rpc");
        config.timeout_secs = Some(5);
        let client = WalletClient::from_config(&config).expect("plain config");
        assert_eq!(client.endpoint(), "http://10.1.1.1:28088/json_rpc");

        config.login_file = Some("/nonexistent/monero-wallet-rpc.28088.login".into());
        assert!(WalletClient::from_config(&config).is_err());

        // Explicit credentials take precedence over the login file.
        config.username = Some("u".into());
        config.password = Some("p".into());
        assert!(WalletClient::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_rejects_partial_credentials() {
        let mut config = WalletConfig::new("127.0.0.1:28088");
        config.username = Some("rpcuser".into());
        let err = WalletClient::from_config(&config).expect_err("password missing");
        assert!(matches!(err, TransportError::Other(_)));

        config.username = None;
        config.password = Some("pw".into());
        assert!(WalletClient::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_reads_login_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "monero:s3cr3t").expect("write login");

        let mut config = WalletConfig::new("127.0.0.1:28088");
        config.login_file = Some(file.path().to_path_buf());
        let client = WalletClient::from_config(&config).expect("login file config");
        assert_eq!(client.endpoint(), "http://127.0.0.1:28088/json_rpc");
    }
}
