#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `walletrpc-http`: HTTP Transport Backend
//!
//! This crate provides the HTTP implementation of the
//! [`transport::Transport`] trait used to reach the wallet daemon.
//!
//! ## Overview
//!
//! - Implements [`HttpTransport`], a thin wrapper over [`reqwest::Client`]
//! - Supports unauthenticated calls and basic authentication, with credentials
//!   given directly or read from a `user:password` login file
//! - One HTTP POST per call; no retries
//!
//! ## Example
//! ```no_run
//! use walletrpc_http::HttpTransport;
//! use transport::Transport;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let transport = HttpTransport::new("127.0.0.1:18082")?;
//! let result = transport.send("getheight", None).await?;
//! println!("{:#?}", result);
//! # Ok::<(), transport::TransportError>(())
//! # });
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use transport::{JsonRpcRequest, JsonRpcResponse, Transport, TransportError};

/// Path the wallet daemon serves JSON-RPC on.
pub const JSON_RPC_PATH: &str = "/json_rpc";

/// A concrete implementation of the [`Transport`] trait using HTTP.
///
/// `HttpTransport` performs no schema validation or result typing; it posts
/// the JSON-RPC envelope and returns the `result` field as a
/// [`serde_json::Value`]. Failures at every stage (HTTP, status, envelope,
/// daemon) are normalized into [`TransportError`] variants.
///
/// Cloning is cheap: the underlying [`reqwest::Client`] shares its
/// connection pool between clones.
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client used to perform requests.
    client: reqwest::Client,
    /// The full URL of the JSON-RPC endpoint (e.g. `http://127.0.0.1:18082/json_rpc`).
    url: String,
    /// Optional basic authentication credentials `(username, password)`.
    auth: Option<(String, String)>,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url)
            .field("user", &self.auth.as_ref().map(|(user, _)| user))
            .finish_non_exhaustive()
    }
}

/// Turns a user-supplied endpoint into the daemon's JSON-RPC URL.
///
/// A bare `host:port` gets an `http://` scheme; an endpoint without a path
/// gets [`JSON_RPC_PATH`]. Anything else is kept verbatim.
///
/// ```
/// use walletrpc_http::normalize_endpoint;
///
/// assert_eq!(
///     normalize_endpoint("127.0.0.1:18082").unwrap(),
///     "http://127.0.0.1:18082/json_rpc"
/// );
/// ```
pub fn normalize_endpoint(endpoint: &str) -> Result<String, TransportError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(TransportError::Other("Endpoint must not be empty".to_string()));
    }
    let with_scheme = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };
    let mut url = Url::parse(&with_scheme)
        .map_err(|e| TransportError::Other(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
    if url.path().is_empty() || url.path() == "/" {
        url.set_path(JSON_RPC_PATH);
    }
    Ok(url.to_string())
}

impl HttpTransport {
    /// Constructs a new `HttpTransport` targeting `endpoint`.
    ///
    /// This variant does **not** use authentication.
    ///
    /// # Example
    /// ```
    /// use walletrpc_http::HttpTransport;
    /// use transport::Transport;
    ///
    /// let transport = HttpTransport::new("http://127.0.0.1:18082/json_rpc").unwrap();
    /// assert_eq!(transport.endpoint(), "http://127.0.0.1:18082/json_rpc");
    /// ```
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, TransportError> {
        Self::build(endpoint.as_ref(), None, None)
    }

    /// Constructs a new `HttpTransport` with basic authentication.
    ///
    /// # Example
    /// ```
    /// use walletrpc_http::HttpTransport;
    ///
    /// let transport =
    ///     HttpTransport::with_auth("127.0.0.1:18082", "rpcuser", "rpcpassword").unwrap();
    /// ```
    pub fn with_auth(
        endpoint: impl AsRef<str>,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Result<Self, TransportError> {
        Self::build(endpoint.as_ref(), Some((user.into(), pass.into())), None)
    }

    /// Constructs a fully configured `HttpTransport`.
    ///
    /// `timeout` bounds each request end to end; `None` keeps reqwest's
    /// default of no timeout.
    pub fn build(
        endpoint: &str,
        auth: Option<(String, String)>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let url = normalize_endpoint(endpoint)?;
        logging::trace("HTTP", &format!("→ initializing HTTP transport for {}", url));

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, url, auth })
    }

    /// Constructs a new `HttpTransport` using credentials from a login file
    /// holding a single `username:password` line, in the format the wallet
    /// daemon writes when started without explicit credentials.
    ///
    /// The credentials are sent as HTTP basic auth. `monero-wallet-rpc`
    /// itself only accepts digest auth, so this authenticates against a
    /// basic-auth front end (such as a reverse proxy), not the daemon directly.
    ///
    /// # Errors
    /// Returns `TransportError::Other` if:
    /// - The login file cannot be read
    /// - The login file is empty or doesn't contain a colon
    pub fn from_login_file(
        endpoint: impl AsRef<str>,
        login_path: impl AsRef<Path>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let (user, pass) = read_login_file(login_path.as_ref())?;
        Self::build(endpoint.as_ref(), Some((user, pass)), timeout)
    }

    /// Whether requests carry basic-auth credentials.
    pub fn has_auth(&self) -> bool { self.auth.is_some() }
}

/// Reads `username:password` from the first line of `path`.
pub fn read_login_file(path: &Path) -> Result<(String, String), TransportError> {
    let file = File::open(path)
        .map_err(|e| TransportError::Other(format!("Failed to read login file: {}", e)))?;

    let line = BufReader::new(file)
        .lines()
        .next()
        .ok_or_else(|| TransportError::Other("Login file is empty".to_string()))?
        .map_err(|e| TransportError::Other(format!("Failed to read login file: {}", e)))?;

    let (user, pass) = line.trim_end().split_once(':').ok_or_else(|| {
        TransportError::Other("Invalid login file format: missing colon".to_string())
    })?;

    Ok((user.to_string(), pass.to_string()))
}

#[async_trait]
impl Transport for HttpTransport {
    /// Posts a single JSON-RPC request and returns its `result` field.
    ///
    /// # Errors
    /// - [`TransportError::Http`] if the request or body read fails
    /// - [`TransportError::Status`] if the daemon answers with a non-2xx status
    /// - [`TransportError::InvalidResponse`] if the body is not a JSON-RPC envelope
    /// - [`TransportError::Daemon`] if the envelope carries an error object
    async fn send(&self, method: &str, params: Option<Value>) -> Result<Value, TransportError> {
        logging::trace("HTTP", &format!("→ POST {} (method: {})", self.url, method));
        let body = JsonRpcRequest::new(method, params);

        let mut req = self.client.post(&self.url).json(&body);
        if let Some((u, p)) = &self.auth {
            req = req.basic_auth(u, Some(p));
        }
        let resp = req.send().await.map_err(|e| {
            tracing::error!("HTTP Transport - Request failed: {}", e);
            TransportError::Http(e.to_string())
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("HTTP Transport - Failed to read body: {}", e);
            TransportError::Http(e.to_string())
        })?;

        if !status.is_success() {
            tracing::warn!("HTTP Transport - {} answered {} for {}", self.url, status, method);
            return Err(TransportError::Status { status: status.as_u16(), body: text });
        }

        let result = JsonRpcResponse::from_body(&text)?.into_result();
        if let Err(TransportError::Daemon { code, message }) = &result {
            tracing::debug!("HTTP Transport - {} failed with daemon error {}: {}", method, code, message);
        }
        result
    }

    /// Returns the normalized JSON-RPC endpoint URL.
    fn endpoint(&self) -> &str { &self.url }
}
