#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `walletrpc-transport`: Call Primitive for the Wallet RPC Client
//!
//! This crate defines the transport abstraction every wallet RPC call goes
//! through, together with the JSON-RPC 2.0 envelope spoken by the wallet
//! daemon.
//!
//! ## Core Concepts
//!
//! ### `Transport` Trait
//! Sends one procedure call (`send`) and returns the raw `result` value of
//! the daemon's reply. Backends such as `walletrpc-http` implement it to do
//! the actual I/O; tests implement it in memory.
//!
//! ### `TransportExt::call`
//! The typed call primitive: serializes a request DTO into `params`, sends
//! it, and deserializes `result` into a response DTO. A `null` result yields
//! the response type's zero value.
//!
//! ### `TransportError`
//! Every failure mode of a call, tagged with an [`ErrorCategory`] so callers
//! can branch on transport, protocol and daemon failures without matching on
//! message strings.
//!
//! ## Example
//! ```no_run
//! use transport::{DynTransport, TransportError, TransportExt};
//!
//! async fn height(transport: DynTransport) -> Result<u64, TransportError> {
//!     let reply: serde_json::Value = transport.call::<(), _>("getheight", None).await?;
//!     Ok(reply["height"].as_u64().unwrap_or_default())
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type alias for structured error handling in transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// JSON-RPC protocol version sent in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Request id sent in every envelope.
///
/// Calls are strictly one request per round trip, so the id is constant.
pub const REQUEST_ID: &str = "0";

/// Coarse classification of a [`TransportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The round trip itself failed: connection, timeout, HTTP status.
    Transport,
    /// The daemon answered, but not with a usable JSON-RPC reply.
    Protocol,
    /// The daemon reported an error object.
    Daemon,
}

/// Canonical error type for all transport implementations.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// An HTTP-level failure (connection refused, DNS, timeout, body read).
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// The endpoint answered with a non-2xx HTTP status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Failure to serialize request params or deserialize the typed result.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The response did not conform to the JSON-RPC envelope format.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The daemon returned an explicit JSON-RPC error object.
    #[error("Daemon error {code}: {message}")]
    Daemon {
        /// Daemon-defined error code.
        code: i64,
        /// Daemon-supplied message.
        message: String,
    },

    /// Local setup failures not covered by the variants above.
    #[error("Other error: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns the category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransportError::Http(_) | TransportError::Status { .. } | TransportError::Other(_) =>
                ErrorCategory::Transport,
            TransportError::Serialization(_) | TransportError::InvalidResponse(_) =>
                ErrorCategory::Protocol,
            TransportError::Daemon { .. } => ErrorCategory::Daemon,
        }
    }

    /// Returns the daemon's error code, if the daemon reported one.
    pub fn daemon_code(&self) -> Option<i64> {
        match self {
            TransportError::Daemon { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` for errors reported by the daemon itself.
    pub fn is_daemon(&self) -> bool { self.category() == ErrorCategory::Daemon }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self { TransportError::Serialization(err.to_string()) }
}

/// Outgoing JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: String,
    /// Always [`REQUEST_ID`].
    pub id: String,
    /// Daemon procedure name, e.g. `getbalance`.
    pub method: String,
    /// Named parameters; omitted for parameterless procedures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Builds the envelope for `method` with optional `params`.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: REQUEST_ID.to_string(),
            method: method.into(),
            params,
        }
    }
}

/// Error object carried by a failed JSON-RPC reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    /// Daemon-defined error code.
    pub code: i64,
    /// Human readable message.
    pub message: String,
    /// Optional extra payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Incoming JSON-RPC 2.0 response envelope.
///
/// `result` distinguishes a missing key (`None`) from an explicit `null`
/// (`Some(Value::Null)`); only the former is malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version echoed by the daemon.
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// The identifier correlating request and response.
    #[serde(default)]
    pub id: Value,
    /// The value returned on success.
    #[serde(default, deserialize_with = "present_value")]
    pub result: Option<Value>,
    /// The error object returned on failure.
    #[serde(default)]
    pub error: Option<JsonRpcErrorObject>,
}

fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcResponse {
    /// Parses a raw response body into an envelope.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| TransportError::InvalidResponse(format!("{} (body: {})", e, body)))?;
        if !value.is_object() {
            return Err(TransportError::InvalidResponse(format!(
                "expected a JSON-RPC object (body: {})",
                body
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| TransportError::InvalidResponse(format!("{} (body: {})", e, body)))
    }

    /// Extracts the `result` value, surfacing a daemon error object first.
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(TransportError::Daemon { code: error.code, message: error.message });
        }
        self.result.ok_or_else(|| {
            TransportError::InvalidResponse("response has neither result nor error".to_string())
        })
    }
}

/// The base transport trait: one procedure call per `send`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a single procedure call with optional named `params`.
    ///
    /// Implementations perform exactly one round trip and return the value
    /// of the reply's `"result"` field, or the matching [`TransportError`].
    async fn send(&self, method: &str, params: Option<Value>) -> Result<Value>;

    /// Returns the configured endpoint, usually the daemon's URL.
    fn endpoint(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched transport instance.
///
/// ```
/// use transport::{DynTransport, Transport};
///
/// fn describe(t: DynTransport) -> String { t.endpoint().to_string() }
/// ```
pub type DynTransport = Arc<dyn Transport>;

/// Typed calls over any [`Transport`].
#[async_trait]
pub trait TransportExt: Transport {
    /// Calls `method` with an optional request DTO and decodes the result.
    ///
    /// A `null` result decodes to `R::default()`.
    async fn call<P, R>(&self, method: &str, request: Option<&P>) -> Result<R>
    where
        P: Serialize + Sync + ?Sized,
        R: DeserializeOwned + Default + Send,
    {
        let params = request.map(serde_json::to_value).transpose()?;
        let result = self.send(method, params).await?;
        decode_result(result)
    }
}

impl<T: Transport + ?Sized> TransportExt for T {}

/// Decodes a `result` value into a typed response.
pub fn decode_result<R: DeserializeOwned + Default>(result: Value) -> Result<R> {
    if result.is_null() {
        return Ok(R::default());
    }
    Ok(serde_json::from_value(result)?)
}
