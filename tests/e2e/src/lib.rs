//! End-to-end harness for the wallet RPC client.
//!
//! [`ScriptedDaemon`] listens on a loopback port and answers JSON-RPC posts
//! the way a wallet daemon with one open wallet would, recording each call so
//! tests can check what went over the wire.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One procedure call as received by the daemon: method name and params
/// (`Value::Null` when the request carried none).
pub type Call = (String, Value);

/// In-process wallet daemon with canned replies.
pub struct ScriptedDaemon {
    endpoint: String,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedDaemon {
    /// Binds a loopback port and starts answering in the background.
    pub async fn spawn() -> Result<Self> {
        let listener =
            TcpListener::bind("127.0.0.1:0").await.context("binding scripted daemon")?;
        let addr = listener.local_addr()?;
        let calls: Arc<Mutex<Vec<Call>>> = Arc::default();

        let recorded = calls.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(serve(stream, recorded.clone()));
            }
        });
        Ok(Self { endpoint: format!("http://{}/json_rpc", addr), calls })
    }

    /// The daemon's JSON-RPC URL.
    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

/// The `result` or `error` member the daemon answers `method` with.
pub fn reply_for(method: &str) -> Value {
    match method {
        "getaddress" => json!({"result": {"address": "44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A"}}),
        "getbalance" => json!({"result": {"balance": 140000000000u64, "unlocked_balance": 50000000000u64}}),
        "incoming_transfers" => json!({"result": {"transfers": [
            {"amount": 2000000000000u64, "spent": false, "global_index": 2, "tx_hash": "a", "tx_size": 100},
            {"amount": 1000000000000u64, "spent": false, "global_index": 1, "tx_hash": "b", "tx_size": 100}
        ]}}),
        "get_transfers" | "stop_wallet" => json!({"result": {}}),
        _ => json!({"error": {"code": -32601, "message": "Method not found"}}),
    }
}

async fn serve(mut stream: TcpStream, calls: Arc<Mutex<Vec<Call>>>) {
    let Some(body) = read_body(&mut stream).await else { return };

    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let method = request["method"].as_str().unwrap_or_default().to_string();
    if let Ok(mut calls) = calls.lock() {
        calls.push((method.clone(), request["params"].clone()));
    }

    let mut reply = reply_for(&method);
    reply["jsonrpc"] = json!("2.0");
    reply["id"] = json!("0");
    let reply = reply.to_string();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.len(),
        reply
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_body(stream: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else { continue };
        let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
        let length = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= end + 4 + length {
            return Some(buf[end + 4..end + 4 + length].to_vec());
        }
    }
}
