//! Config file to typed client to HTTP and back, against the scripted daemon.

use std::io::Write;

use serde_json::{json, Value};
use walletrpc::types::{GetTransfersRequest, TransferType};
use walletrpc::{Config, ErrorCategory, WalletClient};
use walletrpc_e2e::ScriptedDaemon;

fn client_from_toml(endpoint: &str) -> WalletClient {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    write!(
        file,
        "[wallet]\nendpoint = \"{}\"\nusername = \"monero\"\npassword = \"rpcpass\"\ntimeout_secs = 5\n",
        endpoint
    )
    .expect("write config");

    let config = Config::from_file(file.path()).expect("config parses");
    assert_eq!(config.logging.level, "info");
    WalletClient::from_config(&config.wallet).expect("client from config")
}

#[tokio::test]
async fn wallet_session_over_http() {
    let daemon = ScriptedDaemon::spawn().await.expect("daemon");
    let client = client_from_toml(daemon.endpoint());

    let address = client.get_address().await.expect("address");
    assert!(address.starts_with("44AFFq5k"));

    let balance = client.get_balance().await.expect("balance");
    assert_eq!(balance.unlocked_balance, 50_000_000_000);

    let incoming = client.incoming_transfers(TransferType::Available).await.expect("incoming");
    let indexes: Vec<u64> = incoming.transfers.iter().map(|t| t.global_index).collect();
    assert_eq!(indexes, vec![2, 1]);

    let history =
        client.get_transfers(&GetTransfersRequest::default().incoming()).await.expect("history");
    assert!(history.incoming.is_empty());

    client.stop_wallet().await.expect("stop");

    let calls = daemon.calls();
    let methods: Vec<&str> = calls.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(
        methods,
        vec!["getaddress", "getbalance", "incoming_transfers", "get_transfers", "stop_wallet"]
    );
    assert_eq!(calls[2].1, json!({"transfer_type": "available"}));
    assert_eq!(calls[3].1, json!({"in": true}));
    assert_eq!(calls[4].1, Value::Null);
}

#[tokio::test]
async fn unknown_procedure_is_a_daemon_error() {
    let daemon = ScriptedDaemon::spawn().await.expect("daemon");
    let client = client_from_toml(daemon.endpoint());

    let err = client.get_height().await.expect_err("not scripted");
    assert_eq!(err.category(), ErrorCategory::Daemon);
    assert_eq!(err.daemon_code(), Some(-32601));
}
