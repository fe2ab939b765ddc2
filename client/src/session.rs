//! Wallet-file, identity and mining procedures.

use transport::TransportError;
use types::{
    AddressResponse, CreateWalletRequest, OpenWalletRequest, SignRequest, SignResponse,
    StartMiningRequest, WalletHeight,
};

use crate::{method, WalletClient};

impl WalletClient {
    /// Stops the wallet daemon, storing the current wallet state.
    pub async fn stop_wallet(&self) -> Result<(), TransportError> {
        self.call_unit(method::STOP_WALLET).await
    }

    /// Returns the open wallet's primary address.
    pub async fn get_address(&self) -> Result<String, TransportError> {
        let resp: AddressResponse = self.call::<(), _>(method::GET_ADDRESS, None).await?;
        Ok(resp.address)
    }

    /// Rescans the blockchain from scratch for the open wallet.
    pub async fn rescan_wallet_chain(&self) -> Result<(), TransportError> {
        self.call_unit(method::RESCAN_BLOCKCHAIN).await
    }

    /// Signs `data` with the open wallet's keys and returns the signature.
    pub async fn sign_string(&self, data: &str) -> Result<String, TransportError> {
        let req = SignRequest { data: data.to_string() };
        let resp: SignResponse = self.call(method::SIGN, Some(&req)).await?;
        Ok(resp.signature)
    }

    /// Opens `filename` from the wallet directory the daemon was started with.
    pub async fn open_wallet(&self, filename: &str, password: &str) -> Result<(), TransportError> {
        let req =
            OpenWalletRequest { filename: filename.to_string(), password: password.to_string() };
        self.call_ack(method::OPEN_WALLET, &req).await
    }

    /// Creates a new wallet file in the daemon's wallet directory.
    pub async fn create_wallet(
        &self,
        filename: &str,
        password: &str,
        language: &str,
    ) -> Result<(), TransportError> {
        let req = CreateWalletRequest {
            filename: filename.to_string(),
            password: password.to_string(),
            language: language.to_string(),
        };
        self.call_ack(method::CREATE_WALLET, &req).await
    }

    /// Starts mining in the connected node.
    pub async fn start_mining(
        &self,
        threads: u64,
        background: bool,
        ignore_battery: bool,
    ) -> Result<(), TransportError> {
        let req = StartMiningRequest { threads, background, ignore_battery };
        self.call_ack(method::START_MINING, &req).await
    }

    /// Stops mining in the connected node.
    pub async fn stop_mining(&self) -> Result<(), TransportError> {
        self.call_unit(method::STOP_MINING).await
    }

    /// Returns the height the wallet has scanned to.
    pub async fn get_height(&self) -> Result<u64, TransportError> {
        let resp: WalletHeight = self.call::<(), _>(method::GET_HEIGHT, None).await?;
        Ok(resp.height)
    }
}
