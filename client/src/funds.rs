//! Balance, spending and history procedures.

use transport::TransportError;
use types::{
    BalanceResponse, GetPaymentsRequest, GetPaymentsResponse, GetTransferByIdRequest,
    GetTransferByIdResponse, GetTransfersRequest, GetTransfersResponse, IncomingTransferResponse,
    IncomingTransfersRequest, Payment, SweepAllRequest, SweepAllResponse, SweepDustResponse,
    Transfer, TransferRequest, TransferResponse, TransferType,
};

use crate::{method, WalletClient};

impl WalletClient {
    /// Returns the total and unlocked balance of the open wallet.
    pub async fn get_balance(&self) -> Result<BalanceResponse, TransportError> {
        self.call::<(), _>(method::GET_BALANCE, None).await
    }

    /// Sends funds to one or more destinations.
    pub async fn transfer(&self, req: &TransferRequest) -> Result<TransferResponse, TransportError> {
        self.call(method::TRANSFER, Some(req)).await
    }

    /// Sweeps all unmixable dust outputs.
    pub async fn sweep_dust(&self) -> Result<SweepDustResponse, TransportError> {
        self.call::<(), _>(method::SWEEP_DUST, None).await
    }

    /// Sweeps every unlocked output to a single address.
    pub async fn sweep_all(&self, req: &SweepAllRequest) -> Result<SweepAllResponse, TransportError> {
        self.call(method::SWEEP_ALL, Some(req)).await
    }

    /// Lists incoming outputs matching `transfer_type`, in daemon order.
    pub async fn incoming_transfers(
        &self,
        transfer_type: TransferType,
    ) -> Result<IncomingTransferResponse, TransportError> {
        let req = IncomingTransfersRequest { transfer_type };
        self.call(method::INCOMING_TRANSFERS, Some(&req)).await
    }

    /// Returns the wallet's history for the selected categories.
    pub async fn get_transfers(
        &self,
        req: &GetTransfersRequest,
    ) -> Result<GetTransfersResponse, TransportError> {
        self.call(method::GET_TRANSFERS, Some(req)).await
    }

    /// Looks up a single history entry by transaction id.
    pub async fn get_transfer_by_id(&self, txid: &str) -> Result<Transfer, TransportError> {
        let req = GetTransferByIdRequest { txid: txid.to_string() };
        let resp: GetTransferByIdResponse = self.call(method::GET_TRANSFER_BY_ID, Some(&req)).await?;
        Ok(resp.transfer)
    }

    /// Lists payments received under `payment_id`.
    pub async fn get_payments(&self, payment_id: &str) -> Result<Vec<Payment>, TransportError> {
        let req = GetPaymentsRequest { payment_id: payment_id.to_string() };
        let resp: GetPaymentsResponse = self.call(method::GET_PAYMENTS, Some(&req)).await?;
        Ok(resp.payments)
    }
}
