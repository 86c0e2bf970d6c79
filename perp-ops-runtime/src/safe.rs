//! Multisig proposal wrapper.
//!
//! Privileged admin calls are not sent to the target contract directly:
//! the encoded call is handed to the owning multisig wallet via
//! `submitTransaction`, and takes effect only once a quorum of co-signers
//! approves it out of band. This module only submits the proposal and
//! waits for the submission receipt; it never waits for quorum.

use alloy::primitives::{Address, Bytes, U256};

use crate::chain::HttpProvider;
use crate::contracts::IMultiSigWallet;
use crate::error::OpsError;
use crate::runner::Submission;

/// Proposes transactions to the protocol's multisig wallet.
pub struct SafeProposer {
    address: Address,
    provider: HttpProvider,
}

impl SafeProposer {
    pub fn new(address: Address, provider: HttpProvider) -> Self {
        Self { address, provider }
    }

    /// Submit `(destination, value, payload)` as a pending multisig
    /// transaction and return its handle.
    ///
    /// The proposal id is recovered from the wallet's `Submission` event
    /// when the receipt carries one.
    pub async fn propose(
        &self,
        destination: Address,
        value: U256,
        payload: Bytes,
    ) -> Result<Submission, OpsError> {
        let wallet = IMultiSigWallet::new(self.address, &self.provider);

        let pending = wallet
            .submitTransaction(destination, value, payload)
            .send()
            .await
            .map_err(|e| OpsError::Proposal(format!("submitTransaction send failed: {e}")))?;

        let tx_hash = format!("0x{}", hex::encode(pending.tx_hash().as_slice()));

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| OpsError::Proposal(format!("submitTransaction receipt failed: {e}")))?;

        if !receipt.status() {
            return Err(OpsError::Reverted(format!(
                "multisig submitTransaction reverted: {tx_hash}"
            )));
        }

        let proposal_id = receipt
            .logs()
            .iter()
            .find_map(|log| log.log_decode::<IMultiSigWallet::Submission>().ok())
            .map(|ev| ev.inner.data.transactionId.to_string());

        tracing::info!(%tx_hash, ?proposal_id, "multisig proposal submitted");

        Ok(Submission::Proposed {
            tx_hash,
            proposal_id,
        })
    }
}
