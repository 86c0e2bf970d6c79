//! One-shot admin operations.
//!
//! These mirror the single-call maintenance actions: each sends one
//! direct transaction from the deployer and waits for one confirmation.

use alloy::primitives::{Address, U256};

use crate::chain::HttpProvider;
use crate::contracts::{IConfigStorage, IOracleMiddleware};
use crate::error::OpsError;
use crate::runner::Submission;

/// Set the protocol-wide minimum position size (raw contract units).
pub async fn set_minimum_position_size(
    provider: &HttpProvider,
    config_storage: Address,
    size: U256,
) -> Result<Submission, OpsError> {
    tracing::info!(%size, "setting minimum position size");

    let storage = IConfigStorage::new(config_storage, provider);
    let pending = storage
        .setMinimumPositionSize(size)
        .send()
        .await
        .map_err(|e| OpsError::Rpc(format!("setMinimumPositionSize send failed: {e}")))?;

    let tx_hash = format!("0x{}", hex::encode(pending.tx_hash().as_slice()));

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| OpsError::Rpc(format!("setMinimumPositionSize receipt failed: {e}")))?;

    if !receipt.status() {
        return Err(OpsError::Reverted(tx_hash));
    }

    Ok(Submission::Direct { tx_hash })
}

/// Grant or revoke oracle updater permission for `updater`.
pub async fn set_oracle_updater(
    provider: &HttpProvider,
    oracle_middleware: Address,
    updater: Address,
    allowed: bool,
) -> Result<Submission, OpsError> {
    tracing::info!(%updater, allowed, "setting oracle updater");

    let oracle = IOracleMiddleware::new(oracle_middleware, provider);
    let pending = oracle
        .setUpdater(updater, allowed)
        .send()
        .await
        .map_err(|e| OpsError::Rpc(format!("setUpdater send failed: {e}")))?;

    let tx_hash = format!("0x{}", hex::encode(pending.tx_hash().as_slice()));

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| OpsError::Rpc(format!("setUpdater receipt failed: {e}")))?;

    if !receipt.status() {
        return Err(OpsError::Reverted(tx_hash));
    }

    Ok(Submission::Direct { tx_hash })
}
