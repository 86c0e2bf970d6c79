//! Config update runner.
//!
//! Walks an ordered batch of target configuration records, verifies the
//! on-chain precondition for each, and submits exactly one state-changing
//! call per record through the gateway. Strictly sequential, fail-fast:
//! the first precondition mismatch or transport error aborts the run and
//! nothing after it is attempted.

use serde::Serialize;

use crate::error::OpsError;
use crate::gateway::ConfigGateway;
use crate::records::MarketParams;

/// How a record's state change reached the chain.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Submission {
    /// Sent by the deployer itself, one confirmation awaited.
    Direct { tx_hash: String },
    /// Handed to the multisig wallet; quorum approval happens out of band.
    Proposed {
        tx_hash: String,
        proposal_id: Option<String>,
    },
}

/// Outcome for one processed record.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    pub market_index: u64,
    pub symbol: String,
    pub submission: Submission,
}

/// Apply the market configuration batch, in order.
///
/// For each record: read the stored asset id for the record's index and
/// abort the whole run if it does not match the record's, otherwise
/// submit the update and collect the outcome. With `refresh_rates` set,
/// borrowing and funding rate updates are triggered before each market
/// update.
pub async fn apply_market_configs(
    gateway: &dyn ConfigGateway,
    records: &[MarketParams],
    refresh_rates: bool,
) -> Result<Vec<RecordOutcome>, OpsError> {
    let mut outcomes = Vec::with_capacity(records.len());

    for record in records {
        let symbol = record.symbol();
        tracing::info!(market_index = record.market_index, %symbol, "applying market config");

        let stored = gateway.stored_asset_id(record.market_index).await?;
        if stored != record.asset_id {
            return Err(OpsError::AssetIdMismatch {
                market_index: record.market_index,
                expected: record.asset_id.to_string(),
                actual: stored.to_string(),
            });
        }

        if refresh_rates {
            gateway.refresh_rates(record).await?;
        }

        let submission = gateway.submit_market_config(record).await?;
        tracing::info!(market_index = record.market_index, ?submission, "submitted");

        outcomes.push(RecordOutcome {
            market_index: record.market_index,
            symbol,
            submission,
        });
    }

    tracing::info!(records = outcomes.len(), "market config run complete");
    Ok(outcomes)
}
