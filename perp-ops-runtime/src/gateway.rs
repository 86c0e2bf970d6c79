//! Gateway between the update runner and the deployed contracts.
//!
//! The runner only sees the `ConfigGateway` trait; `ChainGateway` is the
//! production implementation, submitting either directly from the
//! deployer or through the multisig proposer depending on the route.

use alloy::primitives::{Address, B256, U256};
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::chain::HttpProvider;
use crate::contracts::{IConfigStorage, ITradeHelper};
use crate::error::OpsError;
use crate::records::MarketParams;
use crate::runner::Submission;
use crate::safe::SafeProposer;

/// On-chain operations the update runner needs.
#[async_trait]
pub trait ConfigGateway: Send + Sync {
    /// Asset id currently stored for the given market slot.
    async fn stored_asset_id(&self, market_index: u64) -> Result<B256, OpsError>;

    /// Submit the record's state change; exactly one call per record.
    async fn submit_market_config(&self, record: &MarketParams) -> Result<Submission, OpsError>;

    /// Trigger borrowing and funding rate updates for the record's market.
    async fn refresh_rates(&self, record: &MarketParams) -> Result<(), OpsError>;
}

/// How state-changing calls reach the chain.
pub enum Route {
    /// Deployer sends the call itself and waits for one confirmation.
    Direct,
    /// Calls are proposed to the multisig wallet for quorum approval.
    Multisig(SafeProposer),
}

/// Production gateway backed by a connected provider.
pub struct ChainGateway {
    provider: HttpProvider,
    config_storage: Address,
    trade_helper: Address,
    route: Route,
}

impl ChainGateway {
    pub fn new(
        provider: HttpProvider,
        config_storage: Address,
        trade_helper: Address,
        route: Route,
    ) -> Self {
        Self {
            provider,
            config_storage,
            trade_helper,
            route,
        }
    }

    /// Send a direct transaction to `to` with pre-encoded calldata and
    /// wait for one confirmation.
    async fn send_direct(&self, to: Address, calldata: Vec<u8>) -> Result<Submission, OpsError> {
        use alloy::providers::Provider;

        let request = alloy::rpc::types::TransactionRequest::default()
            .to(to)
            .input(alloy::primitives::Bytes::from(calldata).into());

        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(|e| OpsError::Rpc(format!("transaction send failed: {e}")))?;

        let tx_hash = format!("0x{}", hex::encode(pending.tx_hash().as_slice()));

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| OpsError::Rpc(format!("receipt fetch failed: {e}")))?;

        if !receipt.status() {
            return Err(OpsError::Reverted(tx_hash));
        }

        Ok(Submission::Direct { tx_hash })
    }
}

#[async_trait]
impl ConfigGateway for ChainGateway {
    async fn stored_asset_id(&self, market_index: u64) -> Result<B256, OpsError> {
        let storage = IConfigStorage::new(self.config_storage, &self.provider);
        let config = storage
            .marketConfigs(U256::from(market_index))
            .call()
            .await
            .map_err(|e| OpsError::Rpc(format!("marketConfigs({market_index}) read failed: {e}")))?;
        Ok(config.assetId)
    }

    async fn submit_market_config(&self, record: &MarketParams) -> Result<Submission, OpsError> {
        let call = IConfigStorage::setMarketConfigCall {
            marketIndex: U256::from(record.market_index),
            config: record.as_market_config(),
            isAdaptiveFeeEnabled: record.adaptive_fee_enabled,
        };

        match &self.route {
            Route::Direct => self.send_direct(self.config_storage, call.abi_encode()).await,
            Route::Multisig(proposer) => {
                proposer
                    .propose(self.config_storage, U256::ZERO, call.abi_encode().into())
                    .await
            }
        }
    }

    async fn refresh_rates(&self, record: &MarketParams) -> Result<(), OpsError> {
        let borrowing = ITradeHelper::updateBorrowingRateCall {
            assetClassIndex: record.asset_class,
        };
        let funding = ITradeHelper::updateFundingRateCall {
            marketIndex: U256::from(record.market_index),
        };

        match &self.route {
            Route::Direct => {
                self.send_direct(self.trade_helper, borrowing.abi_encode()).await?;
                self.send_direct(self.trade_helper, funding.abi_encode()).await?;
            }
            Route::Multisig(proposer) => {
                proposer
                    .propose(self.trade_helper, U256::ZERO, borrowing.abi_encode().into())
                    .await?;
                proposer
                    .propose(self.trade_helper, U256::ZERO, funding.abi_encode().into())
                    .await?;
            }
        }
        Ok(())
    }
}
