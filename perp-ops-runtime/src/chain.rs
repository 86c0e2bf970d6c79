//! Chain client for connecting to the target EVM network.
//!
//! Wraps an alloy provider configured with the deployer's local signer;
//! every admin transaction in this tool goes through one of these.

use alloy::network::{Ethereum, EthereumWallet};
use alloy::primitives::Address;
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::{Identity, ProviderBuilder, RootProvider};
use alloy::signers::local::PrivateKeySigner;

use crate::error::OpsError;
use crate::network::NetworkConfig;

/// The concrete provider type produced by `ProviderBuilder::new().wallet(...).connect_http(...)`.
///
/// Fills nonce, gas, and chain id, and signs transactions with the
/// deployer wallet.
pub type HttpProvider = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Ethereum>,
    Ethereum,
>;

/// A connected chain client: provider plus the resolved deployer identity.
pub struct ChainClient {
    pub provider: HttpProvider,
    pub signer_address: Address,
    pub chain_id: u64,
}

impl ChainClient {
    /// Connect to the network described by `network` using a hex-encoded
    /// private key (with or without "0x" prefix).
    pub fn connect(network: &NetworkConfig, private_key: &str) -> Result<Self, OpsError> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| OpsError::Config(format!("invalid private key: {e}")))?;
        let signer_address = signer.address();

        let url: url::Url = network.rpc_url.parse().map_err(|e| {
            OpsError::Config(format!("invalid RPC URL '{}': {e}", network.rpc_url))
        })?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url);

        Ok(Self {
            provider,
            signer_address,
            chain_id: network.chain_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::ContractAddresses;

    fn local_network() -> NetworkConfig {
        NetworkConfig {
            chain_id: 31337,
            rpc_url: "http://localhost:8545".into(),
            contracts: ContractAddresses {
                config_storage: "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse().unwrap(),
                oracle_middleware: "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".parse().unwrap(),
                trade_helper: "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0".parse().unwrap(),
                multisig: "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9".parse().unwrap(),
            },
            bot_handler: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".parse().unwrap(),
        }
    }

    // Hardhat account #0
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_connect() {
        let client = ChainClient::connect(&local_network(), TEST_KEY).unwrap();
        assert_eq!(client.chain_id, 31337);
        let expected: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
            .parse()
            .unwrap();
        assert_eq!(client.signer_address, expected);
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(ChainClient::connect(&local_network(), "not-a-key").is_err());
    }

    #[test]
    fn test_invalid_rpc_url() {
        let mut network = local_network();
        network.rpc_url = "not a url".into();
        assert!(ChainClient::connect(&network, TEST_KEY).is_err());
    }
}
