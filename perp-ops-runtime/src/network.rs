//! Network registry: maps a chain id to RPC endpoint and deployed
//! contract addresses.
//!
//! The registry is a hand-maintained JSON file checked in next to the
//! tool; the signer key is deliberately NOT part of it and is resolved
//! from the environment once per run.

use std::collections::HashMap;
use std::path::Path;

use alloy::primitives::Address;
use serde::Deserialize;

use crate::error::OpsError;

/// Addresses of the deployed contracts managed by this tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractAddresses {
    pub config_storage: Address,
    pub oracle_middleware: Address,
    pub trade_helper: Address,
    /// Multisig wallet that owns the privileged admin functions.
    pub multisig: Address,
}

/// Per-chain deployment record.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub rpc_url: String,
    pub contracts: ContractAddresses,
    /// Market status updater bot; default grantee for oracle updater permission.
    pub bot_handler: Address,
}

/// All known deployments, keyed by chain id.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct NetworkRegistry {
    networks: HashMap<u64, NetworkConfig>,
}

impl NetworkRegistry {
    /// Load the registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OpsError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            OpsError::Config(format!(
                "cannot read network registry {}: {e}",
                path.as_ref().display()
            ))
        })?;
        let registry: NetworkRegistry = serde_json::from_str(&raw)?;
        Ok(registry)
    }

    pub fn get(&self, chain_id: u64) -> Result<&NetworkConfig, OpsError> {
        self.networks
            .get(&chain_id)
            .ok_or(OpsError::UnknownNetwork(chain_id))
    }
}

/// Resolve the deployer private key from the environment.
pub fn signer_key_from_env() -> Result<String, OpsError> {
    std::env::var("PRIVATE_KEY")
        .map_err(|_| OpsError::Config("PRIVATE_KEY is not set".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY_JSON: &str = r#"
    {
        "31337": {
            "chain_id": 31337,
            "rpc_url": "http://localhost:8545",
            "contracts": {
                "config_storage": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "oracle_middleware": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512",
                "trade_helper": "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0",
                "multisig": "0xCf7Ed3AccA5a467e9e704C703E8D87F634fB0Fc9"
            },
            "bot_handler": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
        }
    }
    "#;

    #[test]
    fn test_parse_registry() {
        let registry: NetworkRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        let network = registry.get(31337).unwrap();
        assert_eq!(network.chain_id, 31337);
        assert_eq!(network.rpc_url, "http://localhost:8545");
        assert_eq!(
            network.contracts.config_storage,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .parse::<Address>()
                .unwrap()
        );
    }

    #[test]
    fn test_unknown_chain() {
        let registry: NetworkRegistry = serde_json::from_str(REGISTRY_JSON).unwrap();
        let err = registry.get(42161).unwrap_err();
        assert!(matches!(err, OpsError::UnknownNetwork(42161)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("perp-ops-registry-test.json");
        std::fs::write(&path, REGISTRY_JSON).unwrap();
        let registry = NetworkRegistry::load(&path).unwrap();
        assert!(registry.get(31337).is_ok());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let result = NetworkRegistry::load("/does/not/exist.json");
        assert!(result.is_err());
    }
}
