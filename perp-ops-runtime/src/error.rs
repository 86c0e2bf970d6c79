use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chain {0} not present in network registry")]
    UnknownNetwork(u64),

    #[error("market {market_index}: stored asset id {actual} does not match expected {expected}")]
    AssetIdMismatch {
        market_index: u64,
        expected: String,
        actual: String,
    },

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Transaction reverted: {0}")]
    Reverted(String),

    #[error("Multisig proposal failed: {0}")]
    Proposal(String),
}

impl From<serde_json::Error> for OpsError {
    fn from(e: serde_json::Error) -> Self {
        OpsError::Config(e.to_string())
    }
}

impl From<std::io::Error> for OpsError {
    fn from(e: std::io::Error) -> Self {
        OpsError::Config(e.to_string())
    }
}
