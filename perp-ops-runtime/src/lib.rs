pub mod admin;
pub mod chain;
pub mod contracts;
pub mod error;
pub mod gateway;
pub mod network;
pub mod records;
pub mod runner;
pub mod safe;

pub use error::OpsError;
pub use runner::{RecordOutcome, Submission};

pub use alloy;
