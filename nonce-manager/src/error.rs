use common::AccessError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    #[error("Local messenger already set")]
    LocalMessengerAlreadySet,

    #[error("No local messenger set")]
    NoLocalMessenger,

    #[error("Invalid nonce: expected {expected}, got {got}")]
    NonceMismatch { expected: u64, got: u64 },

    #[error("Nonce space exhausted")]
    NonceOverflow,
}
