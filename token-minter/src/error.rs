//! Error types for the token minter

use common::AccessError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Access(#[from] AccessError),

    // ========================================================================
    // Local Messenger Binding
    // ========================================================================
    #[error("Local messenger already set")]
    LocalMessengerAlreadySet,

    #[error("No local messenger set")]
    NoLocalMessenger,

    // ========================================================================
    // Burn
    // ========================================================================
    #[error("Burn amount must be nonzero")]
    ZeroBurnAmount,

    #[error("Burn token not supported: {token}")]
    BurnTokenNotSupported { token: String },

    #[error("Burn amount exceeds per-message limit: limit {limit}, requested {amount}")]
    BurnAmountExceedsLimit { limit: Uint128, amount: Uint128 },

    #[error("Burn operation failed")]
    BurnFailed,

    // ========================================================================
    // Token Pairs
    // ========================================================================
    #[error("Invalid remote domain: {domain}")]
    InvalidDomain { domain: u32 },

    #[error("Invalid {field}: expected 32 bytes, got {got}")]
    InvalidBytes32 { field: String, got: usize },

    #[error("Token pair already linked")]
    TokenPairAlreadyLinked,

    #[error("Token pair not linked")]
    TokenPairNotLinked,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
