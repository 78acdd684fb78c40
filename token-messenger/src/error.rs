//! Error types for the token messenger

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
    // Validation Errors
    // ========================================================================
    #[error("Amount must be nonzero")]
    ZeroAmount,

    #[error("Mint recipient must be nonzero")]
    InvalidMintRecipient,

    #[error("Invalid destination caller")]
    InvalidDestinationCaller,

    #[error("Invalid {field}: expected 32 bytes, got {got}")]
    InvalidBytes32 { field: String, got: usize },

    #[error("Invalid domain: {domain}")]
    InvalidDomain { domain: u32 },

    #[error("Remote token messenger must be nonzero")]
    InvalidRemoteTokenMessenger,

    #[error("Fee denom must not be empty")]
    InvalidFeeDenom,

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("No remote token messenger set for domain {domain}")]
    NoRemoteTokenMessenger { domain: u32 },

    #[error("Remote token messenger already set for domain {domain}")]
    RemoteTokenMessengerAlreadySet { domain: u32 },

    #[error("Local minter already set")]
    LocalMinterAlreadySet,

    #[error("No local minter set")]
    NoLocalMinter,

    #[error("Token not accepted: {token}")]
    TokenNotAccepted { token: String },

    #[error("Token already accepted: {token}")]
    TokenAlreadyAccepted { token: String },

    // ========================================================================
    // Fee Errors
    // ========================================================================
    #[error("Incorrect fee: expected {expected}, got {got}")]
    IncorrectFee { expected: Uint128, got: Uint128 },

    #[error("Unexpected funds in {denom}")]
    UnexpectedFunds { denom: String },

    #[error("Fee {fee} exceeds max fee {max_fee}")]
    FeeExceedsMaxFee { fee: Uint128, max_fee: Uint128 },

    #[error("Nothing to withdraw")]
    NothingToWithdraw,

    #[error("Fee denom {denom} cannot be rescued, use Withdraw")]
    FeeDenomNotRescuable { denom: String },

    // ========================================================================
    // External Call Errors
    // ========================================================================
    #[error("Transfer operation failed")]
    TransferFailed,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
