//! Burn Bridge Token Messenger
//!
//! Entry point for burning a CW20 token locally in exchange for a mint on a
//! remote domain.
//!
//! # Deposit For Burn
//! 1. Depositor grants this contract a CW20 allowance
//! 2. Depositor calls `DepositForBurn` (or `DepositForBurnWithCaller`)
//! 3. The messenger pulls the tokens into the local token minter
//! 4. The minter burns them, checking pause state and the per-message limit
//! 5. The nonce manager reserves the next nonce
//! 6. A `deposit_for_burn` event records the intent for the off-chain relayer
//!
//! Any failing step reverts the whole transaction: no tokens move and no
//! nonce is consumed.
//!
//! # Registry
//! - One remote token messenger (32-byte identity) per remote domain
//! - One local token minter
//! - Optional accepted-token allow-list (reduced configuration)

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
