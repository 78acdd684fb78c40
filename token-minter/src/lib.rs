//! Burn Bridge Token Minter
//!
//! Holds deposited CW20 tokens just long enough to burn them on behalf of
//! the local token messenger.
//!
//! # Burn
//! 1. The messenger moves the depositor's tokens to this contract
//! 2. The messenger calls `Burn { token, amount }`
//! 3. The minter checks pause state, caller and the per-message limit
//! 4. The minter burns `amount` of its own CW20 balance
//!
//! # Roles
//! - Owner: local messenger binding, role updates
//! - Token controller: burn limits and remote token pairs
//! - Pauser: stops all burns
//! - Rescuer: sweeps tokens sent here by mistake

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod limits;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::token_pair_key;
