//! Burn Bridge Nonce Manager
//!
//! Issues the nonce attached to every deposit-for-burn record. The counter
//! starts at 0, moves up by exactly one per reservation and is never reused.
//! Only the registered local messenger may reserve.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
