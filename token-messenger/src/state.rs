//! State definitions for the token messenger

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::Bytes32;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Domain of this chain, never 0
    pub local_domain: u32,
    /// Nonce manager contract issuing deposit nonces
    pub nonce_manager: Addr,
    /// Native denom the per-deposit fee is paid in
    pub fee_denom: String,
    /// Fee required with every deposit (0 = no fee)
    pub fee: Uint128,
    /// Upper bound for `fee`
    pub max_fee: Uint128,
    /// Whether deposits also require the token to be on the accepted list
    pub enforce_accepted_tokens: bool,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:burn-bridge-token-messenger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the CW20 `TransferFrom` pulling the deposit
pub const TRANSFER_REPLY_ID: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Remote token messengers
/// Key: remote domain, Value: 32-byte messenger identity on that domain
pub const REMOTE_TOKEN_MESSENGERS: Map<u32, Bytes32> = Map::new("remote_token_messengers");

/// Local token minter that receives and burns deposits
pub const LOCAL_MINTER: Item<Addr> = Item::new("local_minter");

/// Accepted tokens (consulted only with `enforce_accepted_tokens`)
pub const ACCEPTED_TOKENS: Map<&Addr, bool> = Map::new("accepted_tokens");
