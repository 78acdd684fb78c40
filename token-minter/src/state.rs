//! State definitions for the token minter

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:burn-bridge-token-minter";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the CW20 burn dispatched by `Burn`
pub const BURN_REPLY_ID: u64 = 1;

/// The token messenger allowed to call `Burn`
pub const LOCAL_MESSENGER: Item<Addr> = Item::new("local_messenger");

/// Maximum amount burnable in one message, per CW20 token.
/// Missing or zero means the token is not supported.
pub const BURN_LIMITS: Map<&Addr, Uint128> = Map::new("burn_limits");

/// Remote token pairs
/// Key: token_pair_key(remote_domain, remote_token), Value: local CW20 token
pub const LOCAL_TOKENS: Map<&[u8], Addr> = Map::new("local_tokens");
