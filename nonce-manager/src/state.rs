use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:burn-bridge-nonce-manager";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Next nonce to hand out
pub const NEXT_NONCE: Item<u64> = Item::new("next_nonce");

/// The only caller allowed to reserve nonces
pub const LOCAL_MESSENGER: Item<Addr> = Item::new("local_messenger");
