//! Single-flight guard for handlers that send value out of a contract.
//!
//! The flag is set before the outgoing message is dispatched and cleared in
//! the contract's `reply` entry point once that message succeeded. Any nested
//! call into a guarded handler while the flag is set is rejected. If the
//! outgoing message fails the transaction reverts, flag included.

use cosmwasm_std::{CosmosMsg, StdResult, Storage, SubMsg};
use cw_storage_plus::Item;

use crate::access::AccessError;

/// Reply id every contract routes to [`release`].
pub const GUARD_REPLY_ID: u64 = 0x6775_6172_64;

const ENTERED: Item<bool> = Item::new("reentrancy_guard");

pub fn enter(storage: &mut dyn Storage) -> Result<(), AccessError> {
    if is_entered(storage)? {
        return Err(AccessError::ReentrantCall);
    }
    ENTERED.save(storage, &true)?;
    Ok(())
}

pub fn release(storage: &mut dyn Storage) {
    ENTERED.remove(storage);
}

pub fn is_entered(storage: &dyn Storage) -> StdResult<bool> {
    Ok(ENTERED.may_load(storage)?.unwrap_or(false))
}

/// Wrap a value-sending message so that its success releases the guard.
pub fn guarded(msg: CosmosMsg) -> SubMsg {
    SubMsg::reply_on_success(msg, GUARD_REPLY_ID)
}
