//! Configuration handlers.
//!
//! This module handles:
//! - Local messenger binding (owner)
//! - Burn limits (token controller)
//! - Remote token pairs (token controller)

use common::{try_bytes32, Bytes32, ACCESS_CONTROL};
use common::access::validate_role_address;
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::token_pair_key;
use crate::limits::set_burn_limit;
use crate::state::{LOCAL_MESSENGER, LOCAL_TOKENS};

// ============================================================================
// Local Messenger Binding
// ============================================================================

pub fn execute_add_local_messenger(
    deps: DepsMut,
    info: MessageInfo,
    messenger: String,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    if LOCAL_MESSENGER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::LocalMessengerAlreadySet);
    }

    let messenger = validate_role_address(deps.api, &messenger)?;
    LOCAL_MESSENGER.save(deps.storage, &messenger)?;

    Ok(Response::new()
        .add_attribute("method", "add_local_messenger")
        .add_event(Event::new("local_messenger_added").add_attribute("messenger", messenger)))
}

pub fn execute_remove_local_messenger(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let messenger = LOCAL_MESSENGER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoLocalMessenger)?;
    LOCAL_MESSENGER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "remove_local_messenger")
        .add_event(Event::new("local_messenger_removed").add_attribute("messenger", messenger)))
}

// ============================================================================
// Burn Limits
// ============================================================================

pub fn execute_set_max_burn_amount(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_token_controller(&info.sender)?;

    let token = deps.api.addr_validate(&token)?;
    set_burn_limit(deps.storage, &token, amount)?;

    Ok(Response::new()
        .add_attribute("method", "set_max_burn_amount_per_message")
        .add_event(
            Event::new("set_burn_limit")
                .add_attribute("token", token)
                .add_attribute("burn_limit_per_message", amount.to_string()),
        ))
}

// ============================================================================
// Token Pairs
// ============================================================================

pub(crate) fn parse_remote_token(
    remote_domain: u32,
    remote_token: &Binary,
) -> Result<Bytes32, ContractError> {
    if remote_domain == 0 {
        return Err(ContractError::InvalidDomain {
            domain: remote_domain,
        });
    }
    try_bytes32(remote_token).ok_or(ContractError::InvalidBytes32 {
        field: "remote_token".to_string(),
        got: remote_token.len(),
    })
}

pub fn execute_link_token_pair(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    remote_domain: u32,
    remote_token: Binary,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_token_controller(&info.sender)?;

    let remote = parse_remote_token(remote_domain, &remote_token)?;
    let local_token = deps.api.addr_validate(&local_token)?;
    let key = token_pair_key(remote_domain, &remote);

    if LOCAL_TOKENS.has(deps.storage, &key) {
        return Err(ContractError::TokenPairAlreadyLinked);
    }
    LOCAL_TOKENS.save(deps.storage, &key, &local_token)?;

    Ok(Response::new()
        .add_attribute("method", "link_token_pair")
        .add_event(
            Event::new("token_pair_linked")
                .add_attribute("local_token", local_token)
                .add_attribute("remote_domain", remote_domain.to_string())
                .add_attribute("remote_token", common::bytes32_to_hex(&remote)),
        ))
}

pub fn execute_unlink_token_pair(
    deps: DepsMut,
    info: MessageInfo,
    local_token: String,
    remote_domain: u32,
    remote_token: Binary,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_token_controller(&info.sender)?;

    let remote = parse_remote_token(remote_domain, &remote_token)?;
    let local_token = deps.api.addr_validate(&local_token)?;
    let key = token_pair_key(remote_domain, &remote);

    // the pair must point at the named local token
    match LOCAL_TOKENS.may_load(deps.storage, &key)? {
        Some(linked) if linked == local_token => {}
        _ => return Err(ContractError::TokenPairNotLinked),
    }
    LOCAL_TOKENS.remove(deps.storage, &key);

    Ok(Response::new()
        .add_attribute("method", "unlink_token_pair")
        .add_event(
            Event::new("token_pair_unlinked")
                .add_attribute("local_token", local_token)
                .add_attribute("remote_domain", remote_domain.to_string())
                .add_attribute("remote_token", common::bytes32_to_hex(&remote)),
        ))
}
