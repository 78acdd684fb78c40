//! Registry handlers.
//!
//! This module handles:
//! - Remote token messengers, one per remote domain
//! - The local token minter binding
//! - The accepted-token list

use common::access::validate_role_address;
use common::bytes32::is_zero;
use common::{bytes32_to_hex, try_bytes32, ACCESS_CONTROL};
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{ACCEPTED_TOKENS, CONFIG, LOCAL_MINTER, REMOTE_TOKEN_MESSENGERS};

// ============================================================================
// Remote Token Messengers
// ============================================================================

pub fn execute_add_remote_token_messenger(
    deps: DepsMut,
    info: MessageInfo,
    domain: u32,
    token_messenger: Binary,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if domain == 0 || domain == config.local_domain {
        return Err(ContractError::InvalidDomain { domain });
    }

    let token_messenger =
        try_bytes32(&token_messenger).ok_or(ContractError::InvalidBytes32 {
            field: "token_messenger".to_string(),
            got: token_messenger.len(),
        })?;
    if is_zero(&token_messenger) {
        return Err(ContractError::InvalidRemoteTokenMessenger);
    }

    if REMOTE_TOKEN_MESSENGERS.has(deps.storage, domain) {
        return Err(ContractError::RemoteTokenMessengerAlreadySet { domain });
    }
    REMOTE_TOKEN_MESSENGERS.save(deps.storage, domain, &token_messenger)?;

    Ok(Response::new()
        .add_attribute("method", "add_remote_token_messenger")
        .add_event(
            Event::new("remote_token_messenger_added")
                .add_attribute("domain", domain.to_string())
                .add_attribute("token_messenger", bytes32_to_hex(&token_messenger)),
        ))
}

pub fn execute_remove_remote_token_messenger(
    deps: DepsMut,
    info: MessageInfo,
    domain: u32,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let token_messenger = REMOTE_TOKEN_MESSENGERS
        .may_load(deps.storage, domain)?
        .ok_or(ContractError::NoRemoteTokenMessenger { domain })?;
    REMOTE_TOKEN_MESSENGERS.remove(deps.storage, domain);

    Ok(Response::new()
        .add_attribute("method", "remove_remote_token_messenger")
        .add_event(
            Event::new("remote_token_messenger_removed")
                .add_attribute("domain", domain.to_string())
                .add_attribute("token_messenger", bytes32_to_hex(&token_messenger)),
        ))
}

// ============================================================================
// Local Minter Binding
// ============================================================================

pub fn execute_add_local_minter(
    deps: DepsMut,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    if LOCAL_MINTER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::LocalMinterAlreadySet);
    }

    let minter = validate_role_address(deps.api, &minter)?;
    LOCAL_MINTER.save(deps.storage, &minter)?;

    Ok(Response::new()
        .add_attribute("method", "add_local_minter")
        .add_event(Event::new("local_minter_added").add_attribute("minter", minter)))
}

pub fn execute_remove_local_minter(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let minter = LOCAL_MINTER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoLocalMinter)?;
    LOCAL_MINTER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "remove_local_minter")
        .add_event(Event::new("local_minter_removed").add_attribute("minter", minter)))
}

// ============================================================================
// Accepted Tokens
// ============================================================================

pub fn execute_add_accepted_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let token = deps.api.addr_validate(&token)?;
    if ACCEPTED_TOKENS.has(deps.storage, &token) {
        return Err(ContractError::TokenAlreadyAccepted {
            token: token.into_string(),
        });
    }
    ACCEPTED_TOKENS.save(deps.storage, &token, &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_accepted_token")
        .add_event(Event::new("accepted_token_added").add_attribute("token", token)))
}

pub fn execute_remove_accepted_token(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let token = deps.api.addr_validate(&token)?;
    if !ACCEPTED_TOKENS.has(deps.storage, &token) {
        return Err(ContractError::TokenNotAccepted {
            token: token.into_string(),
        });
    }
    ACCEPTED_TOKENS.remove(deps.storage, &token);

    Ok(Response::new()
        .add_attribute("method", "remove_accepted_token")
        .add_event(Event::new("accepted_token_removed").add_attribute("token", token)))
}
