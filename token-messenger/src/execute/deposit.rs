//! Deposit-for-burn handler.
//!
//! A deposit is three messages executed in order after all checks pass:
//! 1. CW20 `TransferFrom` depositor -> local minter (remapped on failure)
//! 2. Minter `Burn`
//! 3. Nonce manager `ReserveNonce { expected }`
//!
//! The nonce is read up front so the event can carry it. `expected` makes the
//! reservation fail, and the whole deposit revert, if anything else consumed
//! that nonce in between.

use common::bytes32::is_zero;
use common::{bytes32_to_hex, try_bytes32, Bytes32, ACCESS_CONTROL, ZERO_BYTES32};
use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Event, MessageInfo, Response, SubMsg, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use nonce_manager::msg::{
    ExecuteMsg as NonceExecuteMsg, NonceResponse, QueryMsg as NonceQueryMsg,
};
use token_minter::msg::ExecuteMsg as MinterExecuteMsg;

use crate::error::ContractError;
use crate::execute::fee::assert_fee_paid;
use crate::state::{
    ACCEPTED_TOKENS, CONFIG, LOCAL_MINTER, REMOTE_TOKEN_MESSENGERS, TRANSFER_REPLY_ID,
};

/// Inputs shared by both deposit variants.
pub struct DepositRequest {
    pub amount: Uint128,
    pub destination_domain: u32,
    pub mint_recipient: Binary,
    pub burn_token: String,
    /// `None` lets anyone complete the mint on the destination
    pub destination_caller: Option<Binary>,
}

fn parse_destination_caller(caller: &Binary) -> Result<Bytes32, ContractError> {
    match try_bytes32(caller) {
        Some(caller) if !is_zero(&caller) => Ok(caller),
        _ => Err(ContractError::InvalidDestinationCaller),
    }
}

fn parse_mint_recipient(recipient: &Binary) -> Result<Bytes32, ContractError> {
    let recipient = try_bytes32(recipient).ok_or(ContractError::InvalidBytes32 {
        field: "mint_recipient".to_string(),
        got: recipient.len(),
    })?;
    if is_zero(&recipient) {
        return Err(ContractError::InvalidMintRecipient);
    }
    Ok(recipient)
}

pub fn execute_deposit_for_burn(
    deps: DepsMut,
    info: MessageInfo,
    request: DepositRequest,
) -> Result<Response, ContractError> {
    let destination_caller = match &request.destination_caller {
        Some(caller) => parse_destination_caller(caller)?,
        None => ZERO_BYTES32,
    };

    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_not_paused()?;

    let config = CONFIG.load(deps.storage)?;
    assert_fee_paid(&config, &info.funds)?;

    if request.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let mint_recipient = parse_mint_recipient(&request.mint_recipient)?;

    let destination_domain = request.destination_domain;
    let destination_token_messenger = REMOTE_TOKEN_MESSENGERS
        .may_load(deps.storage, destination_domain)?
        .ok_or(ContractError::NoRemoteTokenMessenger {
            domain: destination_domain,
        })?;

    let minter = LOCAL_MINTER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoLocalMinter)?;

    let burn_token = deps.api.addr_validate(&request.burn_token)?;
    if config.enforce_accepted_tokens && !ACCEPTED_TOKENS.has(deps.storage, &burn_token) {
        return Err(ContractError::TokenNotAccepted {
            token: burn_token.into_string(),
        });
    }

    let NonceResponse { nonce } = deps
        .querier
        .query_wasm_smart(&config.nonce_manager, &NonceQueryMsg::NextAvailableNonce {})?;

    let transfer = WasmMsg::Execute {
        contract_addr: burn_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: minter.to_string(),
            amount: request.amount,
        })?,
        funds: vec![],
    };
    let burn = WasmMsg::Execute {
        contract_addr: minter.to_string(),
        msg: to_json_binary(&MinterExecuteMsg::Burn {
            token: burn_token.to_string(),
            amount: request.amount,
        })?,
        funds: vec![],
    };
    let reserve = WasmMsg::Execute {
        contract_addr: config.nonce_manager.to_string(),
        msg: to_json_binary(&NonceExecuteMsg::ReserveNonce {
            expected: Some(nonce),
        })?,
        funds: vec![],
    };

    let event = Event::new("deposit_for_burn")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("burn_token", burn_token.as_str())
        .add_attribute("amount", request.amount.to_string())
        .add_attribute("depositor", info.sender.as_str())
        .add_attribute("mint_recipient", bytes32_to_hex(&mint_recipient))
        .add_attribute("destination_domain", destination_domain.to_string())
        .add_attribute(
            "destination_token_messenger",
            bytes32_to_hex(&destination_token_messenger),
        )
        .add_attribute("destination_caller", bytes32_to_hex(&destination_caller));

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(transfer, TRANSFER_REPLY_ID))
        .add_message(burn)
        .add_message(reserve)
        .add_event(event)
        .add_attribute("method", "deposit_for_burn")
        .add_attribute("nonce", nonce.to_string())
        .set_data(to_json_binary(&NonceResponse { nonce })?))
}
