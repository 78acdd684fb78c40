//! Token Messenger - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Deposit, registry and fee handlers
//! - `query` - Query message handlers

use common::access::{
    execute_accept_ownership, execute_pause, execute_transfer_ownership, execute_unpause,
    execute_update_pauser, execute_update_rescuer, init_access_control, validate_role_address,
};
use common::guard::{self, GUARD_REPLY_ID};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Reply,
    Response, StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_accepted_token, execute_add_local_minter, execute_add_remote_token_messenger,
    execute_deposit_for_burn, execute_remove_accepted_token, execute_remove_local_minter,
    execute_remove_remote_token_messenger, execute_rescue_non_fee, execute_set_fee,
    execute_set_max_fee, execute_withdraw, DepositRequest,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_accepted_token, query_config, query_local_minter, query_remote_token_messenger,
    query_remote_token_messengers, query_roles,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LOCAL_MINTER, TRANSFER_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.local_domain == 0 {
        return Err(ContractError::InvalidDomain {
            domain: msg.local_domain,
        });
    }
    if msg.fee_denom.trim().is_empty() {
        return Err(ContractError::InvalidFeeDenom);
    }

    let owner = match msg.owner {
        Some(owner) => validate_role_address(deps.api, &owner)?,
        None => info.sender,
    };
    let nonce_manager = validate_role_address(deps.api, &msg.nonce_manager)?;

    let config = Config {
        local_domain: msg.local_domain,
        nonce_manager,
        fee_denom: msg.fee_denom,
        fee: Uint128::zero(),
        max_fee: msg.max_fee,
        enforce_accepted_tokens: msg.enforce_accepted_tokens,
    };
    CONFIG.save(deps.storage, &config)?;

    let mut response = Response::new();
    if let Some(minter) = msg.local_minter {
        let minter = validate_role_address(deps.api, &minter)?;
        LOCAL_MINTER.save(deps.storage, &minter)?;
        response =
            response.add_event(Event::new("local_minter_added").add_attribute("minter", minter));
    }

    let access = init_access_control(deps, owner, msg.pauser, msg.rescuer, None)?;

    Ok(response
        .add_attribute("method", "instantiate")
        .add_attribute("owner", access.owner)
        .add_attribute("local_domain", config.local_domain.to_string())
        .add_attribute("nonce_manager", config.nonce_manager))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Deposits
        ExecuteMsg::DepositForBurn {
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
        } => execute_deposit_for_burn(
            deps,
            info,
            DepositRequest {
                amount,
                destination_domain,
                mint_recipient,
                burn_token,
                destination_caller: None,
            },
        ),
        ExecuteMsg::DepositForBurnWithCaller {
            amount,
            destination_domain,
            mint_recipient,
            burn_token,
            destination_caller,
        } => execute_deposit_for_burn(
            deps,
            info,
            DepositRequest {
                amount,
                destination_domain,
                mint_recipient,
                burn_token,
                destination_caller: Some(destination_caller),
            },
        ),

        // Registry
        ExecuteMsg::AddRemoteTokenMessenger {
            domain,
            token_messenger,
        } => execute_add_remote_token_messenger(deps, info, domain, token_messenger),
        ExecuteMsg::RemoveRemoteTokenMessenger { domain } => {
            execute_remove_remote_token_messenger(deps, info, domain)
        }
        ExecuteMsg::AddLocalMinter { minter } => execute_add_local_minter(deps, info, minter),
        ExecuteMsg::RemoveLocalMinter {} => execute_remove_local_minter(deps, info),
        ExecuteMsg::AddAcceptedToken { token } => execute_add_accepted_token(deps, info, token),
        ExecuteMsg::RemoveAcceptedToken { token } => {
            execute_remove_accepted_token(deps, info, token)
        }

        // Fees
        ExecuteMsg::SetFee { fee } => execute_set_fee(deps, info, fee),
        ExecuteMsg::SetMaxFee { max_fee } => execute_set_max_fee(deps, info, max_fee),
        ExecuteMsg::Withdraw { recipient } => execute_withdraw(deps, env, info, recipient),

        // Roles
        ExecuteMsg::UpdatePauser { pauser } => Ok(execute_update_pauser(deps, &info, pauser)?),
        ExecuteMsg::UpdateRescuer { rescuer } => {
            Ok(execute_update_rescuer(deps, &info, rescuer)?)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(execute_transfer_ownership(deps, &info, new_owner)?)
        }
        ExecuteMsg::AcceptOwnership {} => Ok(execute_accept_ownership(deps, &info)?),
        ExecuteMsg::Pause {} => Ok(execute_pause(deps, &info)?),
        ExecuteMsg::Unpause {} => Ok(execute_unpause(deps, &info)?),
        ExecuteMsg::Rescue {
            asset,
            recipient,
            amount,
        } => execute_rescue_non_fee(deps, info, asset, recipient, amount),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (TRANSFER_REPLY_ID, SubMsgResult::Err(_)) => Err(ContractError::TransferFailed),
        (GUARD_REPLY_ID, SubMsgResult::Ok(_)) => {
            guard::release(deps.storage);
            Ok(Response::new())
        }
        (id, _) => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::RemoteTokenMessenger { domain } => {
            to_json_binary(&query_remote_token_messenger(deps, domain)?)
        }
        QueryMsg::RemoteTokenMessengers { start_after, limit } => {
            to_json_binary(&query_remote_token_messengers(deps, start_after, limit)?)
        }
        QueryMsg::LocalMinter {} => to_json_binary(&query_local_minter(deps)?),
        QueryMsg::AcceptedToken { token } => to_json_binary(&query_accepted_token(deps, token)?),
        QueryMsg::Roles {} => to_json_binary(&query_roles(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
