//! Token Minter - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use common::access::{
    execute_accept_ownership, execute_pause, execute_rescue, execute_transfer_ownership,
    execute_unpause, execute_update_pauser, execute_update_rescuer,
    execute_update_token_controller, init_access_control, validate_role_address,
};
use common::guard::{self, GUARD_REPLY_ID};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_local_messenger, execute_burn, execute_link_token_pair,
    execute_remove_local_messenger, execute_set_max_burn_amount, execute_unlink_token_pair,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_burn_limit, query_burn_limits, query_local_messenger, query_local_token, query_roles,
};
use crate::state::{BURN_REPLY_ID, CONTRACT_NAME, CONTRACT_VERSION};

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

    let owner = match msg.owner {
        Some(owner) => validate_role_address(deps.api, &owner)?,
        None => info.sender,
    };
    let access = init_access_control(
        deps,
        owner,
        msg.pauser,
        msg.rescuer,
        msg.token_controller,
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", access.owner))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Burn { token, amount } => execute_burn(deps, info, token, amount),

        // Local messenger binding
        ExecuteMsg::AddLocalMessenger { messenger } => {
            execute_add_local_messenger(deps, info, messenger)
        }
        ExecuteMsg::RemoveLocalMessenger {} => execute_remove_local_messenger(deps, info),

        // Token controller
        ExecuteMsg::SetMaxBurnAmountPerMessage { token, amount } => {
            execute_set_max_burn_amount(deps, info, token, amount)
        }
        ExecuteMsg::LinkTokenPair {
            local_token,
            remote_domain,
            remote_token,
        } => execute_link_token_pair(deps, info, local_token, remote_domain, remote_token),
        ExecuteMsg::UnlinkTokenPair {
            local_token,
            remote_domain,
            remote_token,
        } => execute_unlink_token_pair(deps, info, local_token, remote_domain, remote_token),

        // Roles
        ExecuteMsg::UpdateTokenController { token_controller } => {
            Ok(execute_update_token_controller(deps, &info, token_controller)?)
        }
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
        } => Ok(execute_rescue(deps, &info, asset, recipient, amount)?),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match (msg.id, msg.result) {
        (BURN_REPLY_ID, SubMsgResult::Err(_)) => Err(ContractError::BurnFailed),
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
        QueryMsg::BurnLimit { token } => to_json_binary(&query_burn_limit(deps, token)?),
        QueryMsg::BurnLimits { start_after, limit } => {
            to_json_binary(&query_burn_limits(deps, start_after, limit)?)
        }
        QueryMsg::LocalMessenger {} => to_json_binary(&query_local_messenger(deps)?),
        QueryMsg::LocalToken {
            remote_domain,
            remote_token,
        } => to_json_binary(&query_local_token(deps, remote_domain, remote_token)?),
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
