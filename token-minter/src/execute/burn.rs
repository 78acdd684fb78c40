//! Burn handler.

use common::{AccessError, Role, ACCESS_CONTROL};
use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response, SubMsg, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::limits::check_within_limit;
use crate::state::{BURN_REPLY_ID, LOCAL_MESSENGER};

/// Burn `amount` of `token` out of this contract's own balance.
///
/// The CW20 burn is dispatched as a sub-message; its failure is reported as
/// `BurnFailed` from `reply`.
pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_not_paused()?;

    let messenger = LOCAL_MESSENGER.may_load(deps.storage)?;
    if messenger.as_ref() != Some(&info.sender) {
        return Err(AccessError::Unauthorized {
            role: Role::LocalMessenger,
        }
        .into());
    }

    if amount.is_zero() {
        return Err(ContractError::ZeroBurnAmount);
    }

    let token = deps.api.addr_validate(&token)?;
    check_within_limit(deps.storage, &token, amount)?;

    let burn = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_error(burn, BURN_REPLY_ID))
        .add_attribute("method", "burn")
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string()))
}
