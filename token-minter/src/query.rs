//! Query handlers for the token minter.

use common::{AccessControl, ACCESS_CONTROL};
use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::execute::parse_remote_token;
use crate::hash::token_pair_key;
use crate::limits::burn_limit;
use crate::msg::{
    BurnLimitResponse, BurnLimitsResponse, LocalMessengerResponse, LocalTokenResponse,
};
use crate::state::{BURN_LIMITS, LOCAL_MESSENGER, LOCAL_TOKENS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

pub fn query_burn_limit(deps: Deps, token: String) -> StdResult<BurnLimitResponse> {
    let token = deps.api.addr_validate(&token)?;
    let max_burn_amount_per_message = burn_limit(deps.storage, &token)?;
    Ok(BurnLimitResponse {
        token,
        max_burn_amount_per_message,
    })
}

pub fn query_burn_limits(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BurnLimitsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(|addr| Bound::exclusive(addr));

    let limits = BURN_LIMITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (token, max_burn_amount_per_message) = item?;
            Ok(BurnLimitResponse {
                token,
                max_burn_amount_per_message,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BurnLimitsResponse { limits })
}

pub fn query_local_messenger(deps: Deps) -> StdResult<LocalMessengerResponse> {
    Ok(LocalMessengerResponse {
        messenger: LOCAL_MESSENGER.may_load(deps.storage)?,
    })
}

pub fn query_local_token(
    deps: Deps,
    remote_domain: u32,
    remote_token: Binary,
) -> StdResult<LocalTokenResponse> {
    let remote = parse_remote_token(remote_domain, &remote_token)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let key = token_pair_key(remote_domain, &remote);
    Ok(LocalTokenResponse {
        local_token: LOCAL_TOKENS.may_load(deps.storage, &key)?,
    })
}

pub fn query_roles(deps: Deps) -> StdResult<AccessControl> {
    ACCESS_CONTROL.load(deps.storage)
}
