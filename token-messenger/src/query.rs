//! Query handlers for the token messenger.

use common::{AccessControl, ACCESS_CONTROL};
use cosmwasm_std::{Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    AcceptedTokenResponse, LocalMinterResponse, RemoteTokenMessengerEntry,
    RemoteTokenMessengerResponse, RemoteTokenMessengersResponse,
};
use crate::state::{Config, ACCEPTED_TOKENS, CONFIG, LOCAL_MINTER, REMOTE_TOKEN_MESSENGERS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_remote_token_messenger(
    deps: Deps,
    domain: u32,
) -> StdResult<RemoteTokenMessengerResponse> {
    let token_messenger = REMOTE_TOKEN_MESSENGERS
        .may_load(deps.storage, domain)?
        .map(|id| Binary::from(id.to_vec()));
    Ok(RemoteTokenMessengerResponse {
        domain,
        token_messenger,
    })
}

pub fn query_remote_token_messengers(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<RemoteTokenMessengersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let messengers = REMOTE_TOKEN_MESSENGERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (domain, id) = item?;
            Ok(RemoteTokenMessengerEntry {
                domain,
                token_messenger: Binary::from(id.to_vec()),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RemoteTokenMessengersResponse { messengers })
}

pub fn query_local_minter(deps: Deps) -> StdResult<LocalMinterResponse> {
    Ok(LocalMinterResponse {
        minter: LOCAL_MINTER.may_load(deps.storage)?,
    })
}

pub fn query_accepted_token(deps: Deps, token: String) -> StdResult<AcceptedTokenResponse> {
    let token = deps.api.addr_validate(&token)?;
    let accepted = ACCEPTED_TOKENS.has(deps.storage, &token);
    Ok(AcceptedTokenResponse { token, accepted })
}

pub fn query_roles(deps: Deps) -> StdResult<AccessControl> {
    ACCESS_CONTROL.load(deps.storage)
}
