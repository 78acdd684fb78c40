//! Nonce Manager - Entry Points

use common::access::{
    execute_accept_ownership, execute_transfer_ownership, init_access_control,
    validate_role_address,
};
use common::{Role, ACCESS_CONTROL};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, LocalMessengerResponse, MigrateMsg, NonceResponse, QueryMsg,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, LOCAL_MESSENGER, NEXT_NONCE};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => validate_role_address(deps.api, &owner)?,
        None => info.sender,
    };
    let access = init_access_control(deps.branch(), owner, None, None, None)?;

    if let Some(messenger) = msg.local_messenger {
        let messenger = validate_role_address(deps.api, &messenger)?;
        LOCAL_MESSENGER.save(deps.storage, &messenger)?;
    }

    NEXT_NONCE.save(deps.storage, &0u64)?;

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
        ExecuteMsg::ReserveNonce { expected } => execute_reserve_nonce(deps, info, expected),
        ExecuteMsg::AddLocalMessenger { messenger } => {
            execute_add_local_messenger(deps, info, messenger)
        }
        ExecuteMsg::RemoveLocalMessenger {} => execute_remove_local_messenger(deps, info),
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(execute_transfer_ownership(deps, &info, new_owner)?)
        }
        ExecuteMsg::AcceptOwnership {} => Ok(execute_accept_ownership(deps, &info)?),
    }
}

/// Hand out the current counter value and advance it by one.
pub fn execute_reserve_nonce(
    deps: DepsMut,
    info: MessageInfo,
    expected: Option<u64>,
) -> Result<Response, ContractError> {
    let messenger = LOCAL_MESSENGER.may_load(deps.storage)?;
    if messenger.as_ref() != Some(&info.sender) {
        return Err(common::AccessError::Unauthorized {
            role: Role::LocalMessenger,
        }
        .into());
    }

    let nonce = NEXT_NONCE.load(deps.storage)?;
    if let Some(expected) = expected {
        if expected != nonce {
            return Err(ContractError::NonceMismatch {
                expected,
                got: nonce,
            });
        }
    }

    let next = nonce.checked_add(1).ok_or(ContractError::NonceOverflow)?;
    NEXT_NONCE.save(deps.storage, &next)?;

    Ok(Response::new()
        .set_data(to_json_binary(&NonceResponse { nonce })?)
        .add_attribute("method", "reserve_nonce")
        .add_attribute("nonce", nonce.to_string()))
}

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
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::NextAvailableNonce {} => to_json_binary(&NonceResponse {
            nonce: NEXT_NONCE.load(deps.storage)?,
        }),
        QueryMsg::LocalMessenger {} => to_json_binary(&LocalMessengerResponse {
            messenger: LOCAL_MESSENGER.may_load(deps.storage)?,
        }),
        QueryMsg::Roles {} => to_json_binary(&ACCESS_CONTROL.load(deps.storage)?),
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

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{from_json, Addr};

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("owner", &[]),
            InstantiateMsg {
                owner: None,
                local_messenger: Some("messenger".to_string()),
            },
        )
        .unwrap();
    }

    fn next_nonce(deps: Deps) -> u64 {
        let res: NonceResponse =
            from_json(query(deps, mock_env(), QueryMsg::NextAvailableNonce {}).unwrap()).unwrap();
        res.nonce
    }

    #[test]
    fn test_reserve_increments_by_one() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        for expected in 0..5u64 {
            let res = execute_reserve_nonce(deps.as_mut(), mock_info("messenger", &[]), None)
                .unwrap();
            let data: NonceResponse = from_json(res.data.unwrap()).unwrap();
            assert_eq!(data.nonce, expected);
            assert_eq!(next_nonce(deps.as_ref()), expected + 1);
        }
    }

    #[test]
    fn test_reserve_rejects_other_callers() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err =
            execute_reserve_nonce(deps.as_mut(), mock_info("owner", &[]), None).unwrap_err();
        assert_eq!(
            err,
            ContractError::Access(common::AccessError::Unauthorized {
                role: Role::LocalMessenger
            })
        );
        assert_eq!(next_nonce(deps.as_ref()), 0);
    }

    #[test]
    fn test_stale_expected_nonce_does_not_advance() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute_reserve_nonce(deps.as_mut(), mock_info("messenger", &[]), Some(0)).unwrap();
        let err = execute_reserve_nonce(deps.as_mut(), mock_info("messenger", &[]), Some(0))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::NonceMismatch {
                expected: 0,
                got: 1
            }
        );
        assert_eq!(next_nonce(deps.as_ref()), 1);
    }

    #[test]
    fn test_local_messenger_singleton() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_add_local_messenger(
            deps.as_mut(),
            mock_info("owner", &[]),
            "other".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::LocalMessengerAlreadySet);

        execute_remove_local_messenger(deps.as_mut(), mock_info("owner", &[])).unwrap();
        let err =
            execute_remove_local_messenger(deps.as_mut(), mock_info("owner", &[])).unwrap_err();
        assert_eq!(err, ContractError::NoLocalMessenger);

        // Nobody may reserve while unbound
        let err = execute_reserve_nonce(deps.as_mut(), mock_info("messenger", &[]), None)
            .unwrap_err();
        assert!(matches!(err, ContractError::Access(_)));

        execute_add_local_messenger(deps.as_mut(), mock_info("owner", &[]), "other".to_string())
            .unwrap();
        let res: LocalMessengerResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::LocalMessenger {}).unwrap())
                .unwrap();
        assert_eq!(res.messenger, Some(Addr::unchecked("other")));
    }

    #[test]
    fn test_binding_is_owner_only() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_remove_local_messenger(deps.as_mut(), mock_info("messenger", &[]))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::Access(common::AccessError::Unauthorized { role: Role::Owner })
        );
    }
}
