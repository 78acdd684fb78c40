//! Access control shared by every bridge contract.
//!
//! Each contract keeps one [`AccessControl`] record under the same storage
//! key. The owner is replaced through a two-step transfer; pauser, rescuer and
//! token controller are single addresses replaced only by the owner.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, DepsMut, Event, MessageInfo, Response, StdError, Uint128};
use cw_storage_plus::Item;
use thiserror::Error;

use crate::asset::AssetInfo;
use crate::guard;

// ============================================================================
// Roles & Errors
// ============================================================================

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    Owner,
    PendingOwner,
    Pauser,
    Rescuer,
    TokenController,
    LocalMessenger,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::PendingOwner => "pending owner",
            Role::Pauser => "pauser",
            Role::Rescuer => "rescuer",
            Role::TokenController => "token controller",
            Role::LocalMessenger => "local messenger",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: caller is not the {role}")]
    Unauthorized { role: Role },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Contract is paused")]
    Paused,

    #[error("Reentrant call rejected")]
    ReentrantCall,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}

// ============================================================================
// Role Record
// ============================================================================

#[cw_serde]
pub struct AccessControl {
    pub owner: Addr,
    /// Candidate set by `TransferOwnership`, waiting for `AcceptOwnership`
    pub pending_owner: Option<Addr>,
    pub pauser: Option<Addr>,
    pub rescuer: Option<Addr>,
    pub token_controller: Option<Addr>,
    pub paused: bool,
}

pub const ACCESS_CONTROL: Item<AccessControl> = Item::new("access_control");

fn holds(holder: &Option<Addr>, sender: &Addr) -> bool {
    holder.as_ref() == Some(sender)
}

impl AccessControl {
    pub fn new(owner: Addr) -> Self {
        Self {
            owner,
            pending_owner: None,
            pauser: None,
            rescuer: None,
            token_controller: None,
            paused: false,
        }
    }

    pub fn assert_owner(&self, sender: &Addr) -> Result<(), AccessError> {
        if sender != &self.owner {
            return Err(AccessError::Unauthorized { role: Role::Owner });
        }
        Ok(())
    }

    pub fn assert_pauser(&self, sender: &Addr) -> Result<(), AccessError> {
        if !holds(&self.pauser, sender) {
            return Err(AccessError::Unauthorized { role: Role::Pauser });
        }
        Ok(())
    }

    pub fn assert_rescuer(&self, sender: &Addr) -> Result<(), AccessError> {
        if !holds(&self.rescuer, sender) {
            return Err(AccessError::Unauthorized { role: Role::Rescuer });
        }
        Ok(())
    }

    pub fn assert_token_controller(&self, sender: &Addr) -> Result<(), AccessError> {
        if !holds(&self.token_controller, sender) {
            return Err(AccessError::Unauthorized {
                role: Role::TokenController,
            });
        }
        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<(), AccessError> {
        if self.paused {
            return Err(AccessError::Paused);
        }
        Ok(())
    }
}

/// Validate a role holder address. The empty address is never a valid holder.
pub fn validate_role_address(api: &dyn Api, address: &str) -> Result<Addr, AccessError> {
    if address.trim().is_empty() {
        return Err(AccessError::InvalidAddress {
            reason: "address must not be empty".to_string(),
        });
    }
    Ok(api.addr_validate(address)?)
}

fn validate_optional(api: &dyn Api, address: Option<String>) -> Result<Option<Addr>, AccessError> {
    address
        .map(|a| validate_role_address(api, &a))
        .transpose()
}

/// Build and store the role record at instantiation.
pub fn init_access_control(
    deps: DepsMut,
    owner: Addr,
    pauser: Option<String>,
    rescuer: Option<String>,
    token_controller: Option<String>,
) -> Result<AccessControl, AccessError> {
    let access = AccessControl {
        pauser: validate_optional(deps.api, pauser)?,
        rescuer: validate_optional(deps.api, rescuer)?,
        token_controller: validate_optional(deps.api, token_controller)?,
        ..AccessControl::new(owner)
    };
    ACCESS_CONTROL.save(deps.storage, &access)?;
    Ok(access)
}

fn addr_or_empty(addr: &Option<Addr>) -> String {
    addr.as_ref().map(Addr::to_string).unwrap_or_default()
}

// ============================================================================
// Ownership
// ============================================================================

/// Start a two-step ownership transfer. The current owner keeps full control
/// until the candidate accepts; a later call replaces the candidate.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: &MessageInfo,
    new_owner: String,
) -> Result<Response, AccessError> {
    let mut access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let candidate = validate_role_address(deps.api, &new_owner)?;
    access.pending_owner = Some(candidate.clone());
    ACCESS_CONTROL.save(deps.storage, &access)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_event(
            Event::new("ownership_transfer_started")
                .add_attribute("previous_owner", access.owner)
                .add_attribute("new_owner", candidate),
        ))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: &MessageInfo,
) -> Result<Response, AccessError> {
    let mut access = ACCESS_CONTROL.load(deps.storage)?;
    if !holds(&access.pending_owner, &info.sender) {
        return Err(AccessError::Unauthorized {
            role: Role::PendingOwner,
        });
    }

    let previous = std::mem::replace(&mut access.owner, info.sender.clone());
    access.pending_owner = None;
    ACCESS_CONTROL.save(deps.storage, &access)?;

    Ok(Response::new()
        .add_attribute("method", "accept_ownership")
        .add_event(
            Event::new("ownership_transferred")
                .add_attribute("previous_owner", previous)
                .add_attribute("new_owner", info.sender.as_str()),
        ))
}

// ============================================================================
// Role Updates
// ============================================================================

pub fn execute_update_pauser(
    deps: DepsMut,
    info: &MessageInfo,
    pauser: String,
) -> Result<Response, AccessError> {
    let mut access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let new_pauser = validate_role_address(deps.api, &pauser)?;
    let old = access.pauser.replace(new_pauser.clone());
    ACCESS_CONTROL.save(deps.storage, &access)?;

    Ok(Response::new()
        .add_attribute("method", "update_pauser")
        .add_event(
            Event::new("pauser_changed")
                .add_attribute("old_pauser", addr_or_empty(&old))
                .add_attribute("new_pauser", new_pauser),
        ))
}

pub fn execute_update_rescuer(
    deps: DepsMut,
    info: &MessageInfo,
    rescuer: String,
) -> Result<Response, AccessError> {
    let mut access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let new_rescuer = validate_role_address(deps.api, &rescuer)?;
    let old = access.rescuer.replace(new_rescuer.clone());
    ACCESS_CONTROL.save(deps.storage, &access)?;

    Ok(Response::new()
        .add_attribute("method", "update_rescuer")
        .add_event(
            Event::new("rescuer_changed")
                .add_attribute("old_rescuer", addr_or_empty(&old))
                .add_attribute("new_rescuer", new_rescuer),
        ))
}

pub fn execute_update_token_controller(
    deps: DepsMut,
    info: &MessageInfo,
    token_controller: String,
) -> Result<Response, AccessError> {
    let mut access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let new_controller = validate_role_address(deps.api, &token_controller)?;
    let old = access.token_controller.replace(new_controller.clone());
    ACCESS_CONTROL.save(deps.storage, &access)?;

    Ok(Response::new()
        .add_attribute("method", "update_token_controller")
        .add_event(
            Event::new("token_controller_changed")
                .add_attribute("old_token_controller", addr_or_empty(&old))
                .add_attribute("new_token_controller", new_controller),
        ))
}

// ============================================================================
// Pause / Unpause
// ============================================================================

pub fn execute_pause(deps: DepsMut, info: &MessageInfo) -> Result<Response, AccessError> {
    set_paused(deps, info, true)
}

pub fn execute_unpause(deps: DepsMut, info: &MessageInfo) -> Result<Response, AccessError> {
    set_paused(deps, info, false)
}

fn set_paused(deps: DepsMut, info: &MessageInfo, paused: bool) -> Result<Response, AccessError> {
    let mut access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_pauser(&info.sender)?;

    access.paused = paused;
    ACCESS_CONTROL.save(deps.storage, &access)?;

    let method = if paused { "pause" } else { "unpause" };
    Ok(Response::new()
        .add_attribute("method", method)
        .add_event(Event::new(method).add_attribute("pauser", info.sender.as_str())))
}

// ============================================================================
// Rescue
// ============================================================================

/// Move an asset held by the contract to `recipient`. Rescuer only.
///
/// Runs under the reentrancy guard; the calling contract must route
/// [`guard::GUARD_REPLY_ID`] to [`guard::release`] in its `reply` entry point.
pub fn execute_rescue(
    deps: DepsMut,
    info: &MessageInfo,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, AccessError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_rescuer(&info.sender)?;

    if amount.is_zero() {
        return Err(AccessError::InvalidAmount {
            reason: "rescue amount must be greater than zero".to_string(),
        });
    }

    let recipient_addr = validate_role_address(deps.api, &recipient)?;
    guard::enter(deps.storage)?;

    let msg = asset.transfer_msg(&recipient_addr, amount)?;

    Ok(Response::new()
        .add_submessage(guard::guarded(msg))
        .add_attribute("method", "rescue")
        .add_attribute("asset", asset.label())
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_info};

    fn setup(deps: DepsMut) {
        init_access_control(
            deps,
            Addr::unchecked("owner"),
            Some("pauser".to_string()),
            Some("rescuer".to_string()),
            None,
        )
        .unwrap();
    }

    #[test]
    fn test_two_step_ownership() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        execute_transfer_ownership(deps.as_mut(), &mock_info("owner", &[]), "alice".to_string())
            .unwrap();
        // Replace the candidate before acceptance
        execute_transfer_ownership(deps.as_mut(), &mock_info("owner", &[]), "bob".to_string())
            .unwrap();

        let access = ACCESS_CONTROL.load(deps.as_ref().storage).unwrap();
        assert_eq!(access.owner, Addr::unchecked("owner"));
        assert_eq!(access.pending_owner, Some(Addr::unchecked("bob")));

        let err = execute_accept_ownership(deps.as_mut(), &mock_info("alice", &[])).unwrap_err();
        assert_eq!(
            err,
            AccessError::Unauthorized {
                role: Role::PendingOwner
            }
        );

        execute_accept_ownership(deps.as_mut(), &mock_info("bob", &[])).unwrap();
        let access = ACCESS_CONTROL.load(deps.as_ref().storage).unwrap();
        assert_eq!(access.owner, Addr::unchecked("bob"));
        assert!(access.pending_owner.is_none());

        // Old owner lost control
        let err = execute_update_pauser(deps.as_mut(), &mock_info("owner", &[]), "p2".to_string())
            .unwrap_err();
        assert_eq!(err, AccessError::Unauthorized { role: Role::Owner });
    }

    #[test]
    fn test_accept_without_pending_owner() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_accept_ownership(deps.as_mut(), &mock_info("owner", &[])).unwrap_err();
        assert_eq!(
            err,
            AccessError::Unauthorized {
                role: Role::PendingOwner
            }
        );
    }

    #[test]
    fn test_update_roles_reject_empty_address() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err =
            execute_update_pauser(deps.as_mut(), &mock_info("owner", &[]), "".to_string()).unwrap_err();
        assert!(matches!(err, AccessError::InvalidAddress { .. }));

        let err = execute_update_rescuer(deps.as_mut(), &mock_info("owner", &[]), " ".to_string())
            .unwrap_err();
        assert!(matches!(err, AccessError::InvalidAddress { .. }));
    }

    #[test]
    fn test_pause_requires_pauser() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_pause(deps.as_mut(), &mock_info("owner", &[])).unwrap_err();
        assert_eq!(err, AccessError::Unauthorized { role: Role::Pauser });

        execute_pause(deps.as_mut(), &mock_info("pauser", &[])).unwrap();
        let access = ACCESS_CONTROL.load(deps.as_ref().storage).unwrap();
        assert_eq!(access.assert_not_paused(), Err(AccessError::Paused));

        execute_unpause(deps.as_mut(), &mock_info("pauser", &[])).unwrap();
        let access = ACCESS_CONTROL.load(deps.as_ref().storage).unwrap();
        assert!(access.assert_not_paused().is_ok());
    }

    #[test]
    fn test_rescue_requires_rescuer_and_holds_guard() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        let asset = AssetInfo::Native {
            denom: "uluna".to_string(),
        };

        let err = execute_rescue(
            deps.as_mut(),
            &mock_info("owner", &[]),
            asset.clone(),
            "recipient".to_string(),
            Uint128::new(5),
        )
        .unwrap_err();
        assert_eq!(err, AccessError::Unauthorized { role: Role::Rescuer });

        let res = execute_rescue(
            deps.as_mut(),
            &mock_info("rescuer", &[]),
            asset.clone(),
            "recipient".to_string(),
            Uint128::new(5),
        )
        .unwrap();
        assert_eq!(res.messages.len(), 1);
        assert!(guard::is_entered(deps.as_ref().storage).unwrap());

        // Nested entry before the reply released the guard
        let err = execute_rescue(
            deps.as_mut(),
            &mock_info("rescuer", &[]),
            asset,
            "recipient".to_string(),
            Uint128::new(5),
        )
        .unwrap_err();
        assert_eq!(err, AccessError::ReentrantCall);
    }

    #[test]
    fn test_token_controller_update_is_owner_only() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute_update_token_controller(
            deps.as_mut(),
            &mock_info("pauser", &[]),
            "controller".to_string(),
        )
        .unwrap_err();
        assert_eq!(err, AccessError::Unauthorized { role: Role::Owner });

        execute_update_token_controller(
            deps.as_mut(),
            &mock_info("owner", &[]),
            "controller".to_string(),
        )
        .unwrap();
        let access = ACCESS_CONTROL.load(deps.as_ref().storage).unwrap();
        assert!(access
            .assert_token_controller(&Addr::unchecked("controller"))
            .is_ok());
    }
}
