//! Deposit fee handlers.

use common::access::{execute_rescue, validate_role_address};
use common::{guard, AssetInfo, ACCESS_CONTROL};
use cosmwasm_std::{Coin, DepsMut, Env, Event, MessageInfo, Response, StdError, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Fail unless exactly the configured fee was attached in the fee denom.
pub(crate) fn assert_fee_paid(config: &Config, funds: &[Coin]) -> Result<(), ContractError> {
    let mut paid = Uint128::zero();
    for coin in funds {
        if coin.denom != config.fee_denom {
            return Err(ContractError::UnexpectedFunds {
                denom: coin.denom.clone(),
            });
        }
        paid = paid.checked_add(coin.amount).map_err(StdError::from)?;
    }

    if paid != config.fee {
        return Err(ContractError::IncorrectFee {
            expected: config.fee,
            got: paid,
        });
    }
    Ok(())
}

pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if fee > config.max_fee {
        return Err(ContractError::FeeExceedsMaxFee {
            fee,
            max_fee: config.max_fee,
        });
    }
    config.fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee")
        .add_event(Event::new("fee_updated").add_attribute("fee", fee.to_string())))
}

pub fn execute_set_max_fee(
    deps: DepsMut,
    info: MessageInfo,
    max_fee: Uint128,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if config.fee > max_fee {
        return Err(ContractError::FeeExceedsMaxFee {
            fee: config.fee,
            max_fee,
        });
    }
    config.max_fee = max_fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_max_fee")
        .add_event(Event::new("max_fee_updated").add_attribute("max_fee", max_fee.to_string())))
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_owner(&info.sender)?;

    let recipient = validate_role_address(deps.api, &recipient)?;
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.fee_denom)?;
    if balance.amount.is_zero() {
        return Err(ContractError::NothingToWithdraw);
    }

    guard::enter(deps.storage)?;
    let msg = AssetInfo::Native {
        denom: config.fee_denom,
    }
    .transfer_msg(&recipient, balance.amount)?;

    Ok(Response::new()
        .add_submessage(guard::guarded(msg))
        .add_attribute("method", "withdraw")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", balance.amount.to_string()))
}

/// Rescue that leaves collected fees to `Withdraw`.
///
/// Authorization: Rescuer only
pub fn execute_rescue_non_fee(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let access = ACCESS_CONTROL.load(deps.storage)?;
    access.assert_rescuer(&info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if let AssetInfo::Native { denom } = &asset {
        if *denom == config.fee_denom {
            return Err(ContractError::FeeDenomNotRescuable {
                denom: denom.clone(),
            });
        }
    }

    Ok(execute_rescue(deps, &info, asset, recipient, amount)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{coin, Addr};

    fn config(fee: u128) -> Config {
        Config {
            local_domain: 1,
            nonce_manager: Addr::unchecked("nonces"),
            fee_denom: "uluna".to_string(),
            fee: Uint128::new(fee),
            max_fee: Uint128::new(1_000),
            enforce_accepted_tokens: false,
        }
    }

    #[test]
    fn test_zero_fee_requires_no_funds() {
        assert!(assert_fee_paid(&config(0), &[]).is_ok());

        let err = assert_fee_paid(&config(0), &[coin(1, "uluna")]).unwrap_err();
        assert_eq!(
            err,
            ContractError::IncorrectFee {
                expected: Uint128::zero(),
                got: Uint128::one(),
            }
        );
    }

    #[test]
    fn test_fee_must_match_exactly() {
        let config = config(100);
        assert!(assert_fee_paid(&config, &[coin(100, "uluna")]).is_ok());
        assert!(assert_fee_paid(&config, &[coin(99, "uluna")]).is_err());
        assert!(assert_fee_paid(&config, &[coin(101, "uluna")]).is_err());
        assert!(assert_fee_paid(&config, &[]).is_err());
    }

    #[test]
    fn test_other_denoms_rejected() {
        let err =
            assert_fee_paid(&config(100), &[coin(100, "uluna"), coin(5, "uusd")]).unwrap_err();
        assert_eq!(
            err,
            ContractError::UnexpectedFunds {
                denom: "uusd".to_string()
            }
        );
    }
}
