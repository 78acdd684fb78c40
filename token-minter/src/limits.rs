//! Per-token burn limits.
//!
//! A limit caps the amount burnable in a single message. A zero or missing
//! limit means the token cannot be burned at all. Limits are only written by
//! the token controller and are overwritten, never accumulated.

use cosmwasm_std::{Addr, Storage, StdResult, Uint128};

use crate::error::ContractError;
use crate::state::BURN_LIMITS;

pub fn burn_limit(storage: &dyn Storage, token: &Addr) -> StdResult<Uint128> {
    Ok(BURN_LIMITS.may_load(storage, token)?.unwrap_or_default())
}

pub fn set_burn_limit(storage: &mut dyn Storage, token: &Addr, limit: Uint128) -> StdResult<()> {
    BURN_LIMITS.save(storage, token, &limit)
}

/// Fails if `token` has no limit or `amount` is above it. Equality passes.
pub fn check_within_limit(
    storage: &dyn Storage,
    token: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let limit = burn_limit(storage, token)?;
    if limit.is_zero() {
        return Err(ContractError::BurnTokenNotSupported {
            token: token.to_string(),
        });
    }
    if amount > limit {
        return Err(ContractError::BurnAmountExceedsLimit { limit, amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_unset_limit_is_unsupported() {
        let storage = MockStorage::new();
        let token = Addr::unchecked("token");

        let err = check_within_limit(&storage, &token, Uint128::new(1)).unwrap_err();
        assert_eq!(
            err,
            ContractError::BurnTokenNotSupported {
                token: "token".to_string()
            }
        );
    }

    #[test]
    fn test_limit_boundaries() {
        let mut storage = MockStorage::new();
        let token = Addr::unchecked("token");
        set_burn_limit(&mut storage, &token, Uint128::new(8)).unwrap();

        assert!(check_within_limit(&storage, &token, Uint128::new(1)).is_ok());
        assert!(check_within_limit(&storage, &token, Uint128::new(8)).is_ok());
        assert_eq!(
            check_within_limit(&storage, &token, Uint128::new(9)).unwrap_err(),
            ContractError::BurnAmountExceedsLimit {
                limit: Uint128::new(8),
                amount: Uint128::new(9),
            }
        );
    }

    #[test]
    fn test_limit_overwrites_and_zero_revokes() {
        let mut storage = MockStorage::new();
        let token = Addr::unchecked("token");

        set_burn_limit(&mut storage, &token, Uint128::new(100)).unwrap();
        set_burn_limit(&mut storage, &token, Uint128::new(10)).unwrap();
        assert_eq!(burn_limit(&storage, &token).unwrap(), Uint128::new(10));
        assert!(check_within_limit(&storage, &token, Uint128::new(11)).is_err());

        set_burn_limit(&mut storage, &token, Uint128::zero()).unwrap();
        assert!(matches!(
            check_within_limit(&storage, &token, Uint128::new(1)),
            Err(ContractError::BurnTokenNotSupported { .. })
        ));
    }
}
