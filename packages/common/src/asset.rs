//! Asset descriptors for native coins and CW20 tokens.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

/// Asset held by a contract: a native denom or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    /// Build the message that moves `amount` of this asset from the calling
    /// contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }),
        };
        Ok(msg)
    }

    pub fn label(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_transfer_msg() {
        let asset = AssetInfo::Native {
            denom: "uluna".to_string(),
        };
        let msg = asset
            .transfer_msg(&Addr::unchecked("recipient"), Uint128::new(7))
            .unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "recipient".to_string(),
                amount: vec![Coin::new(7, "uluna")],
            })
        );
    }

    #[test]
    fn test_cw20_transfer_msg() {
        let asset = AssetInfo::Cw20 {
            contract_addr: "token".to_string(),
        };
        let msg = asset
            .transfer_msg(&Addr::unchecked("recipient"), Uint128::new(3))
            .unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "token");
                assert!(funds.is_empty());
                let parsed: Cw20ExecuteMsg = cosmwasm_std::from_json(msg).unwrap();
                assert_eq!(
                    parsed,
                    Cw20ExecuteMsg::Transfer {
                        recipient: "recipient".to_string(),
                        amount: Uint128::new(3),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(asset.label(), "token");
    }
}
