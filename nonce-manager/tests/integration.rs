//! Integration tests for the nonce manager using cw-multi-test.

use cosmwasm_std::{from_json, Addr, Empty};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use nonce_manager::msg::{ExecuteMsg, InstantiateMsg, NonceResponse, QueryMsg};

fn contract_nonce_manager() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        nonce_manager::contract::execute,
        nonce_manager::contract::instantiate,
        nonce_manager::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("owner");

    let code_id = app.store_code(contract_nonce_manager());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: None,
                local_messenger: None,
            },
            &[],
            "nonce-manager",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner,
        contract_addr.clone(),
        &ExecuteMsg::AddLocalMessenger {
            messenger: "messenger".to_string(),
        },
        &[],
    )
    .unwrap();

    (app, contract_addr)
}

#[test]
fn test_nonces_are_sequential_and_unique() {
    let (mut app, contract_addr) = setup();
    let messenger = Addr::unchecked("messenger");

    let mut seen = Vec::new();
    for _ in 0..10 {
        let res = app
            .execute_contract(
                messenger.clone(),
                contract_addr.clone(),
                &ExecuteMsg::ReserveNonce { expected: None },
                &[],
            )
            .unwrap();

        let nonce_attr = res
            .events
            .iter()
            .flat_map(|e| &e.attributes)
            .find(|a| a.key == "nonce")
            .map(|a| a.value.parse::<u64>().unwrap())
            .unwrap();
        seen.push(nonce_attr);
    }

    assert_eq!(seen, (0..10).collect::<Vec<u64>>());

    let next: NonceResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::NextAvailableNonce {})
        .unwrap();
    assert_eq!(next.nonce, 10);
}

#[test]
fn test_reserve_returns_nonce_as_data() {
    let (mut app, contract_addr) = setup();

    let res = app
        .execute_contract(
            Addr::unchecked("messenger"),
            contract_addr,
            &ExecuteMsg::ReserveNonce { expected: Some(0) },
            &[],
        )
        .unwrap();

    let data: NonceResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.nonce, 0);
}

#[test]
fn test_unauthorized_reserve_leaves_counter() {
    let (mut app, contract_addr) = setup();

    let err = app
        .execute_contract(
            Addr::unchecked("intruder"),
            contract_addr.clone(),
            &ExecuteMsg::ReserveNonce { expected: None },
            &[],
        )
        .unwrap_err();
    assert!(
        err.root_cause().to_string().contains("local messenger"),
        "Expected unauthorized error, got: {}",
        err.root_cause()
    );

    let next: NonceResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::NextAvailableNonce {})
        .unwrap();
    assert_eq!(next.nonce, 0);
}
