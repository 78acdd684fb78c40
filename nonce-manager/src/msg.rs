use common::AccessControl;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (defaults to the instantiating sender)
    pub owner: Option<String>,
    /// Messenger allowed to reserve nonces, may also be added later
    pub local_messenger: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Reserve the next nonce
    ///
    /// Authorization: Local messenger only
    ///
    /// Returns the reserved nonce as response data (`NonceResponse`).
    /// When `expected` is set the call fails unless it equals the nonce
    /// about to be reserved.
    ReserveNonce { expected: Option<u64> },

    /// Authorization: Owner only
    AddLocalMessenger { messenger: String },

    /// Authorization: Owner only
    RemoveLocalMessenger {},

    /// Authorization: Owner only
    TransferOwnership { new_owner: String },

    /// Authorization: Pending owner only
    AcceptOwnership {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Nonce the next reservation will return
    #[returns(NonceResponse)]
    NextAvailableNonce {},

    #[returns(LocalMessengerResponse)]
    LocalMessenger {},

    #[returns(AccessControl)]
    Roles {},
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct LocalMessengerResponse {
    pub messenger: Option<Addr>,
}
