//! Message types for the token minter

use common::{AccessControl, AssetInfo};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (defaults to the instantiating sender)
    pub owner: Option<String>,
    pub pauser: Option<String>,
    pub rescuer: Option<String>,
    pub token_controller: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn `amount` of `token` held by this contract
    ///
    /// Authorization: Local messenger only, not while paused
    Burn { token: String, amount: Uint128 },

    // ========================================================================
    // Local Messenger Binding
    // ========================================================================
    /// Authorization: Owner only. Fails if a messenger is already set.
    AddLocalMessenger { messenger: String },

    /// Authorization: Owner only. Fails if no messenger is set.
    RemoveLocalMessenger {},

    // ========================================================================
    // Token Controller
    // ========================================================================
    /// Set the maximum amount of `token` burnable per message (0 disables)
    ///
    /// Authorization: Token controller only
    SetMaxBurnAmountPerMessage { token: String, amount: Uint128 },

    /// Link a remote token to a local token
    ///
    /// Authorization: Token controller only
    LinkTokenPair {
        local_token: String,
        remote_domain: u32,
        /// 32-byte remote token identity
        remote_token: Binary,
    },

    /// Authorization: Token controller only
    UnlinkTokenPair {
        local_token: String,
        remote_domain: u32,
        remote_token: Binary,
    },

    // ========================================================================
    // Roles
    // ========================================================================
    /// Authorization: Owner only
    UpdateTokenController { token_controller: String },

    /// Authorization: Owner only
    UpdatePauser { pauser: String },

    /// Authorization: Owner only
    UpdateRescuer { rescuer: String },

    /// Authorization: Owner only
    TransferOwnership { new_owner: String },

    /// Authorization: Pending owner only
    AcceptOwnership {},

    /// Authorization: Pauser only
    Pause {},

    /// Authorization: Pauser only
    Unpause {},

    /// Authorization: Rescuer only
    Rescue {
        asset: AssetInfo,
        recipient: String,
        amount: Uint128,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BurnLimitResponse)]
    BurnLimit { token: String },

    /// Paginated list of configured burn limits
    #[returns(BurnLimitsResponse)]
    BurnLimits {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(LocalMessengerResponse)]
    LocalMessenger {},

    /// Local token linked to a remote token, if any
    #[returns(LocalTokenResponse)]
    LocalToken {
        remote_domain: u32,
        remote_token: Binary,
    },

    #[returns(AccessControl)]
    Roles {},
}

#[cw_serde]
pub struct BurnLimitResponse {
    pub token: Addr,
    pub max_burn_amount_per_message: Uint128,
}

#[cw_serde]
pub struct BurnLimitsResponse {
    pub limits: Vec<BurnLimitResponse>,
}

#[cw_serde]
pub struct LocalMessengerResponse {
    pub messenger: Option<Addr>,
}

#[cw_serde]
pub struct LocalTokenResponse {
    pub local_token: Option<Addr>,
}
