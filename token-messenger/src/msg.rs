//! Message types for the token messenger

use common::{AccessControl, AssetInfo};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::Config;

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
    /// Domain of this chain, must be nonzero
    pub local_domain: u32,
    /// Nonce manager contract
    pub nonce_manager: String,
    /// Local token minter, may also be added later
    pub local_minter: Option<String>,
    /// Native denom deposit fees are paid in
    pub fee_denom: String,
    /// Upper bound for the deposit fee. The fee itself starts at zero.
    pub max_fee: Uint128,
    /// Require tokens to be explicitly accepted before deposits
    #[serde(default)]
    pub enforce_accepted_tokens: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposits
    // ========================================================================
    /// Burn `amount` of `burn_token` here to mint on `destination_domain`
    ///
    /// The depositor must have granted this contract a CW20 allowance of at
    /// least `amount`. Exactly the configured fee must be attached.
    DepositForBurn {
        amount: Uint128,
        destination_domain: u32,
        /// 32-byte recipient identity on the destination domain
        mint_recipient: Binary,
        burn_token: String,
    },

    /// Same as `DepositForBurn`, restricting who may complete the mint
    DepositForBurnWithCaller {
        amount: Uint128,
        destination_domain: u32,
        mint_recipient: Binary,
        burn_token: String,
        /// 32-byte identity of the only caller allowed on the destination
        destination_caller: Binary,
    },

    // ========================================================================
    // Registry
    // ========================================================================
    /// Register the token messenger of a remote domain
    ///
    /// Authorization: Owner only
    AddRemoteTokenMessenger {
        domain: u32,
        /// 32-byte messenger identity on `domain`
        token_messenger: Binary,
    },

    /// Authorization: Owner only
    RemoveRemoteTokenMessenger { domain: u32 },

    /// Authorization: Owner only. Fails if a minter is already set.
    AddLocalMinter { minter: String },

    /// Authorization: Owner only. Fails if no minter is set.
    RemoveLocalMinter {},

    /// Authorization: Owner only
    AddAcceptedToken { token: String },

    /// Authorization: Owner only
    RemoveAcceptedToken { token: String },

    // ========================================================================
    // Fees
    // ========================================================================
    /// Authorization: Owner only. Must not exceed the max fee.
    SetFee { fee: Uint128 },

    /// Authorization: Owner only. Must not be below the current fee.
    SetMaxFee { max_fee: Uint128 },

    /// Send the whole fee-denom balance to `recipient`
    ///
    /// Authorization: Owner only
    Withdraw { recipient: String },

    // ========================================================================
    // Roles
    // ========================================================================
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

    /// Recover assets held by this contract. Collected fees are excluded
    /// and only leave through `Withdraw`.
    ///
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
    #[returns(Config)]
    Config {},

    #[returns(RemoteTokenMessengerResponse)]
    RemoteTokenMessenger { domain: u32 },

    /// Registered remote messengers ordered by domain
    #[returns(RemoteTokenMessengersResponse)]
    RemoteTokenMessengers {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(LocalMinterResponse)]
    LocalMinter {},

    #[returns(AcceptedTokenResponse)]
    AcceptedToken { token: String },

    #[returns(AccessControl)]
    Roles {},
}

#[cw_serde]
pub struct RemoteTokenMessengerResponse {
    pub domain: u32,
    pub token_messenger: Option<Binary>,
}

#[cw_serde]
pub struct RemoteTokenMessengerEntry {
    pub domain: u32,
    pub token_messenger: Binary,
}

#[cw_serde]
pub struct RemoteTokenMessengersResponse {
    pub messengers: Vec<RemoteTokenMessengerEntry>,
}

#[cw_serde]
pub struct LocalMinterResponse {
    pub minter: Option<Addr>,
}

#[cw_serde]
pub struct AcceptedTokenResponse {
    pub token: Addr,
    pub accepted: bool,
}
