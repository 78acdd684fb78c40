//! Execute message handlers for the token messenger.

mod deposit;
mod fee;
mod registry;

pub use deposit::{execute_deposit_for_burn, DepositRequest};
pub use fee::{
    execute_rescue_non_fee, execute_set_fee, execute_set_max_fee, execute_withdraw,
};
pub use registry::{
    execute_add_accepted_token, execute_add_local_minter, execute_add_remote_token_messenger,
    execute_remove_accepted_token, execute_remove_local_minter,
    execute_remove_remote_token_messenger,
};
