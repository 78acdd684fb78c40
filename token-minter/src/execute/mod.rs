//! Execute handlers for the token minter.
//!
//! - `burn` - the burn itself
//! - `config` - local messenger binding, burn limits and token pairs

mod burn;
mod config;

pub use burn::*;
pub use config::*;
