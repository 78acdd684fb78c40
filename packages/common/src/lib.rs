//! Common - Shared Types and Utilities for the Burn Bridge Contracts
//!
//! This package provides the pieces every bridge contract carries:
//! the role record and its handlers, the reentrancy guard used around
//! value-sending calls, asset transfer helpers and 32-byte identity helpers.

pub mod access;
pub mod asset;
pub mod bytes32;
pub mod guard;

pub use access::{AccessControl, AccessError, Role, ACCESS_CONTROL};
pub use asset::AssetInfo;
pub use bytes32::{bytes32_to_hex, try_bytes32, Bytes32, ZERO_BYTES32};
