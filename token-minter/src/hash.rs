//! Keys for remote token pairs.
//!
//! A pair is keyed by `keccak256(remote_domain ‖ remote_token)` where the
//! domain is 4 bytes big-endian and the token is the 32-byte remote identity
//! (36 bytes hashed in total).

use common::Bytes32;
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

pub fn token_pair_key(remote_domain: u32, remote_token: &Bytes32) -> [u8; 32] {
    let mut data = [0u8; 36];
    data[0..4].copy_from_slice(&remote_domain.to_be_bytes());
    data[4..36].copy_from_slice(remote_token);
    keccak256(&data)
}
