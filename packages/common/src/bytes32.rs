//! 32-byte chain-agnostic identities (mint recipients, remote endpoints,
//! destination callers).

pub type Bytes32 = [u8; 32];

/// All-zero identity. As a destination caller it means "any caller".
pub const ZERO_BYTES32: Bytes32 = [0u8; 32];

/// Interpret `value` as exactly 32 bytes.
pub fn try_bytes32(value: &[u8]) -> Option<Bytes32> {
    value.try_into().ok()
}

pub fn is_zero(value: &Bytes32) -> bool {
    value == &ZERO_BYTES32
}

/// Hex form used in event attributes.
pub fn bytes32_to_hex(value: &Bytes32) -> String {
    format!("0x{}", hex::encode(value))
}
