//! Helpers for Debug impls.

use std::fmt::{self, Debug};

pub(crate) struct DebugHexByte(pub u8);

impl Debug for DebugHexByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

/// Show text payloads as a string, anything else as a list of hex bytes.
pub(crate) fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    match std::str::from_utf8(bytes) {
        Ok(s) => write!(f, "{s:?}"),
        Err(_) => f
            .debug_list()
            .entries(bytes.iter().copied().map(DebugHexByte))
            .finish(),
    }
}
