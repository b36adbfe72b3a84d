#![forbid(unsafe_code)]

//! 16-bit attribute name hashing.
//!
//! sdbm-variant accumulation over the ASCII-lowercased bytes of the name.
//! The routing tables are keyed by these hashes; collision-freedom over the
//! recognized name set is asserted by the tests in [`crate::names`].

/// Hash an attribute name. Case-insensitive, pure, total, and identical on
/// every platform (fixed-width wrapping arithmetic, no locale involvement).
#[must_use]
pub fn sdbm16(name: &str) -> u16 {
    let mut hash: u16 = 0;
    for byte in name.bytes() {
        hash = u16::from(byte.to_ascii_lowercase())
            .wrapping_add(hash << 6)
            .wrapping_sub(hash);
    }
    hash
}
