//! Loading and storing 48-bit words.
//!
//! No common hardware has a native 48-bit integer type, so there is nothing to
//! reinterpret: both directions always go through the portable byte-by-byte
//! path. Words live in the low 48 bits of a `u64`.

use crate::config::U48_BYTE_LEN;
use crate::word::portable;

/// Returns the 48-bit word encoded in the given bytes.
///
/// The upper 16 bits of the result are always zero.
#[inline]
pub fn load48(src: &[u8; U48_BYTE_LEN]) -> u64 {
    portable::load48(src)
}

/// Writes the low 48 bits of `word` into `dst`.
///
/// Bits 48 and above are silently discarded. Callers that need to reject such
/// values should use `WordEncoder::encode_u48` instead.
#[inline]
pub fn store48(dst: &mut [u8; U48_BYTE_LEN], word: u64) {
    portable::store48(dst, word);
}
