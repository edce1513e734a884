//! Loading and storing 64-bit words in canonical order.

use crate::config::U64_BYTE_LEN;
use crate::word::host::HOST_IS_CANONICAL;
use crate::word::portable;

/// Returns the word encoded in the given bytes.
#[inline]
pub fn load64(src: &[u8; U64_BYTE_LEN]) -> u64 {
    if HOST_IS_CANONICAL {
        u64::from_ne_bytes(*src)
    } else {
        portable::load64(src)
    }
}

/// Writes the byte representation of the given word into `dst`.
#[inline]
pub fn store64(dst: &mut [u8; U64_BYTE_LEN], word: u64) {
    if HOST_IS_CANONICAL {
        *dst = word.to_ne_bytes();
    } else {
        portable::store64(dst, word);
    }
}
