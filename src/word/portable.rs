//! Byte-by-byte word codec that works regardless of host byte order.
//!
//! These functions never reinterpret memory: each byte is shifted into or out
//! of place explicitly, least-significant byte first. The dispatching
//! functions in the parent module fall back to them on hosts whose native
//! order is not the canonical one, and always use them for 48-bit words.

use crate::config::{U32_BYTE_LEN, U48_BYTE_LEN, U64_BYTE_LEN};

/// Assembles a 32-bit word from its canonical encoding.
#[inline]
pub fn load32(src: &[u8; U32_BYTE_LEN]) -> u32 {
    let mut word = 0u32;
    for (i, &byte) in src.iter().enumerate() {
        word |= (byte as u32) << (8 * i);
    }
    word
}

/// Assembles a 48-bit word from its canonical encoding.
///
/// The upper 16 bits of the result are always zero.
#[inline]
pub fn load48(src: &[u8; U48_BYTE_LEN]) -> u64 {
    let mut word = 0u64;
    for (i, &byte) in src.iter().enumerate() {
        word |= (byte as u64) << (8 * i);
    }
    word
}

/// Assembles a 64-bit word from its canonical encoding.
#[inline]
pub fn load64(src: &[u8; U64_BYTE_LEN]) -> u64 {
    let mut word = 0u64;
    for (i, &byte) in src.iter().enumerate() {
        word |= (byte as u64) << (8 * i);
    }
    word
}

/// Writes the canonical encoding of a 32-bit word.
#[inline]
pub fn store32(dst: &mut [u8; U32_BYTE_LEN], word: u32) {
    for (i, byte) in dst.iter_mut().enumerate() {
        *byte = (word >> (8 * i)) as u8;
    }
}

/// Writes the canonical encoding of the low 48 bits of `word`.
///
/// Bits 48 and above are dropped.
#[inline]
pub fn store48(dst: &mut [u8; U48_BYTE_LEN], word: u64) {
    for (i, byte) in dst.iter_mut().enumerate() {
        *byte = (word >> (8 * i)) as u8;
    }
}

/// Writes the canonical encoding of a 64-bit word.
#[inline]
pub fn store64(dst: &mut [u8; U64_BYTE_LEN], word: u64) {
    for (i, byte) in dst.iter_mut().enumerate() {
        *byte = (word >> (8 * i)) as u8;
    }
}
