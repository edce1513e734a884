//! Circular bit rotation of fixed-width words.
//!
//! Callers must pass a rotation count `c` with `0 < c < width`. Counts outside
//! that range trip a debug assertion; release builds return an unspecified
//! value instead of panicking.

/// Rotates `word` right by `c` bits.
#[inline]
pub fn rotr32(word: u32, c: u32) -> u32 {
    debug_assert!(c > 0 && c < 32, "rotation count {} out of range", c);
    word.rotate_right(c)
}

/// Rotates `word` right by `c` bits.
#[inline]
pub fn rotr64(word: u64, c: u32) -> u64 {
    debug_assert!(c > 0 && c < 64, "rotation count {} out of range", c);
    word.rotate_right(c)
}

/// Rotates `word` left by `c` bits. Undoes `rotr32(word, c)`.
#[inline]
pub fn rotl32(word: u32, c: u32) -> u32 {
    debug_assert!(c > 0 && c < 32, "rotation count {} out of range", c);
    word.rotate_left(c)
}

/// Rotates `word` left by `c` bits. Undoes `rotr64(word, c)`.
#[inline]
pub fn rotl64(word: u64, c: u32) -> u64 {
    debug_assert!(c > 0 && c < 64, "rotation count {} out of range", c);
    word.rotate_left(c)
}
