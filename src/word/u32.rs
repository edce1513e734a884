//! This module provides base primitives for loading and storing 32-bit words.
//!
//! It mostly centralizes the knowledge that words are encoded least-significant
//! byte first, whatever the host does.

use crate::config::U32_BYTE_LEN;
use crate::word::host::HOST_IS_CANONICAL;
use crate::word::portable;

/// Returns the word encoded in the given bytes.
#[inline]
pub fn load32(src: &[u8; U32_BYTE_LEN]) -> u32 {
    if HOST_IS_CANONICAL {
        u32::from_ne_bytes(*src)
    } else {
        portable::load32(src)
    }
}

/// Writes the byte representation of the given word into `dst`.
#[inline]
pub fn store32(dst: &mut [u8; U32_BYTE_LEN], word: u32) {
    if HOST_IS_CANONICAL {
        *dst = word.to_ne_bytes();
    } else {
        portable::store32(dst, word);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{load32, store32};
    use crate::testing::U32_ENCODINGS;
    use crate::word::portable;

    #[test]
    fn load_vectors() {
        for &(expected, ref bytes) in &U32_ENCODINGS {
            assert_eq!(load32(bytes), expected);
        }
    }

    #[test]
    fn store_vectors() {
        for &(word, ref expected) in &U32_ENCODINGS {
            let mut bytes = [0xa5; 4];
            store32(&mut bytes, word);
            assert_eq!(&bytes, expected);
        }
    }

    #[test]
    fn store_fixed_vector() {
        let mut bytes = [0u8; 4];
        store32(&mut bytes, 0x01020304);
        assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
    }

    proptest! {
        #[test]
        fn load_after_store(word in any::<u32>()) {
            let mut bytes = [0u8; 4];
            store32(&mut bytes, word);
            prop_assert_eq!(load32(&bytes), word);
        }

        #[test]
        fn store_after_load(bytes in any::<[u8; 4]>()) {
            let mut output = [0u8; 4];
            store32(&mut output, load32(&bytes));
            prop_assert_eq!(output, bytes);
        }

        #[test]
        fn agrees_with_portable_path(word in any::<u32>(), bytes in any::<[u8; 4]>()) {
            let mut native = [0u8; 4];
            let mut fallback = [0u8; 4];
            store32(&mut native, word);
            portable::store32(&mut fallback, word);
            prop_assert_eq!(native, fallback);
            prop_assert_eq!(load32(&bytes), portable::load32(&bytes));
        }
    }
}
