//! Byte-order-agnostic word codec and rotation primitives.
//!
//! Cryptographic permutations such as the BLAKE2 compression function are
//! defined over byte strings, but mix fixed-width integers. This crate converts
//! between the two identically on every host: a word is always encoded
//! least-significant byte first, whatever the machine's native layout.
//!
//! ```
//! use wordcodec::{load64, rotr64, store64};
//!
//! let mut bytes = [0u8; 8];
//! store64(&mut bytes, 0x0100_0000_0000_0001);
//! assert_eq!(bytes, [1, 0, 0, 0, 0, 0, 0, 1]);
//! assert_eq!(rotr64(load64(&bytes), 1), 0x8080_0000_0000_0000);
//! ```

pub mod config;
mod word;

#[cfg(test)]
mod testing;

pub use crate::config::{U32_BYTE_LEN, U48_BYTE_LEN, U48_MAX, U64_BYTE_LEN};
pub use crate::word::*;
