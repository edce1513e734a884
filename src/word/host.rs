//! Knowledge about the host's native byte order.
//!
//! The canonical wire order used throughout this crate is little-endian:
//! byte 0 of a buffer holds the least-significant 8 bits of the word. When the
//! host stores integers the same way, a word can be read or written by
//! reinterpreting its bytes directly. Otherwise every byte is moved
//! explicitly, see the `portable` module.

/// Whether the host's native integer layout matches the canonical wire order.
///
/// Resolved at compile time, so branching on it costs nothing at runtime.
pub const HOST_IS_CANONICAL: bool = cfg!(target_endian = "little");
