//! Compile-time constants describing the supported word widths.

/// Length of an encoded 32-bit word in bytes.
pub const U32_BYTE_LEN: usize = 4;

/// Length of an encoded 48-bit word in bytes.
pub const U48_BYTE_LEN: usize = 6;

/// Length of an encoded 64-bit word in bytes.
pub const U64_BYTE_LEN: usize = 8;

/// The largest value representable in 48 bits.
pub const U48_MAX: u64 = (1 << 48) - 1;
