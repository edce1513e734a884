//! Provides utilities for testing word codec code.

/// Installs a logger so that `RUST_LOG=debug cargo test` shows crate logs.
///
/// Safe to call from every test; only the first call has any effect.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// A few words and their corresponding byte encodings.

pub const U32_ENCODINGS: [(u32, [u8; 4]); 9] = [
    (0, [0, 0, 0, 0]),
    (255, [255, 0, 0, 0]),
    (256, [0, 1, 0, 0]),
    (65535, [255, 255, 0, 0]),
    (65536, [0, 0, 1, 0]),
    (16777215, [255, 255, 255, 0]),
    (16777216, [0, 0, 0, 1]),
    (0x01020304, [0x04, 0x03, 0x02, 0x01]),
    (u32::MAX, [255, 255, 255, 255]),
];

pub const U48_ENCODINGS: [(u64, [u8; 6]); 6] = [
    (0, [0, 0, 0, 0, 0, 0]),
    (1, [1, 0, 0, 0, 0, 0]),
    (0x0100_0000_0000, [0, 0, 0, 0, 0, 1]),
    (0x0102_0304_0506, [0x06, 0x05, 0x04, 0x03, 0x02, 0x01]),
    (0xffff_ffff, [255, 255, 255, 255, 0, 0]),
    (0xffff_ffff_ffff, [255, 255, 255, 255, 255, 255]),
];

pub const U64_ENCODINGS: [(u64, [u8; 8]); 6] = [
    (0, [0, 0, 0, 0, 0, 0, 0, 0]),
    (1, [1, 0, 0, 0, 0, 0, 0, 0]),
    (0x0100_0000_0000_0000, [0, 0, 0, 0, 0, 0, 0, 1]),
    (
        0x0102_0304_0506_0708,
        [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01],
    ),
    (0xffff_ffff, [255, 255, 255, 255, 0, 0, 0, 0]),
    (u64::MAX, [255, 255, 255, 255, 255, 255, 255, 255]),
];
