//! Reading and writing words from byte streams.
//!
//! Extends every `io::Read` and `io::Write` with methods that move words in
//! canonical order. Each word goes through a fixed-size buffer and the same
//! `load*`/`store*` functions used everywhere else.

use std::io;

use crate::config::{U32_BYTE_LEN, U48_BYTE_LEN, U64_BYTE_LEN};
use crate::word::word_codec::check_u48;
use crate::word::{load32, load48, load64, store32, store48, store64};

/// Extends `io::Read` with methods for reading canonical words.
pub trait ReadWordsExt: io::Read {
    /// Reads a 32-bit word.
    fn read_word32(&mut self) -> io::Result<u32> {
        let mut bytes = [0u8; U32_BYTE_LEN];
        self.read_exact(&mut bytes)?;
        Ok(load32(&bytes))
    }

    /// Reads a 48-bit word. The upper 16 bits of the result are zero.
    fn read_word48(&mut self) -> io::Result<u64> {
        let mut bytes = [0u8; U48_BYTE_LEN];
        self.read_exact(&mut bytes)?;
        Ok(load48(&bytes))
    }

    /// Reads a 64-bit word.
    fn read_word64(&mut self) -> io::Result<u64> {
        let mut bytes = [0u8; U64_BYTE_LEN];
        self.read_exact(&mut bytes)?;
        Ok(load64(&bytes))
    }
}

impl<R: io::Read + ?Sized> ReadWordsExt for R {}

/// Extends `io::Write` with methods for writing canonical words.
pub trait WriteWordsExt: io::Write {
    /// Writes a 32-bit word.
    fn write_word32(&mut self, word: u32) -> io::Result<()> {
        let mut bytes = [0u8; U32_BYTE_LEN];
        store32(&mut bytes, word);
        self.write_all(&bytes)
    }

    /// Writes a 48-bit word.
    ///
    /// Fails with `InvalidInput` without writing anything if `word` does not
    /// fit in 48 bits.
    fn write_word48(&mut self, word: u64) -> io::Result<()> {
        check_u48(word)?;
        let mut bytes = [0u8; U48_BYTE_LEN];
        store48(&mut bytes, word);
        self.write_all(&bytes)
    }

    /// Writes a 64-bit word.
    fn write_word64(&mut self, word: u64) -> io::Result<()> {
        let mut bytes = [0u8; U64_BYTE_LEN];
        store64(&mut bytes, word);
        self.write_all(&bytes)
    }
}

impl<W: io::Write + ?Sized> WriteWordsExt for W {}
