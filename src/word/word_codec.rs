//! This module provides checked decoding and encoding of word sequences.
//!
//! The raw `load*`/`store*` functions take fixed-size arrays and trust their
//! callers. Compression functions usually start from a byte slice instead (a
//! message block, a serialized state), so this module wraps those primitives
//! with a cursor that tracks its position and reports short input as an error.
//!
//! Words are encoded back to back, with no length prefix or padding:
//!
//!   * 32-bit words take 4 bytes, least-significant byte first.
//!   * 48-bit words take 6 bytes, least-significant byte first.
//!   * 64-bit words take 8 bytes, least-significant byte first.
//!   * Arrays, slices and vectors are the concatenation of their elements.

use std::convert::TryInto;
use std::io;

use bytes::BytesMut;
use log::{debug, warn};
use thiserror::Error;

use crate::config::{U32_BYTE_LEN, U48_BYTE_LEN, U48_MAX, U64_BYTE_LEN};
use crate::word::{load32, load48, load64, store32, store48, store64};

#[derive(PartialEq, Error, Debug)]
pub enum WordDecodeError {
    #[error("at position {position}: not enough bytes to decode: expected {expected}, found {remaining}")]
    NotEnoughData {
        /// The number of bytes the decoder expected to read.
        ///
        /// Invariant: `remaining < expected`.
        expected: usize,

        /// The number of bytes remaining in the input buffer.
        ///
        /// Invariant: `remaining < expected`.
        remaining: usize,

        /// The decoder's position in the input buffer.
        position: usize,
    },
    #[error("at position {position}: {remaining} trailing bytes left undecoded")]
    TrailingBytes {
        /// The number of bytes left in the input buffer. Never zero.
        remaining: usize,

        /// The decoder's position in the input buffer.
        position: usize,
    },
}

impl From<WordDecodeError> for io::Error {
    fn from(error: WordDecodeError) -> Self {
        let kind = match &error {
            &WordDecodeError::NotEnoughData { .. } => io::ErrorKind::UnexpectedEof,
            _ => io::ErrorKind::InvalidData,
        };
        let message = format!("{}", &error);
        io::Error::new(kind, message)
    }
}

#[derive(PartialEq, Error, Debug)]
pub enum WordEncodeError {
    #[error("value {value:#x} does not fit in 48 bits")]
    U48OutOfRange {
        /// The rejected value. Always greater than `U48_MAX`.
        value: u64,
    },
}

impl From<WordEncodeError> for io::Error {
    fn from(error: WordEncodeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, format!("{}", error))
    }
}

/// Checks that `word` fits in 48 bits.
pub(crate) fn check_u48(word: u64) -> Result<(), WordEncodeError> {
    if word > U48_MAX {
        return Err(WordEncodeError::U48OutOfRange { value: word });
    }
    Ok(())
}

/// A type for decoding words out of a byte buffer.
pub struct WordDecoder<'a> {
    // The buffer we are decoding from.
    //
    // Invariant: `position <= buffer.len()`.
    buffer: &'a [u8],

    // Our current position within `buffer`. Kept so that errors can say where
    // decoding stopped.
    //
    // Invariant: `position <= buffer.len()`.
    position: usize,
}

/// This trait is implemented by types that can be decoded using a
/// `WordDecoder`.
pub trait WordDecode: Sized {
    /// Attempts to decode a value of this type with the given decoder.
    fn decode_from(decoder: &mut WordDecoder) -> Result<Self, WordDecodeError>;
}

impl<'a> WordDecoder<'a> {
    /// Wraps the given byte buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer: buffer,
            position: 0,
        }
    }

    /// The current position of this decoder in the input buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes remaining to decode.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns whether the underlying buffer has remaining bytes to decode.
    ///
    /// Shorthand for `remaining() > 0`.
    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Returns a read-only view of the remaining bytes to decode.
    ///
    /// The returned slice is of size `remaining()`.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer[self.position..]
    }

    /// Attempts to consume the next `n` bytes from this buffer.
    ///
    /// Returns a slice of size `n` if successful, in which case this decoder
    /// advances its internal position by `n`.
    fn consume(&mut self, n: usize) -> Result<&'a [u8], WordDecodeError> {
        if self.remaining() < n {
            return Err(WordDecodeError::NotEnoughData {
                expected: n,
                remaining: self.remaining(),
                position: self.position,
            });
        }

        let end = self.position + n;
        let bytes = &self.buffer[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Attempts to consume exactly `N` bytes as a fixed-size array.
    fn consume_array<const N: usize>(&mut self) -> Result<&'a [u8; N], WordDecodeError> {
        let bytes = self.consume(N)?;
        // consume() guarantees that the slice is of size N.
        Ok(bytes.try_into().expect("consume() returned wrong length"))
    }

    /// Attempts to decode a 32-bit word.
    pub fn decode_u32(&mut self) -> Result<u32, WordDecodeError> {
        let array = self.consume_array::<U32_BYTE_LEN>()?;
        Ok(load32(array))
    }

    /// Attempts to decode a 48-bit word. The upper 16 bits are always zero.
    pub fn decode_u48(&mut self) -> Result<u64, WordDecodeError> {
        let array = self.consume_array::<U48_BYTE_LEN>()?;
        Ok(load48(array))
    }

    /// Attempts to decode a 64-bit word.
    pub fn decode_u64(&mut self) -> Result<u64, WordDecodeError> {
        let array = self.consume_array::<U64_BYTE_LEN>()?;
        Ok(load64(array))
    }

    /// Attempts to decode a value of the given type.
    ///
    /// Allows easy decoding of complex values using type inference:
    ///
    /// ```
    /// # use wordcodec::WordDecoder;
    /// # let block = [0u8; 128];
    /// let mut decoder = WordDecoder::new(&block);
    /// let words: [u64; 16] = decoder.decode().unwrap();
    /// # assert_eq!(words, [0; 16]);
    /// ```
    ///
    /// On failure, the decoder is left at the position where the value
    /// started.
    pub fn decode<T: WordDecode>(&mut self) -> Result<T, WordDecodeError> {
        let position = self.position;
        match T::decode_from(self) {
            Ok(value) => Ok(value),
            Err(error) => {
                debug!("Failed to decode value at position {}: {}", position, error);
                self.position = position;
                Err(error)
            }
        }
    }

    /// Consumes this decoder, checking that the whole buffer was decoded.
    pub fn finish(self) -> Result<(), WordDecodeError> {
        if self.has_remaining() {
            warn!(
                "Word decoder finished at position {} with {} trailing bytes",
                self.position,
                self.remaining()
            );
            return Err(WordDecodeError::TrailingBytes {
                remaining: self.remaining(),
                position: self.position,
            });
        }
        Ok(())
    }
}

impl WordDecode for u32 {
    fn decode_from(decoder: &mut WordDecoder) -> Result<Self, WordDecodeError> {
        decoder.decode_u32()
    }
}

impl WordDecode for u64 {
    fn decode_from(decoder: &mut WordDecoder) -> Result<Self, WordDecodeError> {
        decoder.decode_u64()
    }
}

impl<T: WordDecode + Copy + Default, const N: usize> WordDecode for [T; N] {
    fn decode_from(decoder: &mut WordDecoder) -> Result<Self, WordDecodeError> {
        let mut words = [T::default(); N];
        for word in words.iter_mut() {
            *word = decoder.decode()?;
        }
        Ok(words)
    }
}

/// A type for encoding words into a growable buffer.
pub struct WordEncoder<'a> {
    inner: &'a mut BytesMut,
}

/// This trait is implemented by types that can be encoded using a
/// `WordEncoder`.
pub trait WordEncode {
    /// Attempts to encode `self` with the given encoder.
    fn encode_to(&self, encoder: &mut WordEncoder) -> Result<(), WordEncodeError>;
}

impl<'a> WordEncoder<'a> {
    /// Wraps the given buffer for encoding words into.
    ///
    /// The buffer is grown as required. Existing contents are left untouched.
    pub fn new(inner: &'a mut BytesMut) -> Self {
        WordEncoder { inner: inner }
    }

    /// Encodes the given 32-bit word.
    pub fn encode_u32(&mut self, word: u32) {
        let mut bytes = [0u8; U32_BYTE_LEN];
        store32(&mut bytes, word);
        self.inner.extend_from_slice(&bytes);
    }

    /// Attempts to encode the given 48-bit word.
    ///
    /// Unlike `store48()`, values that do not fit in 48 bits are rejected and
    /// nothing is written.
    pub fn encode_u48(&mut self, word: u64) -> Result<(), WordEncodeError> {
        check_u48(word)?;
        let mut bytes = [0u8; U48_BYTE_LEN];
        store48(&mut bytes, word);
        self.inner.extend_from_slice(&bytes);
        Ok(())
    }

    /// Encodes the given 64-bit word.
    pub fn encode_u64(&mut self, word: u64) {
        let mut bytes = [0u8; U64_BYTE_LEN];
        store64(&mut bytes, word);
        self.inner.extend_from_slice(&bytes);
    }

    /// Attempts to encode the given value.
    ///
    /// Allows for easy encoding with type inference:
    ///
    /// ```
    /// # use bytes::BytesMut;
    /// # use wordcodec::WordEncoder;
    /// let mut buffer = BytesMut::new();
    /// WordEncoder::new(&mut buffer).encode(&[1u32, 2]).unwrap();
    /// assert_eq!(&buffer[..], &[1, 0, 0, 0, 2, 0, 0, 0]);
    /// ```
    pub fn encode<T: WordEncode + ?Sized>(&mut self, value: &T) -> Result<(), WordEncodeError> {
        value.encode_to(self)
    }
}

impl WordEncode for u32 {
    fn encode_to(&self, encoder: &mut WordEncoder) -> Result<(), WordEncodeError> {
        encoder.encode_u32(*self);
        Ok(())
    }
}

impl WordEncode for u64 {
    fn encode_to(&self, encoder: &mut WordEncoder) -> Result<(), WordEncodeError> {
        encoder.encode_u64(*self);
        Ok(())
    }
}

impl<T: WordEncode> WordEncode for [T] {
    fn encode_to(&self, encoder: &mut WordEncoder) -> Result<(), WordEncodeError> {
        for item in self {
            item.encode_to(encoder)?;
        }
        Ok(())
    }
}

impl<T: WordEncode, const N: usize> WordEncode for [T; N] {
    fn encode_to(&self, encoder: &mut WordEncoder) -> Result<(), WordEncodeError> {
        let slice: &[T] = &self[..];
        slice.encode_to(encoder)
    }
}

impl<T: WordEncode> WordEncode for Vec<T> {
    fn encode_to(&self, encoder: &mut WordEncoder) -> Result<(), WordEncodeError> {
        let slice: &[T] = &*self;
        slice.encode_to(encoder)
    }
}

/*=======*
 * TESTS *
 *=======*/
