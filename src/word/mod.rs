mod host;
pub mod portable;
mod rotate;
mod stream;
mod u32;
mod u48;
mod u64;
mod word_codec;

pub use self::host::HOST_IS_CANONICAL;
pub use self::rotate::{rotl32, rotl64, rotr32, rotr64};
pub use self::stream::{ReadWordsExt, WriteWordsExt};
pub use self::u32::{load32, store32};
pub use self::u48::{load48, store48};
pub use self::u64::{load64, store64};
pub use self::word_codec::{
    WordDecode, WordDecodeError, WordDecoder, WordEncode, WordEncodeError, WordEncoder,
};
