//! Block cipher traits shared by [SM4](sm4).

pub mod sm4;

pub use sm4::Sm4;

/// A block cipher encrypts and decrypts data in blocks of fixed size.
///
/// No [block mode](https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation)
/// is built on top of this trait: this crate's scope is the single-block
/// SM4 transform plus the ZUC-based [`crate::zuc::eea3`]/[`crate::zuc::eia3`]
/// constructions, not a general-purpose block cipher toolkit.
pub trait BlockCipher:
    BlockEncrypt<Block = Self::CipherBlock, Key = Self::CipherKey>
    + BlockDecrypt<Block = Self::CipherBlock, Key = Self::CipherKey>
{
    type CipherBlock;
    type CipherKey;
}

/// The encryption half of a [`BlockCipher`].
pub trait BlockEncrypt {
    type Block;
    type Key;

    fn encrypt(&self, block: Self::Block, key: Self::Key) -> Self::Block;
}

/// The decryption half of a [`BlockCipher`].
pub trait BlockDecrypt {
    type Block;
    type Key;

    fn decrypt(&self, block: Self::Block, key: Self::Key) -> Self::Block;
}
