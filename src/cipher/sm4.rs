//! SM4 block cipher, GB/T 32907-2016.
//!
//! SM4 operates on 128-bit blocks with a 128-bit key, as a 32-round
//! unbalanced Feistel network over four 32-bit words. Each round mixes one
//! word through a byte-oriented S-box substitution followed by a linear
//! diffusion layer; the key schedule runs the same substitution through a
//! different linear layer to expand the master key into 32 round keys.

use crate::cipher::{BlockCipher, BlockDecrypt, BlockEncrypt};
use docext::docext;

/// SM4 S-box, GB/T 32907 §5.2 table 1 (row-major, 16x16).
#[rustfmt::skip]
const SBOX: [u8; 256] = [
    0xd6, 0x90, 0xe9, 0xfe, 0xcc, 0xe1, 0x3d, 0xb7, 0x16, 0xb6, 0x14, 0xc2, 0x28, 0xfb, 0x2c, 0x05,
    0x2b, 0x67, 0x9a, 0x76, 0x2a, 0xbe, 0x04, 0xc3, 0xaa, 0x44, 0x13, 0x26, 0x49, 0x86, 0x06, 0x99,
    0x9c, 0x42, 0x50, 0xf4, 0x91, 0xef, 0x98, 0x7a, 0x33, 0x54, 0x0b, 0x43, 0xed, 0xcf, 0xac, 0x62,
    0xe4, 0xb3, 0x1c, 0xa9, 0xc9, 0x08, 0xe8, 0x95, 0x80, 0xdf, 0x94, 0xfa, 0x75, 0x8f, 0x3f, 0xa6,
    0x47, 0x07, 0xa7, 0xfc, 0xf3, 0x73, 0x17, 0xba, 0x83, 0x59, 0x3c, 0x19, 0xe6, 0x85, 0x4f, 0xa8,
    0x68, 0x6b, 0x81, 0xb2, 0x71, 0x64, 0xda, 0x8b, 0xf8, 0xeb, 0x0f, 0x4b, 0x70, 0x56, 0x9d, 0x35,
    0x1e, 0x24, 0x0e, 0x5e, 0x63, 0x58, 0xd1, 0xa2, 0x25, 0x22, 0x7c, 0x3b, 0x01, 0x21, 0x78, 0x87,
    0xd4, 0x00, 0x46, 0x57, 0x9f, 0xd3, 0x27, 0x52, 0x4c, 0x36, 0x02, 0xe7, 0xa0, 0xc4, 0xc8, 0x9e,
    0xea, 0xbf, 0x8a, 0xd2, 0x40, 0xc7, 0x38, 0xb5, 0xa3, 0xf7, 0xf2, 0xce, 0xf9, 0x61, 0x15, 0xa1,
    0xe0, 0xae, 0x5d, 0xa4, 0x9b, 0x34, 0x1a, 0x55, 0xad, 0x93, 0x32, 0x30, 0xf5, 0x8c, 0xb1, 0xe3,
    0x1d, 0xf6, 0xe2, 0x2e, 0x82, 0x66, 0xca, 0x60, 0xc0, 0x29, 0x23, 0xab, 0x0d, 0x53, 0x4e, 0x6f,
    0xd5, 0xdb, 0x37, 0x45, 0xde, 0xfd, 0x8e, 0x2f, 0x03, 0xff, 0x6a, 0x72, 0x6d, 0x6c, 0x5b, 0x51,
    0x8d, 0x1b, 0xaf, 0x92, 0xbb, 0xdd, 0xbc, 0x7f, 0x11, 0xd9, 0x5c, 0x41, 0x1f, 0x10, 0x5a, 0xd8,
    0x0a, 0xc1, 0x31, 0x88, 0xa5, 0xcd, 0x7b, 0xbd, 0x2d, 0x74, 0xd0, 0x12, 0xb8, 0xe5, 0xb4, 0xb0,
    0x89, 0x69, 0x97, 0x4a, 0x0c, 0x96, 0x77, 0x7e, 0x65, 0xb9, 0xf1, 0x09, 0xc5, 0x6e, 0xc6, 0x84,
    0x18, 0xf0, 0x7d, 0xec, 0x3a, 0xdc, 0x4d, 0x20, 0x79, 0xee, 0x5f, 0x3e, 0xd7, 0xcb, 0x39, 0x48,
];

/// Family key, GB/T 32907 §7.1, used to fold the master key into the first
/// four key-schedule words.
const FK: [u32; 4] = [0xa3b1bac6, 0x56aa3350, 0x677d9197, 0xb27022dc];

/// Fixed constants, GB/T 32907 §7.1, `CK[i][j] = (4i + j) * 7 mod 256`.
#[rustfmt::skip]
const CK: [u32; 32] = [
    0x00070e15, 0x1c232a31, 0x383f464d, 0x545b6269,
    0x70777e85, 0x8c939aa1, 0xa8afb6bd, 0xc4cbd2d9,
    0xe0e7eef5, 0xfc030a11, 0x181f262d, 0x343b4249,
    0x50575e65, 0x6c737a81, 0x888f969d, 0xa4abb2b9,
    0xc0c7ced5, 0xdce3eaf1, 0xf8ff060d, 0x141b2229,
    0x30373e45, 0x4c535a61, 0x686f767d, 0x848b9299,
    0xa0a7aeb5, 0xbcc3cad1, 0xd8dfe6ed, 0xf4fb0209,
    0x10171e25, 0x2c333a41, 0x484f565d, 0x646b7279,
];

fn tau(word: u32) -> u32 {
    let bytes = word.to_be_bytes().map(|b| SBOX[b as usize]);
    u32::from_be_bytes(bytes)
}

/// Linear transform used by the round function: $L(B) = B \oplus (B \lll 2)
/// \oplus (B \lll 10) \oplus (B \lll 18) \oplus (B \lll 24)$.
#[docext]
fn l(b: u32) -> u32 {
    b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
}

/// Linear transform used by the key schedule: $L'(B) = B \oplus (B \lll 13)
/// \oplus (B \lll 23)$.
#[docext]
fn l_prime(b: u32) -> u32 {
    b ^ b.rotate_left(13) ^ b.rotate_left(23)
}

fn t(x: u32) -> u32 {
    l(tau(x))
}

fn t_prime(x: u32) -> u32 {
    l_prime(tau(x))
}

fn words_from_be_bytes(block: [u8; 16]) -> [u32; 4] {
    let mut w = [0u32; 4];
    for i in 0..4 {
        w[i] = u32::from_be_bytes(block[i * 4..i * 4 + 4].try_into().unwrap());
    }
    w
}

fn words_to_be_bytes(words: [u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, word) in words.into_iter().enumerate() {
        out[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// 32 round keys derived from a 128-bit master key.
pub type RoundKeys = [u32; 32];

/// Expand a 128-bit master key into 32 round keys, GB/T 32907 §7.3.
pub fn key_schedule(key: [u8; 16]) -> RoundKeys {
    let mk = words_from_be_bytes(key);
    let mut k = [0u32; 36];
    for i in 0..4 {
        k[i] = mk[i] ^ FK[i];
    }
    for i in 0..32 {
        k[i + 4] = k[i] ^ t_prime(k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]);
    }
    let mut rk = [0u32; 32];
    rk.copy_from_slice(&k[4..36]);
    rk
}

fn crypt_block(block: [u8; 16], round_keys: &RoundKeys) -> [u8; 16] {
    let mut x = [0u32; 36];
    x[..4].copy_from_slice(&words_from_be_bytes(block));
    for i in 0..32 {
        x[i + 4] = x[i] ^ t(x[i + 1] ^ x[i + 2] ^ x[i + 3] ^ round_keys[i]);
    }
    words_to_be_bytes([x[35], x[34], x[33], x[32]])
}

/// SM4 with a fixed 128-bit key.
#[derive(Clone)]
pub struct Sm4 {
    round_keys: RoundKeys,
}

impl Sm4 {
    pub fn new(key: [u8; 16]) -> Self {
        Self {
            round_keys: key_schedule(key),
        }
    }

    pub fn encrypt_block(&self, block: [u8; 16]) -> [u8; 16] {
        crypt_block(block, &self.round_keys)
    }

    pub fn decrypt_block(&self, block: [u8; 16]) -> [u8; 16] {
        let mut reversed = self.round_keys;
        reversed.reverse();
        crypt_block(block, &reversed)
    }
}

impl BlockEncrypt for Sm4 {
    type Block = [u8; 16];
    type Key = ();

    fn encrypt(&self, block: Self::Block, (): Self::Key) -> Self::Block {
        self.encrypt_block(block)
    }
}

impl BlockDecrypt for Sm4 {
    type Block = [u8; 16];
    type Key = ();

    fn decrypt(&self, block: Self::Block, (): Self::Key) -> Self::Block {
        self.decrypt_block(block)
    }
}

impl BlockCipher for Sm4 {
    type CipherBlock = [u8; 16];
    type CipherKey = ();
}
