//! Chinese GM/T commercial cryptography suite: SM2 (elliptic-curve
//! signatures, encryption, and key exchange), SM3 (hash), SM4 (block
//! cipher), and ZUC (stream cipher, with the 128-EEA3/128-EIA3
//! confidentiality and integrity algorithms built on it).
//!
//! None of these primitives carry a constant-time guarantee: the field,
//! scalar, and point arithmetic in [`ecc`] branches on secret data (most
//! visibly in [`ecc::Point::mul`]'s double-and-add), matching the reference
//! implementation this crate is ported from rather than a hardened one.
//! Callers with a side-channel threat model should not rely on this crate
//! as-is.

pub mod cipher;
pub mod ecc;
mod error;
pub mod hash;
pub mod sm2;
#[cfg(test)]
mod test;
pub mod zuc;

pub use error::Error;
