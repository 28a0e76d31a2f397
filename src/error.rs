//! Error kinds for every fallible operation in this crate.
//!
//! The reference C implementation returns small integer codes that are
//! reused across unrelated failure conditions (spec.md §9, "Error-code
//! collisions"): the same code means "coordinate out of range" in one path
//! and "KDF output was all zero" in another. [`Error`] keeps that wire
//! compatibility available through [`Error::code`], but internally every
//! variant is distinct, so application code can match on the real failure
//! kind instead of reverse-engineering a shared integer.

use thiserror::Error as ThisError;

/// A recoverable failure from an SM2/SM3/SM4/ZUC operation.
///
/// None of these variants represent a process abort: every fallible
/// operation in this crate returns `Result`. Per spec.md §7, intermediate
/// buffers a function fully owns (KDF masks, key-exchange key material) are
/// explicitly zeroized before every return, success or failure. This does
/// not extend to caller-supplied scalars (`k`, `r_A`, `r_B`, private keys):
/// those are `Copy`, so a function cannot clear the caller's copy on their
/// behalf, only its own local one. Callers holding such material should
/// call `Zeroize::zeroize` on it themselves once they're done.
#[derive(Debug, Clone, Copy, ThisError, PartialEq, Eq)]
pub enum Error {
    /// The curve parameters failed self-validation (`G` off-curve, or
    /// `n*G != O`). Only possible if the compiled-in constants are wrong.
    #[error("curve parameter initialization failed")]
    CurveInit,

    /// A computed point was the point at infinity where a non-infinite
    /// result was required (e.g. `h * P_B = O` during encryption).
    #[error("point is the point at infinity")]
    InfinityPoint,

    /// A point's coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotValidPoint,

    /// A point does not have the expected order `n`.
    #[error("point does not have order n")]
    InvalidOrder,

    /// A field or scalar element is out of its required range, or a KDF
    /// output was degenerately all-zero.
    #[error("element is out of the valid range, or KDF output was all-zero")]
    NotValidElement,

    /// Signature generation produced a degenerate `r` (`r = 0` or
    /// `r + k == n`); the caller should retry with a fresh `k`.
    #[error("signature generation failed: degenerate r")]
    GenerateR,

    /// Public-key encryption's `C3` tag did not match on decryption.
    #[error("ciphertext authentication tag (C3) mismatch")]
    C3Mismatch,

    /// Signature generation produced a degenerate `s = 0`; the caller
    /// should retry with a fresh `k`.
    #[error("signature generation failed: degenerate s")]
    GenerateS,

    /// Signature component `r` is outside `[1, n-1]`.
    #[error("signature component r is out of range")]
    OutOfRangeR,

    /// Signature component `s` is outside `[1, n-1]`.
    #[error("signature component s is out of range")]
    OutOfRangeS,

    /// Signature verification's intermediate `t = (r + s) mod n` was zero.
    #[error("signature verification failed: degenerate t")]
    GenerateT,

    /// A public key failed validation (infinite, off-curve, wrong order, or
    /// coordinates outside `[0, p)`).
    #[error("public key failed validation")]
    PubKeyInit,

    /// A byte-level comparison failed: signature verification rejected,
    /// or a key-exchange confirmation value (`S1` vs `S_B`, `S2` vs `S_A`)
    /// did not match.
    #[error("data comparison failed (signature rejected, or confirmation mismatch)")]
    DataMismatch,

    /// An identity string's bit length does not fit in the 16-bit `ENTL_A`
    /// field required by GB/T 32918.2's `ZA` computation.
    #[error("identity string is too long to encode its bit length in ENTL_A")]
    IdentityTooLong,
}

impl Error {
    /// The legacy numeric code from spec.md §6, preserved for wire
    /// compatibility. Several distinct variants intentionally share a code;
    /// see the module documentation.
    pub fn code(self) -> u8 {
        match self {
            Error::CurveInit => 1,
            Error::InfinityPoint => 2,
            Error::NotValidPoint => 3,
            Error::InvalidOrder => 4,
            Error::NotValidElement => 5,
            Error::GenerateR => 6,
            Error::C3Mismatch => 6,
            Error::GenerateS => 7,
            Error::OutOfRangeR => 8,
            Error::OutOfRangeS => 9,
            Error::GenerateT => 0xA,
            Error::PubKeyInit => 0xB,
            Error::DataMismatch => 0xC,
            Error::IdentityTooLong => 0xB,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_collisions_are_intentional() {
        assert_eq!(Error::GenerateR.code(), Error::C3Mismatch.code());
    }
}
