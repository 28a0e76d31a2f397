//! SM2 public-key cryptography, GB/T 32918 parts 1-5: digital signatures,
//! public-key encryption, and the four-step key exchange protocol, all
//! built on the [`crate::ecc`] curve backend.

pub mod encrypt;
pub mod exchange;
pub mod key;
pub mod sign;
mod za;

pub use {
    encrypt::{decrypt, encrypt as encrypt_message, Mode},
    exchange::{Initiator, Responder},
    key::{PrivateKey, PublicKey},
    sign::{sign, verify, Signature},
    za::DEFAULT_ID,
};
