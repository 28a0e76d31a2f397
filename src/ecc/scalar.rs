//! Scalar arithmetic modulo the group order `n`.

use {
    crate::ecc::limbs::{self, Limbs},
    std::{cmp, ops},
    zeroize::Zeroize,
};

/// The group order `n`, big-endian hex:
/// `FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123`.
pub const N: Limbs = [
    0x53bbf40939d54123,
    0x7203df6b21c6052b,
    0xffffffffffffffff,
    0xfffffffeffffffff,
];

/// An element of `Z/nZ`, i.e. a scalar in `[0, n)` used as a private key,
/// nonce, or signature component.
///
/// Scalars implement [`zeroize::Zeroize`] so callers holding long-lived
/// private key or nonce material can clear it explicitly; being `Copy`
/// (required for ergonomic field/curve arithmetic throughout this crate),
/// a `Scalar` cannot also implement `Drop`, so clearing is not automatic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Scalar(Limbs);

impl Scalar {
    pub const ZERO: Self = Self(limbs::ZERO);
    pub const ONE: Self = Self(limbs::ONE);

    /// Reduce a big-endian 32-byte string modulo `n`.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(limbs::reduce(limbs::from_be_bytes(bytes), N))
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        limbs::to_be_bytes(self.0)
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// `1 <= self <= n-1`, the range required of signature components
    /// (`TestRange` in the reference implementation).
    pub fn in_signing_range(self) -> bool {
        !self.is_zero() && self.cmp(&Self(N)) == cmp::Ordering::Less
    }

    /// `1 <= self <= n-2`, the (tighter) range required of private keys:
    /// `d = n-1` makes `1+d \equiv 0 \pmod n`, which has no inverse and
    /// would make every signature under it fail with
    /// [`crate::Error::GenerateS`].
    pub fn in_private_key_range(self) -> bool {
        !self.is_zero() && self.cmp(&(Self(N) - Self::ONE)) == cmp::Ordering::Less
    }

    pub fn get_bit(&self, i: usize) -> bool {
        limbs::get_bit(self.0, i)
    }

    pub const BITS: usize = limbs::DIGITS * limbs::Digit::BITS as usize;

    /// Multiplicative inverse modulo `n`, via the extended Euclidean
    /// algorithm. `None` for [`Scalar::ZERO`].
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let mut u = self.0;
        let mut v = N;
        let mut x1 = Self::ONE;
        let mut x2 = Self::ZERO;
        while u != limbs::ZERO {
            let (q, r) = limbs::div(v, u);
            v = u;
            u = r.0;
            let x = x2 - Self(q) * x1;
            x2 = x1;
            x1 = x;
        }
        Some(x2)
    }
}

impl ops::Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(limbs::add_mod(self.0, rhs.0, N))
    }
}

impl ops::Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(limbs::sub_mod(self.0, rhs.0, N))
    }
}

impl ops::Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(limbs::mul_mod(self.0, rhs.0, N))
    }
}

impl cmp::PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for Scalar {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        limbs::cmp(self.0, other.0)
    }
}
