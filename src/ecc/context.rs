//! Process-wide curve parameter binding.
//!
//! The reference implementation calls `SM2_Init` before every signature and
//! verification, re-deriving the same constants each time (see spec.md §9,
//! "Cyclic `SM2_Init` calls"). Here the parameters are bound exactly once,
//! behind a [`OnceLock`], and every [`crate::sm2`] operation reuses the
//! cached [`Sm2Context`].

use {
    crate::{
        ecc::{field::FieldElement, limbs::Limbs, point::Point},
        Error,
    },
    std::sync::OnceLock,
};

/// Base point `G` x-coordinate, big-endian hex:
/// `32C4AE2C 1F198119 5F990446 6A39C994 8FE30BBF F2660BE1 715A4589 334C74C7`.
const GX: Limbs = [
    0x715a4589334c74c7,
    0x8fe30bbff2660be1,
    0x5f9904466a39c994,
    0x32c4ae2c1f198119,
];

/// Base point `G` y-coordinate, big-endian hex:
/// `BC3736A2 F4F6779C 59BDCEE3 6B692153 D0A9877C C62A4740 02DF32E5 2139F0A0`.
const GY: Limbs = [
    0x02df32e52139f0a0,
    0xd0a9877cc62a4740,
    0x59bdcee36b692153,
    0xbc3736a2f4f6779c,
];

/// Curve parameters bound once per process.
#[derive(Debug)]
pub struct Sm2Context {
    pub g: Point,
}

static CONTEXT: OnceLock<Sm2Context> = OnceLock::new();

impl Sm2Context {
    /// Get the process-wide context, initializing it on first use.
    ///
    /// Verifies that `G` lies on the curve and that `n*G = O`, per spec.md
    /// §3's invariant on the curve parameters. Panics if either check
    /// fails, since the constants are compiled in and a failure indicates a
    /// transcription bug, not a runtime condition a caller can recover from.
    pub fn get() -> &'static Self {
        CONTEXT.get_or_init(|| Self::init().expect("SM2 curve parameters are self-consistent"))
    }

    fn init() -> Result<Self, Error> {
        let gx = FieldElement::from_limbs_unchecked(GX);
        let gy = FieldElement::from_limbs_unchecked(GY);
        let g = Point::new(gx, gy).map_err(|_| Error::CurveInit)?;
        if !g.has_order_n() {
            return Err(Error::CurveInit);
        }
        Ok(Self { g })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn context_initializes() {
        let ctx = Sm2Context::get();
        assert!(!ctx.g.is_infinity());
    }
}
