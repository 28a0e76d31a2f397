//! SM2 key exchange, GB/T 32918.3: four message-carrying steps between an
//! initiator `A` and a responder `B`, ending with each side holding the
//! same derived key plus a MAC-like confirmation value proving the other
//! side derived it too.
//!
//! The protocol is exposed here as three typed calls rather than four, since
//! the responder's two outputs (`R_B`, `S_B`) are produced together and the
//! initiator's confirmation check and `S_A` computation happen together:
//!
//! 1. [`Initiator::start`] — `A` picks an ephemeral scalar and sends `R_A`.
//! 2. [`Responder::respond`] — `B` picks its own ephemeral scalar, derives
//!    the shared key, and returns `R_B` plus a confirmation tag `S_B`.
//! 3. [`Initiator::confirm`] — `A` derives the same shared key, checks
//!    `S_B`, and returns its own confirmation tag `S_A` for `B` to check
//!    with [`Responder::confirm`].

use crate::{
    ecc::{FieldElement, Point, Scalar, Sm2Context},
    hash::{kdf, Sm3},
    sm2::{
        key::{PrivateKey, PublicKey},
        za,
    },
    Error,
};
use zeroize::Zeroize;

/// `\bar{x} = 2^w + (x \bmod 2^w)`, `w = 127` for this curve's 256-bit `n`
/// (GB/T 32918.3 §5.4.3): forces bit 127 of `x` to `1` and discards
/// everything above it, so the weighting factor is always in `[2^127,
/// 2^128)` regardless of `x`'s actual magnitude.
fn x_bar(x: FieldElement) -> Scalar {
    let bytes = x.to_be_bytes();
    let mut masked = [0u8; 32];
    masked[16..].copy_from_slice(&bytes[16..]);
    masked[16] |= 0x80;
    Scalar::from_be_bytes(masked)
}

fn inner_confirmation_hash(
    u_x: FieldElement,
    za: &[u8; 32],
    zb: &[u8; 32],
    ra: Point,
    rb: Point,
) -> [u8; 32] {
    let mut hasher = Sm3::new();
    hasher.update(&u_x.to_be_bytes());
    hasher.update(za);
    hasher.update(zb);
    hasher.update(&ra.x().expect("ephemeral points are never infinite").to_be_bytes());
    hasher.update(&ra.y().expect("ephemeral points are never infinite").to_be_bytes());
    hasher.update(&rb.x().expect("ephemeral points are never infinite").to_be_bytes());
    hasher.update(&rb.y().expect("ephemeral points are never infinite").to_be_bytes());
    hasher.finalize()
}

fn confirmation_tag(tag: u8, u_y: FieldElement, inner: [u8; 32]) -> [u8; 32] {
    let mut hasher = Sm3::new();
    hasher.update(&[tag]);
    hasher.update(&u_y.to_be_bytes());
    hasher.update(&inner);
    hasher.finalize()
}

/// Derive the shared point `[t](P_peer + [\bar{x}_{peer}] R_peer)`, where
/// `t = d_own + \bar{x}_{own} r_own (mod n)` (GB/T 32918.3 §5.4.3). Note
/// that `t` is weighted by *this party's own* ephemeral point, while the
/// peer's contribution is weighted by the *peer's* ephemeral point.
fn derive_shared_point(
    own_r: Scalar,
    own_private: PrivateKey,
    own_r_point: Point,
    peer_r_point: Point,
    peer_public: PublicKey,
) -> Result<Point, Error> {
    let mut own_weight = x_bar(own_r_point.x().ok_or(Error::InfinityPoint)?);
    let peer_weight = x_bar(peer_r_point.x().ok_or(Error::InfinityPoint)?);
    let mut t = own_private.scalar() + own_weight * own_r;
    own_weight.zeroize();
    let peer_weighted = peer_r_point.mul(peer_weight) + peer_public.point();
    let point = peer_weighted.mul(t);
    t.zeroize();
    if point.is_infinity() {
        return Err(Error::InfinityPoint);
    }
    Ok(point)
}

/// The initiator side of a key exchange, held between [`Initiator::start`]
/// and [`Initiator::confirm`].
pub struct Initiator {
    id_self: Vec<u8>,
    id_peer: Vec<u8>,
    private_key: PrivateKey,
    peer_public_key: PublicKey,
    r: Scalar,
    ra_point: Point,
}

impl Initiator {
    /// Start the exchange with caller-supplied ephemeral scalar `r`. Returns
    /// the state to carry to [`Initiator::confirm`]; send
    /// [`Initiator::ra_point`] to the responder.
    pub fn start(
        id_self: Vec<u8>,
        id_peer: Vec<u8>,
        private_key: PrivateKey,
        peer_public_key: PublicKey,
        r: Scalar,
    ) -> Self {
        let ra_point = Sm2Context::get().g.mul(r);
        Self {
            id_self,
            id_peer,
            private_key,
            peer_public_key,
            r,
            ra_point,
        }
    }

    pub fn ra_point(&self) -> Point {
        self.ra_point
    }

    /// Derive the shared key from the responder's `(R_B, S_B)`, verify
    /// `S_B`, and return `(shared key, S_A)` to send back.
    pub fn confirm(self, rb_point: Point, sb: [u8; 32], klen: usize) -> Result<(Vec<u8>, [u8; 32]), Error> {
        let za = za::compute(&self.id_self, self.private_key.public_key())?;
        let zb = za::compute(&self.id_peer, self.peer_public_key)?;

        let u = derive_shared_point(self.r, self.private_key, self.ra_point, rb_point, self.peer_public_key)?;
        let u_x = u.x().expect("checked non-infinite above");
        let u_y = u.y().expect("checked non-infinite above");

        let inner = inner_confirmation_hash(u_x, &za, &zb, self.ra_point, rb_point);
        let expected_sb = confirmation_tag(0x02, u_y, inner);
        if expected_sb != sb {
            return Err(Error::DataMismatch);
        }

        let mut key_material = Vec::with_capacity(64 + 64);
        key_material.extend_from_slice(&u_x.to_be_bytes());
        key_material.extend_from_slice(&u_y.to_be_bytes());
        key_material.extend_from_slice(&za);
        key_material.extend_from_slice(&zb);
        let key = kdf(&key_material, klen);
        key_material.zeroize();

        let sa = confirmation_tag(0x03, u_y, inner);
        Ok((key, sa))
    }
}

/// The responder side of a key exchange, held between [`Responder::respond`]
/// and [`Responder::confirm`].
pub struct Responder {
    expected_sa: [u8; 32],
}

impl Responder {
    /// Respond to the initiator's `R_A` with caller-supplied ephemeral
    /// scalar `r`. Returns `(state, R_B, S_B, shared key)`; send `(R_B,
    /// S_B)` to the initiator and carry `state` to [`Responder::confirm`].
    pub fn respond(
        id_self: Vec<u8>,
        id_peer: Vec<u8>,
        private_key: PrivateKey,
        peer_public_key: PublicKey,
        ra_point: Point,
        r: Scalar,
        klen: usize,
    ) -> Result<(Self, Point, [u8; 32], Vec<u8>), Error> {
        let rb_point = Sm2Context::get().g.mul(r);

        let za = za::compute(&id_peer, peer_public_key)?;
        let zb = za::compute(&id_self, private_key.public_key())?;

        let u = derive_shared_point(r, private_key, rb_point, ra_point, peer_public_key)?;
        let u_x = u.x().expect("checked non-infinite above");
        let u_y = u.y().expect("checked non-infinite above");

        let inner = inner_confirmation_hash(u_x, &za, &zb, ra_point, rb_point);
        let sb = confirmation_tag(0x02, u_y, inner);
        let expected_sa = confirmation_tag(0x03, u_y, inner);

        let mut key_material = Vec::with_capacity(64 + 64);
        key_material.extend_from_slice(&u_x.to_be_bytes());
        key_material.extend_from_slice(&u_y.to_be_bytes());
        key_material.extend_from_slice(&za);
        key_material.extend_from_slice(&zb);
        let key = kdf(&key_material, klen);
        key_material.zeroize();

        Ok((Self { expected_sa }, rb_point, sb, key))
    }

    /// Verify the initiator's final confirmation tag `S_A`.
    pub fn confirm(self, sa: [u8; 32]) -> Result<(), Error> {
        if sa == self.expected_sa {
            Ok(())
        } else {
            Err(Error::DataMismatch)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ecc::Scalar;

    fn scalar_from_u8(byte: u8) -> Scalar {
        let mut b = [0u8; 32];
        b[31] = byte;
        Scalar::from_be_bytes(b)
    }

    #[test]
    fn full_exchange_agrees_on_a_shared_key() {
        let da = PrivateKey::from_scalar(scalar_from_u8(0x11)).unwrap();
        let db = PrivateKey::from_scalar(scalar_from_u8(0x22)).unwrap();
        let id_a = b"alice".to_vec();
        let id_b = b"bob".to_vec();

        let initiator = Initiator::start(
            id_a.clone(),
            id_b.clone(),
            da,
            db.public_key(),
            scalar_from_u8(0x33),
        );
        let ra_point = initiator.ra_point();

        let (responder, rb_point, sb, key_b) = Responder::respond(
            id_b,
            id_a,
            db,
            da.public_key(),
            ra_point,
            scalar_from_u8(0x44),
            32,
        )
        .unwrap();

        let (key_a, sa) = initiator.confirm(rb_point, sb, 32).unwrap();
        assert_eq!(key_a, key_b);

        assert!(responder.confirm(sa).is_ok());
    }

    #[test]
    fn wrong_confirmation_tag_is_rejected() {
        let da = PrivateKey::from_scalar(scalar_from_u8(0x11)).unwrap();
        let db = PrivateKey::from_scalar(scalar_from_u8(0x22)).unwrap();
        let id_a = b"alice".to_vec();
        let id_b = b"bob".to_vec();

        let initiator = Initiator::start(
            id_a.clone(),
            id_b.clone(),
            da,
            db.public_key(),
            scalar_from_u8(0x33),
        );
        let ra_point = initiator.ra_point();

        let (_responder, rb_point, _sb, _key_b) = Responder::respond(
            id_b, id_a, db, da.public_key(), ra_point, scalar_from_u8(0x44), 32,
        )
        .unwrap();

        let bogus_sb = [0xAAu8; 32];
        assert_eq!(
            initiator.confirm(rb_point, bogus_sb, 32),
            Err(Error::DataMismatch)
        );
    }
}
