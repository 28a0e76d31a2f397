//! SM3 cryptographic hash, as defined in GB/T 32905-2016.
//!
//! SM3 digests a message of any length into a 256-bit output. Like SHA-2 it
//! is built from the [Merkle-Damgard](super::merkledamgard) construction,
//! but its [compression function](Sm3Compress) is its own design: a
//! 64-round unbalanced Feistel-like mixing of eight 32-bit state words with
//! an expanded 68-word message schedule, rather than a block cipher run in
//! Davies-Meyer mode.

use {
    crate::hash::merkledamgard::{CompressionFn, MerkleDamgard},
    docext::docext,
};

const BLOCK_BYTES: usize = 64;

/// SM3's eight-word chaining state.
pub type State = [u32; 8];

/// Initial chaining value, GB/T 32905 §4.1.
pub const IV: State = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

const T0: u32 = 0x79cc4519;
const T1: u32 = 0x7a879d8a;

fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Expand a 512-bit block into the 68-word `W` schedule and the derived
/// 64-word `W'` schedule used by [`compress_block`].
///
/// $$
/// W_j = P_1(W_{j-16} \oplus W_{j-9} \oplus \mathrm{ROL}(W_{j-3}, 15))
///     \oplus \mathrm{ROL}(W_{j-13}, 7) \oplus W_{j-6}, \quad j = 16..67
/// $$
#[docext]
fn expand(block: [u8; BLOCK_BYTES]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }
    let mut w_prime = [0u32; 64];
    for j in 0..64 {
        w_prime[j] = w[j] ^ w[j + 4];
    }
    (w, w_prime)
}

/// Compress one 512-bit block into the chaining value.
fn compress_block(v: State, block: [u8; BLOCK_BYTES]) -> State {
    let (w, w_prime) = expand(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = v;
    for j in 0..64 {
        let tj = if j < 16 { T0 } else { T1 };
        let ss1 = (a.rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(tj.rotate_left((j % 32) as u32)))
        .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);
        let tt1 = ff(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w_prime[j]);
        let tt2 = gg(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }
    let new = [a, b, c, d, e, f, g, h];
    let mut result = [0u32; 8];
    for i in 0..8 {
        result[i] = v[i] ^ new[i];
    }
    result
}

#[derive(Debug, Clone, Copy)]
struct Sm3Compress;

impl CompressionFn for Sm3Compress {
    type State = State;
    type Block = [u8; BLOCK_BYTES];

    fn compress(&self, state: Self::State, block: Self::Block) -> Self::State {
        compress_block(state, block)
    }
}

fn block_from_slice(b: &[u8]) -> [u8; BLOCK_BYTES] {
    b.try_into().expect("merkle-damgard hands us full blocks")
}

/// Incremental SM3 hasher.
#[derive(Debug, Clone)]
pub struct Sm3(MerkleDamgard<Sm3Compress, BLOCK_BYTES>);

impl Default for Sm3 {
    fn default() -> Self {
        Self(MerkleDamgard::new(Sm3Compress, IV))
    }
}

impl Sm3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data, block_from_slice);
    }

    pub fn finalize(self) -> [u8; 32] {
        let state = self.0.finalize(block_from_slice);
        let mut out = [0u8; 32];
        for (i, word) in state.into_iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

/// One-shot SM3 digest of `message`.
pub fn sm3(message: &[u8]) -> [u8; 32] {
    let mut h = Sm3::new();
    h.update(message);
    h.finalize()
}
