//! The Merkle-Damgard construction: turn a fixed-input-size compression
//! function into a hash over messages of any length.
//!
//! A Merkle-Damgard hash splits its input into fixed-size blocks (padding
//! the final, partial block), then folds each block into a running state
//! using a [compression function](CompressionFn). The final state, after
//! the last block, is the digest.

/// The compression function at the core of a [`MerkleDamgard`] hash: mixes
/// one fixed-size block into the running state.
pub trait CompressionFn {
    type State: Copy;
    type Block: Copy;

    fn compress(&self, state: Self::State, block: Self::Block) -> Self::State;
}

/// Length-and-one-padding shared by SM3 (and, not coincidentally, SHA-1/2):
/// append a single `1` bit, then zero bits, then the 64-bit big-endian
/// message length in bits, so the total length is a multiple of the block
/// size.
pub fn pad(message_len: u64, block_bytes: usize) -> Vec<u8> {
    let mut pad = vec![0x80u8];
    // Reserve 8 bytes at the end of the final block for the bit length.
    let without_length = block_bytes - 8;
    let used = (message_len as usize + 1) % block_bytes;
    let zeros = if used <= without_length {
        without_length - used
    } else {
        block_bytes + without_length - used
    };
    pad.extend(std::iter::repeat(0u8).take(zeros));
    pad.extend((message_len * 8).to_be_bytes());
    pad
}

/// An incremental Merkle-Damgard hash over a [`CompressionFn`].
#[derive(Debug, Clone)]
pub struct MerkleDamgard<C: CompressionFn, const BLOCK_BYTES: usize> {
    compress: C,
    state: C::State,
    buffer: Vec<u8>,
    len: u64,
}

impl<C, const BLOCK_BYTES: usize> MerkleDamgard<C, BLOCK_BYTES>
where
    C: CompressionFn,
{
    pub fn new(compress: C, iv: C::State) -> Self {
        Self {
            compress,
            state: iv,
            buffer: Vec::with_capacity(BLOCK_BYTES),
            len: 0,
        }
    }

    pub fn update(&mut self, data: &[u8], to_block: impl Fn(&[u8]) -> C::Block) {
        self.len += data.len() as u64;
        self.buffer.extend_from_slice(data);
        let mut offset = 0;
        while self.buffer.len() - offset >= BLOCK_BYTES {
            let block = to_block(&self.buffer[offset..offset + BLOCK_BYTES]);
            self.state = self.compress.compress(self.state, block);
            offset += BLOCK_BYTES;
        }
        self.buffer.drain(..offset);
    }

    pub fn finalize(mut self, to_block: impl Fn(&[u8]) -> C::Block) -> C::State {
        let padding = pad(self.len, BLOCK_BYTES);
        let tail = std::mem::take(&mut self.buffer);
        self.len -= tail.len() as u64; // `update` will re-add it.
        self.update(&tail, &to_block);
        self.update(&padding, &to_block);
        debug_assert!(self.buffer.is_empty());
        self.state
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn padding_is_block_aligned() {
        for len in 0..200u64 {
            let padded_len = len as usize + pad(len, 64).len();
            assert_eq!(padded_len % 64, 0);
        }
    }

    #[test]
    fn padding_encodes_bit_length() {
        let padding = pad(13, 64);
        let len_bits = u64::from_be_bytes(padding[padding.len() - 8..].try_into().unwrap());
        assert_eq!(len_bits, 13 * 8);
    }
}
