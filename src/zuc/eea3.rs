//! 128-EEA3 confidentiality algorithm, GB/T 33133.2-2016: XOR a message
//! against a [`Zuc`](super::Zuc) keystream derived from a 32-bit counter,
//! 5-bit bearer identity, and 1-bit direction.

use super::Zuc;

fn iv(count: u32, bearer: u8, direction: u8) -> [u8; 16] {
    let count = count.to_be_bytes();
    let mut iv = [0u8; 16];
    iv[0..4].copy_from_slice(&count);
    iv[4] = (bearer << 3) | (direction << 2);
    iv[8..12].copy_from_slice(&count);
    iv[12] = iv[4];
    iv
}

/// Encrypt or decrypt `data` (XOR is self-inverse) of `bit_length` bits
/// under `key`, `count`, `bearer` and `direction`.
///
/// `data` must hold at least `ceil(bit_length / 8)` bytes; any bits beyond
/// `bit_length` in the final byte are left untouched.
pub fn confidentiality(
    key: [u8; 16],
    count: u32,
    bearer: u8,
    direction: u8,
    data: &mut [u8],
    bit_length: usize,
) {
    let byte_length = (bit_length + 7) / 8;
    let word_count = (bit_length + 31) / 32;
    let mut zuc = Zuc::new(key, iv(count, bearer, direction));
    let keystream = zuc.generate(word_count);
    for (i, byte) in data.iter_mut().take(byte_length).enumerate() {
        let word = keystream[i / 4];
        let shift = 24 - 8 * (i % 4);
        let ks_byte = ((word >> shift) & 0xff) as u8;
        if i == byte_length - 1 && bit_length % 8 != 0 {
            let valid_bits = bit_length % 8;
            let mask = 0xffu8 << (8 - valid_bits);
            *byte ^= ks_byte & mask;
        } else {
            *byte ^= ks_byte;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encrypt_then_encrypt_is_identity() {
        let key = [0x11u8; 16];
        let mut data = b"ZUC confidentiality test vector".to_vec();
        let original = data.clone();
        let bits = data.len() * 8;
        confidentiality(key, 1, 5, 0, &mut data, bits);
        assert_ne!(data, original);
        confidentiality(key, 1, 5, 0, &mut data, bits);
        assert_eq!(data, original);
    }

    #[test]
    fn matches_the_published_test_vector() {
        // GB/T 33133.2 Annex B.1, test set 3.
        let mut key = [0u8; 16];
        hex::decode_to_slice("173D14BA5003731D7A60049470F00A29", &mut key).expect("valid hex");
        let mut data =
            hex::decode("6CF65340735552AB0C9752FA6F9025FE0BD675D9005875B200000000").expect("valid hex");
        confidentiality(key, 0x66035492, 0x0F, 0, &mut data, 193);
        let expected =
            hex::decode("A6C85FC66AFB8533AAFC2518DFE784940EE1E4B030238CC800000000").expect("valid hex");
        assert_eq!(data, expected);
    }

    #[test]
    fn partial_final_byte_leaves_tail_bits_untouched() {
        let key = [0x22u8; 16];
        let mut data = vec![0xffu8; 2];
        // Only the top 12 bits are "in scope"; the low 4 bits of the
        // second byte must not be touched.
        confidentiality(key, 7, 3, 1, &mut data, 12);
        assert_eq!(data[1] & 0x0f, 0x0f);
    }
}
