//! Cross-module integration tests exercising full SM2/SM3/SM4/ZUC
//! workflows, as opposed to the single-function unit tests colocated with
//! each module.

use rand::RngCore;

use crate::{
    cipher::sm4::Sm4,
    ecc::Scalar,
    sm2::{self, exchange, sign, Mode, PrivateKey},
    zuc::{eea3, eia3, Zuc},
};

fn random_scalar(rng: &mut impl RngCore) -> Scalar {
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let candidate = Scalar::from_be_bytes(bytes);
        if candidate.in_signing_range() {
            return candidate;
        }
    }
}

#[test]
fn sm2_full_sign_and_verify_lifecycle() {
    let mut rng = rand::thread_rng();
    let d = PrivateKey::from_scalar(random_scalar(&mut rng)).unwrap();
    let message = b"a message to be signed end to end";

    let k = random_scalar(&mut rng);
    let signature = sign::sign(sm2::DEFAULT_ID, d, message, k).unwrap();
    sign::verify(sm2::DEFAULT_ID, d.public_key(), message, signature).unwrap();
}

#[test]
fn sm2_full_encrypt_and_decrypt_lifecycle() {
    let mut rng = rand::thread_rng();
    let d = PrivateKey::from_scalar(random_scalar(&mut rng)).unwrap();
    let message = b"a message to be encrypted end to end, long enough to span a KDF block boundary comfortably";

    let k = random_scalar(&mut rng);
    let ciphertext = sm2::encrypt_message(d.public_key(), message, k, Mode::C1C3C2).unwrap();
    let plaintext = sm2::decrypt(d, &ciphertext, Mode::C1C3C2).unwrap();
    assert_eq!(plaintext, message);
}

#[test]
fn sm2_full_key_exchange_lifecycle() {
    let mut rng = rand::thread_rng();
    let da = PrivateKey::from_scalar(random_scalar(&mut rng)).unwrap();
    let db = PrivateKey::from_scalar(random_scalar(&mut rng)).unwrap();

    let initiator = exchange::Initiator::start(
        b"alice@example".to_vec(),
        b"bob@example".to_vec(),
        da,
        db.public_key(),
        random_scalar(&mut rng),
    );
    let ra = initiator.ra_point();

    let (responder, rb, sb, key_b) = exchange::Responder::respond(
        b"bob@example".to_vec(),
        b"alice@example".to_vec(),
        db,
        da.public_key(),
        ra,
        random_scalar(&mut rng),
        32,
    )
    .unwrap();

    let (key_a, sa) = initiator.confirm(rb, sb, 32).unwrap();
    assert_eq!(key_a, key_b);
    responder.confirm(sa).unwrap();
}

#[test]
fn sm4_encrypt_then_decrypt_round_trips_for_random_keys_and_blocks() {
    let mut rng = rand::thread_rng();
    for _ in 0..8 {
        let mut key = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);
        let cipher = Sm4::new(key);
        assert_eq!(cipher.decrypt_block(cipher.encrypt_block(block)), block);
    }
}

#[test]
fn zuc_eea3_is_its_own_inverse_end_to_end() {
    let key = [0x5eu8; 16];
    let mut data = b"end to end confidentiality across a full bearer/direction pair".to_vec();
    let original = data.clone();
    let bits = data.len() * 8;

    eea3::confidentiality(key, 42, 3, 0, &mut data, bits);
    assert_ne!(data, original);
    eea3::confidentiality(key, 42, 3, 0, &mut data, bits);
    assert_eq!(data, original);
}

#[test]
fn zuc_eia3_mac_matches_on_both_sides_of_a_link() {
    let key = [0x7au8; 16];
    let message = b"integrity protected signalling message";
    let bits = message.len() * 8;

    let sender_mac = eia3::integrity(key, 9, 4, 0, message, bits);
    let receiver_mac = eia3::integrity(key, 9, 4, 0, message, bits);
    assert_eq!(sender_mac, receiver_mac);
}

#[test]
fn zuc_keystream_is_reusable_across_many_words() {
    let mut zuc = Zuc::new([0x01u8; 16], [0x02u8; 16]);
    let first_batch = zuc.generate(10);
    let second_batch = zuc.generate(10);
    assert_ne!(first_batch, second_batch);
}
