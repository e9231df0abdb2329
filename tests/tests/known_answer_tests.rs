//! SP 800-38A known-answer tests through the AES-256 facade

use blockcrypt_symmetric::{aes_256_decrypt, aes_256_encrypt, AesMode, Iv, IvPolicy, PaddingMode};
use blockcrypt_tests::vectors::{bytes, KEY, PLAINTEXT, SP800_38A};

fn policy(iv_hex: &str) -> IvPolicy {
    if iv_hex.is_empty() {
        IvPolicy::None
    } else {
        IvPolicy::Explicit(Iv::from_slice(&bytes(iv_hex)).unwrap())
    }
}

#[test]
fn sp800_38a_encrypt() {
    let key = bytes(KEY);
    let plaintext = bytes(PLAINTEXT);

    for v in SP800_38A {
        let ciphertext =
            aes_256_encrypt(&plaintext, &key, policy(v.iv), v.mode, PaddingMode::None).unwrap();
        assert_eq!(hex::encode(ciphertext), v.ciphertext, "{}", v.section);
    }
}

#[test]
fn sp800_38a_decrypt() {
    let key = bytes(KEY);
    let plaintext = bytes(PLAINTEXT);

    for v in SP800_38A {
        let decrypted = aes_256_decrypt(
            &bytes(v.ciphertext),
            &key,
            policy(v.iv),
            v.mode,
            PaddingMode::None,
        )
        .unwrap();
        assert_eq!(decrypted, plaintext, "{}", v.section);
    }
}

#[test]
fn embedded_iv_matches_explicit_vector() {
    let key = bytes(KEY);

    for v in SP800_38A.iter().filter(|v| v.mode != AesMode::Ecb) {
        // A ciphertext carrying the vector's IV up front decrypts under the embedded policy
        let mut framed = bytes(v.iv);
        framed.extend_from_slice(&bytes(v.ciphertext));

        let decrypted = aes_256_decrypt(&framed, &key, true, v.mode, PaddingMode::None).unwrap();
        assert_eq!(hex::encode(decrypted), PLAINTEXT, "{}", v.section);
    }
}

#[test]
fn fips_197_single_block() {
    // FIPS-197 Appendix C.3
    let key = bytes("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
    let plaintext = bytes("00112233445566778899aabbccddeeff");

    let ciphertext =
        aes_256_encrypt(&plaintext, &key, false, AesMode::Ecb, PaddingMode::None).unwrap();
    assert_eq!(hex::encode(ciphertext), "8ea2b7ca516745bfeafc49904b496089");
}
