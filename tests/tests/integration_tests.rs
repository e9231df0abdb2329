//! Behavioural tests of the AES-256 facade

use blockcrypt_symmetric::{
    aes_256_decrypt, aes_256_decrypt_base64, aes_256_encrypt, aes_256_encrypt_base64, Aes256Cipher,
    Aes256Key, AesMode, BlockModeCipher, CipherConfig, Error, Iv, IvPolicy, PaddingMode,
};

const KEY: [u8; 32] = [0x2b; 32];

#[test]
fn embedded_iv_randomizes_ciphertext() {
    let plaintext = b"the same message twice";
    for mode in [AesMode::Cbc, AesMode::Ofb, AesMode::Cfb, AesMode::Ctr, AesMode::Xts] {
        let a = aes_256_encrypt(plaintext, &KEY, true, mode, PaddingMode::Pkcs7).unwrap();
        let b = aes_256_encrypt(plaintext, &KEY, true, mode, PaddingMode::Pkcs7).unwrap();
        assert_ne!(a, b, "{}", mode);

        for ciphertext in [a, b] {
            let decrypted =
                aes_256_decrypt(&ciphertext, &KEY, true, mode, PaddingMode::Pkcs7).unwrap();
            assert_eq!(decrypted, plaintext, "{}", mode);
        }
    }
}

#[test]
fn ecb_leaks_repeated_blocks_cbc_does_not() {
    let plaintext = [0x61u8; 32];

    let ecb = aes_256_encrypt(&plaintext, &KEY, false, AesMode::Ecb, PaddingMode::None).unwrap();
    assert_eq!(ecb[..16], ecb[16..32]);

    let iv = Iv::new([0x10; 16]);
    let cbc = aes_256_encrypt(&plaintext, &KEY, &iv, AesMode::Cbc, PaddingMode::None).unwrap();
    assert_ne!(cbc[..16], cbc[16..32]);
}

#[test]
fn ciphertext_lengths() {
    let iv = Iv::new([1; 16]);
    for len in [0usize, 1, 15, 16, 17, 40] {
        let data = vec![0x33u8; len];

        let padded = aes_256_encrypt(&data, &KEY, &iv, AesMode::Cbc, PaddingMode::Pkcs7).unwrap();
        assert_eq!(padded.len(), (len / 16 + 1) * 16);

        for mode in [AesMode::Ofb, AesMode::Cfb, AesMode::Ctr] {
            let streamed = aes_256_encrypt(&data, &KEY, &iv, mode, PaddingMode::Pkcs7).unwrap();
            assert_eq!(streamed.len(), len, "{}", mode);
        }
    }
}

#[test]
fn rejects_bad_inputs() {
    let iv = Iv::new([1; 16]);

    assert!(matches!(
        aes_256_encrypt(b"x", &[0u8; 31], &iv, AesMode::Cbc, PaddingMode::Pkcs7),
        Err(Error::InvalidKeyLength { expected: 32, actual: 31 })
    ));
    assert!(matches!(
        Iv::from_slice(&[0u8; 12]).map_err(Error::from),
        Err(Error::InvalidIvLength { expected: 16, actual: 12 })
    ));
    assert!(matches!(
        aes_256_decrypt(&[0u8; 17], &KEY, &iv, AesMode::Cbc, PaddingMode::Pkcs7),
        Err(Error::UnalignedInput { .. })
    ));
    assert!(matches!(
        aes_256_decrypt(&[0u8; 15], &KEY, true, AesMode::Cbc, PaddingMode::Pkcs7),
        Err(Error::MissingIv(AesMode::Cbc))
    ));
    assert!(matches!(
        aes_256_encrypt(b"x", &KEY, &iv, AesMode::Ecb, PaddingMode::Pkcs7),
        Err(Error::UnsupportedModeOption { mode: AesMode::Ecb, .. })
    ));
    assert!(matches!(
        aes_256_decrypt_base64("abc", &KEY, &iv, AesMode::Cbc, PaddingMode::Pkcs7),
        Err(Error::InvalidBase64(_))
    ));
}

#[test]
fn no_iv_flag_matches_zero_iv() {
    let zero = Iv::zeroed();
    for mode in [AesMode::Cbc, AesMode::Ofb, AesMode::Cfb, AesMode::Ctr] {
        let from_zero = aes_256_encrypt(b"legacy payload", &KEY, &zero, mode, PaddingMode::Pkcs7)
            .unwrap();
        assert_eq!(
            aes_256_encrypt(b"legacy payload", &KEY, false, mode, PaddingMode::Pkcs7).unwrap(),
            from_zero
        );
        assert_eq!(
            aes_256_decrypt(&from_zero, &KEY, false, mode, PaddingMode::Pkcs7).unwrap(),
            b"legacy payload"
        );
    }

    let text = aes_256_encrypt_base64(b"x", &KEY, IvPolicy::None, AesMode::Ofb, PaddingMode::None)
        .unwrap();
    assert_eq!(
        aes_256_decrypt_base64(&text, &KEY, &zero, AesMode::Ofb, PaddingMode::None).unwrap(),
        b"x"
    );
}

#[test]
fn corrupted_padding_is_rejected() {
    let iv = Iv::new([4; 16]);
    for padding in [PaddingMode::Pkcs7, PaddingMode::AnsiX923, PaddingMode::Iso7816_4] {
        // A final block of 0xff bytes is malformed under each of these schemes
        let ciphertext = aes_256_encrypt(
            &[0xffu8; 16],
            &KEY,
            &iv,
            AesMode::Cbc,
            PaddingMode::None,
        )
        .unwrap();

        assert!(
            matches!(
                aes_256_decrypt(&ciphertext, &KEY, &iv, AesMode::Cbc, padding),
                Err(Error::InvalidPadding { .. })
            ),
            "{}",
            padding
        );
    }
}

#[test]
fn base64_variants_roundtrip() {
    let config = CipherConfig::new(AesMode::Ctr, PaddingMode::None);
    let key = Aes256Key::generate();
    let cipher = Aes256Cipher::with_config(&key, config);

    let text = cipher.encrypt_base64(b"", &IvPolicy::Embedded).unwrap();
    assert!(cipher.decrypt_base64(&text, &IvPolicy::Embedded).unwrap().is_empty());

    let text =
        aes_256_encrypt_base64(b"payload", key.as_bytes(), true, AesMode::Cbc, PaddingMode::Iso10126)
            .unwrap();
    assert!(text.len() % 4 == 0);
    let plain =
        aes_256_decrypt_base64(&text, key.as_bytes(), true, AesMode::Cbc, PaddingMode::Iso10126)
            .unwrap();
    assert_eq!(plain, b"payload");
}

#[test]
fn zero_padding_loses_trailing_zeros() {
    let iv = Iv::new([8; 16]);
    let ciphertext =
        aes_256_encrypt(b"abc\0\0", &KEY, &iv, AesMode::Cbc, PaddingMode::Zero).unwrap();
    let plain = aes_256_decrypt(&ciphertext, &KEY, &iv, AesMode::Cbc, PaddingMode::Zero).unwrap();
    assert_eq!(plain, b"abc");
}
