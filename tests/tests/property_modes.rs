//! Property-based tests for the AES-256 modes and padding schemes

use blockcrypt_algorithms::block::{Aes256, BlockCipher, CipherMode, Ctr, Xts};
use blockcrypt_algorithms::padding::PaddingMode;
use blockcrypt_algorithms::types::Iv;
use blockcrypt_symmetric::{aes_256_decrypt, aes_256_encrypt, encoding, AesMode, IvPolicy};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = AesMode> {
    prop::sample::select(AesMode::ALL.to_vec())
}

fn any_padding() -> impl Strategy<Value = PaddingMode> {
    prop::sample::select(PaddingMode::ALL.to_vec())
}

/// Lengths each (mode, padding) pair accepts, with data ending in a non-zero byte
fn message_for(mode: AesMode, padding: PaddingMode) -> BoxedStrategy<Vec<u8>> {
    let data = prop::collection::vec(any::<u8>(), 0..=80);
    let data = data.prop_map(|mut v| {
        if let Some(last) = v.last_mut() {
            *last |= 1;
        }
        v
    });

    match (mode, padding) {
        (AesMode::Ecb | AesMode::Cbc, PaddingMode::None) => data
            .prop_map(|mut v| {
                v.truncate(v.len() / 16 * 16);
                v
            })
            .boxed(),
        (AesMode::Xts, PaddingMode::None) => data
            .prop_filter("XTS data unit", |v| v.is_empty() || v.len() >= 16)
            .boxed(),
        _ => data.boxed(),
    }
}

fn case() -> impl Strategy<Value = (AesMode, PaddingMode, Vec<u8>)> {
    (any_mode(), any_padding()).prop_flat_map(|(mode, padding)| {
        message_for(mode, padding).prop_map(move |data| (mode, padding, data))
    })
}

proptest! {
    // The arithmetic S-box keeps each block operation slow; a few dozen cases
    // per property is enough to cover every mode and padding pair
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn facade_roundtrip_explicit_iv(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        (mode, padding, data) in case()
    ) {
        let iv = Iv::new(iv);
        let ecb = mode == AesMode::Ecb;
        let policy = |iv: &Iv| -> IvPolicy { if ecb { IvPolicy::None } else { iv.into() } };

        let ciphertext = aes_256_encrypt(&data, &key, policy(&iv), mode, padding).unwrap();
        let plaintext = aes_256_decrypt(&ciphertext, &key, policy(&iv), mode, padding).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn facade_roundtrip_embedded_iv(
        key in any::<[u8; 32]>(),
        (mode, padding, data) in case().prop_filter("ECB takes no IV", |c| c.0 != AesMode::Ecb)
    ) {
        let ciphertext = aes_256_encrypt(&data, &key, true, mode, padding).unwrap();
        prop_assert!(ciphertext.len() >= 16 + data.len());
        let plaintext = aes_256_decrypt(&ciphertext, &key, true, mode, padding).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn padding_roundtrip(
        padding in any_padding(),
        data in prop::collection::vec(any::<u8>(), 0..=64)
    ) {
        let data = match padding {
            PaddingMode::None => data[..data.len() / 16 * 16].to_vec(),
            // Zero padding cannot tell trailing zeros from padding
            PaddingMode::Zero => {
                let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
                data[..end].to_vec()
            }
            _ => data,
        };

        let padded = padding.pad(&data, 16).unwrap();
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert_eq!(padding.unpad(&padded, 16).unwrap(), data);
    }

    #[test]
    fn base64_roundtrip(data in prop::collection::vec(any::<u8>(), 0..=256)) {
        prop_assert_eq!(encoding::decode(&encoding::encode(&data)).unwrap(), data);
    }

    #[test]
    fn ctr_split_processing_matches_one_shot(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..=64),
        split in 0usize..=64
    ) {
        let iv = Iv::new(iv);
        let split = split.min(data.len());
        let one_shot = Ctr::new(Aes256::new(&key).unwrap(), &iv).encrypt(&data).unwrap();

        let mut stream = Ctr::new(Aes256::new(&key).unwrap(), &iv);
        let mut pieces = data.clone();
        let (head, tail) = pieces.split_at_mut(split);
        stream.apply_keystream(head);
        stream.apply_keystream(tail);

        prop_assert_eq!(pieces, one_shot);
    }

    #[test]
    fn xts_preserves_length(
        key in prop::collection::vec(any::<u8>(), 64),
        sector in any::<u128>(),
        data in prop::collection::vec(any::<u8>(), 16..=64)
    ) {
        prop_assume!(key[..32] != key[32..]);
        let xts = Xts::<Aes256>::from_key_material(&key, &Iv::from_sector(sector)).unwrap();

        let ciphertext = xts.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(xts.decrypt(&ciphertext).unwrap(), data);
    }
}
