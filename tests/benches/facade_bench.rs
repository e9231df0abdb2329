use blockcrypt_symmetric::{
    aes_256_encrypt, aes_256_encrypt_base64, AesMode, Iv, PaddingMode,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bench_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-256 facade");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut key = [0u8; 32];
    rng.fill(&mut key);
    let iv = Iv::random(&mut rng);

    // Test different data sizes
    for size in [16usize, 256, 1024].iter() {
        let mut data = vec![0u8; *size];
        rng.fill(&mut data[..]);
        group.throughput(Throughput::Bytes(*size as u64));

        for mode in [AesMode::Cbc, AesMode::Ctr, AesMode::Xts] {
            group.bench_with_input(BenchmarkId::new(mode.name(), size), size, |b, _| {
                b.iter(|| {
                    let _ = aes_256_encrypt(black_box(&data), &key, &iv, mode, PaddingMode::Pkcs7);
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("CBC+base64+embedded IV", size), size, |b, _| {
            b.iter(|| {
                let _ = aes_256_encrypt_base64(black_box(&data), &key, true, AesMode::Cbc, PaddingMode::Pkcs7);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_facade);
criterion_main!(benches);
