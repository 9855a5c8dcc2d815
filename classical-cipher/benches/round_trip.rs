use classical_cipher::cipher::{
    AffineKey, CaesarKey, Cipher, CipherKey, HillKey, PlayfairKey, TranspositionKey, VigenereKey,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_round_trip(c: &mut Criterion) {
    // 1) one‐time setup
    let keys: Vec<CipherKey> = vec![
        CaesarKey::new(3).into(),
        AffineKey::try_with(5, 8).expect("affine key").into(),
        VigenereKey::try_with("lemon").expect("vigenere key").into(),
        HillKey::try_with(vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]])
            .expect("hill key")
            .into(),
        TranspositionKey::try_with(6).expect("transposition key").into(),
        PlayfairKey::try_with("monarchy").expect("playfair key").into(),
    ];

    // the same message every iteration
    let original = "the quick brown fox leaps over the lazy dog ".repeat(16);

    for key in keys {
        c.bench_function(&format!("round_trip_{}", key.kind()), |b| {
            b.iter(|| {
                let cipher = key.encode(black_box(&original)).expect("encode");
                black_box(key.decode(&cipher).expect("decode"));
            })
        });
    }
}

criterion_group!(benches, bench_round_trip);
criterion_main!(benches);
