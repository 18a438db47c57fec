use acc_crypto_internal_hash_chain::*;
use criterion::*;

fn hash_chain_bench(c: &mut Criterion) {
    let label = b"accumulator";
    let value = [0x42u8; 64];

    for count in [1usize, 4, 16] {
        let values: Vec<&[u8]> = (0..count).map(|_| value.as_slice()).collect();
        c.bench_function(&format!("hash chain of {} values", count), |b| {
            b.iter(|| hash_chain(label, black_box(&values)).expect("hash chain failed"))
        });
    }
}

criterion_group!(benches, hash_chain_bench);
criterion_main!(benches);
