use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dexkit::{
    apply_gas_margin, calculate_slippage_bounds, shorten_address, validate_address, ChainId,
    Currency, CurrencyAmount,
};
use num_bigint::BigUint;

const MIXED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
const LOWER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

fn bench_addresses(c: &mut Criterion) {
    c.bench_function("validate_address_checksummed", |b| {
        b.iter(|| validate_address(black_box(MIXED)))
    });
    c.bench_function("validate_address_lowercase", |b| {
        b.iter(|| validate_address(black_box(LOWER)))
    });
    c.bench_function("shorten_address_evm", |b| {
        b.iter(|| shorten_address(black_box(MIXED), ChainId::Avalanche, 4))
    });
}

fn bench_math(c: &mut Criterion) {
    let big = BigUint::from(u128::MAX) * BigUint::from(u128::MAX);
    c.bench_function("apply_gas_margin_256bit", |b| b.iter(|| apply_gas_margin(black_box(&big))));

    let amount = CurrencyAmount::new(Currency::native(ChainId::Avalanche), big.clone());
    c.bench_function("slippage_bounds_256bit", |b| {
        b.iter(|| calculate_slippage_bounds(black_box(&amount), 50))
    });
}

criterion_group!(benches, bench_addresses, bench_math);
criterion_main!(benches);
