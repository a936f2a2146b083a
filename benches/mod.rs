use criterion::{criterion_group, criterion_main};


use concurrent::register_benchmarks as register_concurrent_benchmarks;
use order_book::register_benchmarks as register_order_book_benchmarks;

// Define the benchmark groups
criterion_group!(
    benches,
    register_order_book_benchmarks,
    register_concurrent_benchmarks,
);

criterion_main!(benches);
