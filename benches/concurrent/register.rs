use criterion::{BenchmarkId, Criterion};
use orderbook_index::{BookRegistry, Order, Side};
use rust_decimal::Decimal;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

const PAIRS: [&str; 4] = ["BTC_USD", "ETH_USD", "SOL_USD", "XRP_USD"];

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("BookRegistry - Concurrent Operations");

    // Test with various thread counts
    for thread_count in [2, 4, 8].iter() {
        group.bench_with_input(
            BenchmarkId::new("shared_pair_add_remove", thread_count),
            thread_count,
            |b, &thread_count| {
                b.iter_custom(|iters| measure_concurrent_operation(thread_count, iters, 1));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pair_per_thread_add_remove", thread_count),
            thread_count,
            |b, &thread_count| {
                b.iter_custom(|iters| {
                    measure_concurrent_operation(thread_count, iters, PAIRS.len())
                });
            },
        );
    }

    group.finish();
}

/// Measures time for add/remove/snapshot cycles spread over `pair_count` books
fn measure_concurrent_operation(thread_count: usize, iterations: u64, pair_count: usize) -> Duration {
    let registry = Arc::new(BookRegistry::default());
    for pair in PAIRS.iter().take(pair_count) {
        registry.register(pair);
    }
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread

    let mut handles = Vec::with_capacity(thread_count);

    for thread_id in 0..thread_count {
        let thread_registry = Arc::clone(&registry);
        let thread_barrier = Arc::clone(&barrier);
        let pair = PAIRS[thread_id % pair_count];

        handles.push(thread::spawn(move || {
            // Wait for all threads to be ready
            thread_barrier.wait();

            for i in 0..iterations {
                let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
                let price = Decimal::from(1000 + (i % 20));
                if let Ok(order) = Order::new(pair, price, Decimal::ONE, side, "bench") {
                    let id = order.id();
                    if thread_registry.add_order(order).is_ok() && i % 3 != 0 {
                        let _ = thread_registry.remove_order(pair, &id);
                    }
                }
                if i % 10 == 0 {
                    let _ = thread_registry.market_data(pair);
                }
            }

            // Signal completion
            thread_barrier.wait();
        }));
    }

    // Start timing
    barrier.wait();
    let start = Instant::now();

    // Wait for all threads to complete
    barrier.wait();
    let duration = start.elapsed();

    // Join all threads
    for handle in handles {
        let _ = handle.join();
    }

    duration
}
