// demos/src/bin/multi_pair_registry.rs

use demos::setup_logger;
use orderbook_index::{BookConfig, BookRegistry, Order, Side};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

// Number of threads per trading pair
const THREADS_PER_PAIR: usize = 2;
// Duration of the test in milliseconds
const TEST_DURATION_MS: u64 = 2000;

const PAIRS: [&str; 3] = ["BTC_USD", "ETH_USD", "SOL_USD"];

fn main() {
    // Set up logging
    setup_logger();
    info!("Multi-pair BookRegistry Example");
    info!("----------------------------------------");
    info!("Pairs: {:?}", PAIRS);
    info!("Threads per pair: {}", THREADS_PER_PAIR);
    info!("Duration: {} ms", TEST_DURATION_MS);

    let registry = Arc::new(BookRegistry::new(BookConfig::new(5, 5)));
    for pair in PAIRS {
        registry.register(pair);
    }

    run_workers(&registry);

    for pair in registry.trading_pairs() {
        if let Ok(market_data) = registry.market_data(&pair) {
            info!(
                "{}: best bid {:?}, best ask {:?}, shown bid volume {:?}, shown ask volume {:?}",
                pair,
                market_data.best_bid().map(|level| level.price.clone()),
                market_data.best_ask().map(|level| level.price.clone()),
                market_data.total_bid_volume(),
                market_data.total_ask_volume()
            );
        }
    }
}

fn run_workers(registry: &Arc<BookRegistry>) {
    let thread_count = PAIRS.len() * THREADS_PER_PAIR;
    let barrier = Arc::new(Barrier::new(thread_count + 1)); // +1 for main thread
    let running = Arc::new(AtomicBool::new(true));
    let operations = Arc::new(AtomicU64::new(0));

    let mut handles = Vec::with_capacity(thread_count);
    for thread_id in 0..thread_count {
        let thread_registry = Arc::clone(registry);
        let thread_barrier = Arc::clone(&barrier);
        let thread_running = Arc::clone(&running);
        let thread_operations = Arc::clone(&operations);
        let pair = PAIRS[thread_id % PAIRS.len()];
        let side = if thread_id / PAIRS.len() % 2 == 0 {
            Side::Bid
        } else {
            Side::Ask
        };

        handles.push(thread::spawn(move || {
            thread_barrier.wait();

            let mut counter: i64 = 0;
            while thread_running.load(Ordering::Relaxed) {
                let offset = counter % 10;
                let price = match side {
                    Side::Bid => Decimal::from(990 - offset),
                    Side::Ask => Decimal::from(1010 + offset),
                };
                if let Ok(order) = Order::new(pair, price, Decimal::ONE, side, "demo-worker") {
                    let id = order.id();
                    if thread_registry.add_order(order).is_ok() && counter % 4 != 0 {
                        let _ = thread_registry.remove_order(pair, &id);
                    }
                }
                counter += 1;
                thread_operations.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    barrier.wait();
    let start = Instant::now();
    thread::sleep(Duration::from_millis(TEST_DURATION_MS));
    running.store(false, Ordering::Relaxed);

    for handle in handles {
        let _ = handle.join();
    }

    let elapsed = start.elapsed();
    let total = operations.load(Ordering::Relaxed);
    info!(
        "Completed {} add cycles in {:.2?} ({:.0} ops/s)",
        total,
        elapsed,
        total as f64 / elapsed.as_secs_f64()
    );
}
