//! Realistic routing tests using Bengaluru neighbourhood locations.
//!
//! These run both strategies over larger order sets on the haversine model
//! and check the results hang together end to end.

mod fixtures;

use std::sync::Arc;
use std::thread;

use delivery_planner::{optimize_exact, optimize_greedy, DeliveryOptimizer, SolveOptions, Strategy};

use fixtures::neighbourhood_request;

#[test]
fn test_exact_never_worse_on_neighbourhood_orders() {
    for count in 1..=6 {
        let request = neighbourhood_request(count);
        let greedy = optimize_greedy(&request);
        let exact = optimize_exact(&request);

        println!(
            "{} orders: greedy {:.2} min, exact {:.2} min",
            count, greedy.total_time_minutes, exact.total_time_minutes
        );

        assert_eq!(greedy.len(), 2 * count);
        assert_eq!(exact.len(), 2 * count);
        assert!(exact.total_time_minutes <= greedy.total_time_minutes);
    }
}

#[test]
fn test_total_covers_latest_prep_time() {
    let request = neighbourhood_request(6);
    let latest_prep = request
        .orders
        .iter()
        .map(|order| order.prep_time())
        .fold(0.0, f64::max);

    for result in [optimize_greedy(&request), optimize_exact(&request)] {
        assert!(
            result.total_time_minutes >= latest_prep,
            "route finished at {} before the last order was ready at {}",
            result.total_time_minutes,
            latest_prep
        );
        // Neighbourhood legs are short; the whole route fits well within 2 hours
        assert!(result.total_time_minutes < 120.0);
    }
}

#[test]
fn test_exact_is_deterministic_across_runs() {
    let request = neighbourhood_request(7);
    let first = optimize_exact(&request);
    for _ in 0..3 {
        assert_eq!(optimize_exact(&request), first);
    }
}

#[test]
fn test_shared_optimizer_across_threads() {
    let optimizer = Arc::new(DeliveryOptimizer::from_options(
        &SolveOptions::default().with_strategy(Strategy::Tsp),
    ));
    let expected = optimizer.optimize(&neighbourhood_request(5));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let optimizer = Arc::clone(&optimizer);
            thread::spawn(move || optimizer.optimize(&neighbourhood_request(5)))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker thread"), expected);
    }
}
