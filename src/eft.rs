//! Greedy earliest-finish-time strategy.
//!
//! At each step the courier takes whichever remaining order would be
//! delivered soonest from its current position and clock. This is a myopic
//! heuristic: it is fast (O(N²) leg evaluations) but does not guarantee the
//! globally minimal total time. Use [`crate::tsp::ExhaustiveOptimizer`] when
//! an optimal answer is required and the order count is small.

use tracing::{debug, info};

use crate::haversine::{DEFAULT_SPEED_KMH, HaversineModel};
use crate::model::DeliveryRequest;
use crate::route::{CourierState, OrderLegs, RouteResult};
use crate::traits::{RouteStrategy, TravelTimeProvider};

#[derive(Debug, Clone)]
pub struct EarliestFinishOptimizer<P = HaversineModel> {
    travel: P,
}

impl EarliestFinishOptimizer<HaversineModel> {
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            travel: HaversineModel::new(speed_kmh),
        }
    }
}

impl Default for EarliestFinishOptimizer<HaversineModel> {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_KMH)
    }
}

impl<P> EarliestFinishOptimizer<P> {
    pub fn with_provider(travel: P) -> Self {
        Self { travel }
    }
}

impl<P: TravelTimeProvider> RouteStrategy for EarliestFinishOptimizer<P> {
    fn optimize(&self, request: &DeliveryRequest) -> RouteResult {
        let orders = &request.orders;
        let mut scheduled = vec![false; orders.len()];
        let mut state = CourierState::start(request.start_location);
        let mut steps = Vec::with_capacity(orders.len() * 2);

        for _ in 0..orders.len() {
            // Strict `<` keeps the earliest input order on ties
            let mut best: Option<(usize, OrderLegs)> = None;
            for (index, order) in orders.iter().enumerate() {
                if scheduled[index] {
                    continue;
                }
                let legs = state.legs_for(order, &self.travel);
                let better = match &best {
                    Some((_, best_legs)) => legs.total() < best_legs.total(),
                    None => true,
                };
                if better {
                    best = Some((index, legs));
                }
            }

            let Some((index, legs)) = best else {
                break;
            };

            let order = &orders[index];
            scheduled[index] = true;
            state.complete(order, &legs);
            steps.extend(legs.into_steps(order));

            debug!(
                restaurant = %order.restaurant.name,
                customer = %order.customer.name,
                elapsed_minutes = state.elapsed_minutes,
                "eft: committed order"
            );
        }

        info!(
            orders = orders.len(),
            total_minutes = state.elapsed_minutes,
            "eft: route complete"
        );

        RouteResult::new(state.elapsed_minutes, steps)
    }
}
