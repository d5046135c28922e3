//! Exact strategy: exhaustive search over every order sequence.
//!
//! Every one of the N! orderings is simulated from the same start state and
//! the fastest one wins. This is optimal for the travel model in use but
//! scales factorially: 10 orders is already 3.6 million simulations, and each
//! order beyond that multiplies the work. There is no pruning and no fallback
//! to the greedy strategy; callers that need a time bound must impose it
//! themselves.
//!
//! Permutations are partitioned by which order goes first. Partitions run on
//! the rayon pool and are reduced in partition order, so on exact ties the
//! result is the first winner of the sequential enumeration.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::haversine::{DEFAULT_SPEED_KMH, HaversineModel};
use crate::model::{Coordinate, DeliveryRequest, Order};
use crate::permutations::HeapPermutations;
use crate::route::{CourierState, RouteResult};
use crate::traits::{RouteStrategy, TravelTimeProvider};

/// Order count above which a warning about factorial run time is logged.
pub const EXHAUSTIVE_ORDER_SOFT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct ExhaustiveOptimizer<P = HaversineModel> {
    travel: P,
}

impl ExhaustiveOptimizer<HaversineModel> {
    pub fn new(speed_kmh: f64) -> Self {
        Self {
            travel: HaversineModel::new(speed_kmh),
        }
    }
}

impl Default for ExhaustiveOptimizer<HaversineModel> {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_KMH)
    }
}

/// Best sequence found within one partition.
#[derive(Debug, Clone)]
struct Candidate {
    total_minutes: f64,
    sequence: Vec<usize>,
}

impl<P: TravelTimeProvider + Sync> ExhaustiveOptimizer<P> {
    pub fn with_provider(travel: P) -> Self {
        Self { travel }
    }

    /// Elapsed minutes after serving `sequence` in order.
    fn simulate(&self, start: Coordinate, orders: &[Order], sequence: &[usize]) -> f64 {
        let mut state = CourierState::start(start);
        for &index in sequence {
            let order = &orders[index];
            let legs = state.legs_for(order, &self.travel);
            state.complete(order, &legs);
        }
        state.elapsed_minutes
    }

    /// Fastest sequence among those starting with order `lead`.
    fn best_with_lead(&self, start: Coordinate, orders: &[Order], lead: usize) -> Candidate {
        let rest: Vec<usize> = (0..orders.len()).filter(|&index| index != lead).collect();
        let mut permutations = HeapPermutations::new(rest);

        let mut sequence = Vec::with_capacity(orders.len());
        let mut best: Option<Candidate> = None;

        while let Some(tail) = permutations.next_permutation() {
            sequence.clear();
            sequence.push(lead);
            sequence.extend_from_slice(tail);

            let total_minutes = self.simulate(start, orders, &sequence);
            let improved = match &best {
                Some(candidate) => total_minutes < candidate.total_minutes,
                None => true,
            };
            if improved {
                debug!(lead, total_minutes, "tsp: improved candidate");
                best = Some(Candidate {
                    total_minutes,
                    sequence: sequence.clone(),
                });
            }
        }

        // Heap's algorithm yields at least one arrangement, even when empty
        best.unwrap_or(Candidate {
            total_minutes: f64::INFINITY,
            sequence: vec![lead],
        })
    }

    /// Replay a sequence, this time recording the steps.
    fn route_for(&self, start: Coordinate, orders: &[Order], sequence: &[usize]) -> RouteResult {
        let mut state = CourierState::start(start);
        let mut steps = Vec::with_capacity(sequence.len() * 2);
        for &index in sequence {
            let order = &orders[index];
            let legs = state.legs_for(order, &self.travel);
            state.complete(order, &legs);
            steps.extend(legs.into_steps(order));
        }
        RouteResult::new(state.elapsed_minutes, steps)
    }
}

impl<P: TravelTimeProvider + Sync> RouteStrategy for ExhaustiveOptimizer<P> {
    fn optimize(&self, request: &DeliveryRequest) -> RouteResult {
        let orders = &request.orders;
        if orders.is_empty() {
            return RouteResult::default();
        }

        if orders.len() > EXHAUSTIVE_ORDER_SOFT_LIMIT {
            warn!(
                orders = orders.len(),
                limit = EXHAUSTIVE_ORDER_SOFT_LIMIT,
                "tsp: exhaustive search over this many orders grows factorially and may be very slow"
            );
        }

        let start = request.start_location;
        let best = (0..orders.len())
            .into_par_iter()
            .map(|lead| {
                let candidate = self.best_with_lead(start, orders, lead);
                debug!(lead, total_minutes = candidate.total_minutes, "tsp: partition done");
                candidate
            })
            // Left operand is the earlier partition; it keeps ties
            .reduce_with(|left, right| {
                if right.total_minutes < left.total_minutes {
                    right
                } else {
                    left
                }
            });

        let Some(best) = best else {
            return RouteResult::default();
        };

        let result = self.route_for(start, orders, &best.sequence);
        info!(
            orders = orders.len(),
            total_minutes = result.total_time_minutes,
            "tsp: route complete"
        );
        result
    }
}
