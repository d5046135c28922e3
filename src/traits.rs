//! Core traits for the delivery planner.
//!
//! Strategies are generic over how travel time is estimated, so tests and
//! other travel models can plug in without touching the search code.

use crate::model::{Coordinate, DeliveryRequest};
use crate::route::RouteResult;

/// Estimates travel time between two locations.
///
/// Implementations return minutes already rounded to two decimals, since
/// route timing accumulates rounded legs.
pub trait TravelTimeProvider {
    fn travel_minutes(&self, from: Coordinate, to: Coordinate) -> f64;
}

impl<T: TravelTimeProvider + ?Sized> TravelTimeProvider for &T {
    fn travel_minutes(&self, from: Coordinate, to: Coordinate) -> f64 {
        (**self).travel_minutes(from, to)
    }
}

/// Turns a set of orders into a timed pickup/deliver sequence.
///
/// Implementations must be pure: no state retained between calls.
pub trait RouteStrategy {
    fn optimize(&self, request: &DeliveryRequest) -> RouteResult;
}

impl<T: RouteStrategy + ?Sized> RouteStrategy for Box<T> {
    fn optimize(&self, request: &DeliveryRequest) -> RouteResult {
        (**self).optimize(request)
    }
}
