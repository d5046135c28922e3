//! Route steps, results and the courier state threaded through a strategy.

use serde::{Deserialize, Serialize};

use crate::haversine::round2;
use crate::model::{Coordinate, Order};
use crate::traits::TravelTimeProvider;

/// One action in a computed route.
///
/// `travel_time_minutes` is the time spent reaching this step's location from
/// the previous one. `wait_time_minutes` is idle time at the restaurant until
/// the food is ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum RouteStep {
    Pickup {
        location: Coordinate,
        restaurant_name: String,
        travel_time_minutes: f64,
        wait_time_minutes: f64,
    },
    Deliver {
        location: Coordinate,
        customer_name: String,
        travel_time_minutes: f64,
    },
}

impl RouteStep {
    pub fn location(&self) -> Coordinate {
        match self {
            RouteStep::Pickup { location, .. } | RouteStep::Deliver { location, .. } => *location,
        }
    }

    /// Restaurant name for pickups, customer name for deliveries.
    pub fn party_name(&self) -> &str {
        match self {
            RouteStep::Pickup { restaurant_name, .. } => restaurant_name,
            RouteStep::Deliver { customer_name, .. } => customer_name,
        }
    }

    pub fn travel_time_minutes(&self) -> f64 {
        match self {
            RouteStep::Pickup { travel_time_minutes, .. }
            | RouteStep::Deliver { travel_time_minutes, .. } => *travel_time_minutes,
        }
    }

    /// Zero for deliveries.
    pub fn wait_time_minutes(&self) -> f64 {
        match self {
            RouteStep::Pickup { wait_time_minutes, .. } => *wait_time_minutes,
            RouteStep::Deliver { .. } => 0.0,
        }
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self, RouteStep::Pickup { .. })
    }
}

/// Output of any strategy: the step sequence plus total elapsed time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub total_time_minutes: f64,
    pub detailed_steps: Vec<RouteStep>,
}

impl RouteResult {
    pub fn new(total_time_minutes: f64, detailed_steps: Vec<RouteStep>) -> Self {
        Self {
            total_time_minutes: round2(total_time_minutes),
            detailed_steps,
        }
    }

    pub fn len(&self) -> usize {
        self.detailed_steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detailed_steps.is_empty()
    }

    pub fn total_travel_minutes(&self) -> f64 {
        round2(self.detailed_steps.iter().map(RouteStep::travel_time_minutes).sum())
    }

    pub fn total_wait_minutes(&self) -> f64 {
        round2(self.detailed_steps.iter().map(RouteStep::wait_time_minutes).sum())
    }
}

/// Timing of a single order served from a given courier state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderLegs {
    pub to_restaurant: f64,
    pub wait: f64,
    pub to_customer: f64,
}

impl OrderLegs {
    /// Minutes from leaving the current location until the drop-off.
    pub fn total(&self) -> f64 {
        self.to_restaurant + self.wait + self.to_customer
    }

    pub fn into_steps(self, order: &Order) -> [RouteStep; 2] {
        [
            RouteStep::Pickup {
                location: order.restaurant.location,
                restaurant_name: order.restaurant.name.clone(),
                travel_time_minutes: self.to_restaurant,
                wait_time_minutes: self.wait,
            },
            RouteStep::Deliver {
                location: order.customer.location,
                customer_name: order.customer.name.clone(),
                travel_time_minutes: self.to_customer,
            },
        ]
    }
}

/// Where the courier is and how many minutes have elapsed since route start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourierState {
    pub location: Coordinate,
    pub elapsed_minutes: f64,
}

impl CourierState {
    pub fn start(location: Coordinate) -> Self {
        Self {
            location,
            elapsed_minutes: 0.0,
        }
    }

    /// Cost of serving `order` next: travel to the restaurant, wait for the
    /// food, travel on to the customer. Every leg is rounded to two decimals.
    pub fn legs_for<P>(&self, order: &Order, travel: &P) -> OrderLegs
    where
        P: TravelTimeProvider + ?Sized,
    {
        let to_restaurant = round2(travel.travel_minutes(self.location, order.restaurant.location));
        let arrival = self.elapsed_minutes + to_restaurant;
        let wait = round2((order.prep_time() - arrival).max(0.0));
        let to_customer = round2(
            travel.travel_minutes(order.restaurant.location, order.customer.location),
        );

        OrderLegs {
            to_restaurant,
            wait,
            to_customer,
        }
    }

    /// Commit a served order: the clock advances by the legs, the courier
    /// ends at the customer.
    pub fn complete(&mut self, order: &Order, legs: &OrderLegs) {
        self.elapsed_minutes = round2(self.elapsed_minutes + legs.total());
        self.location = order.customer.location;
    }
}
