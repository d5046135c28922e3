//! Builders for orders and requests with sensible defaults.

use delivery_planner::{Coordinate, Customer, DeliveryRequest, Order, Restaurant};

use super::bengaluru_locations::{Location, CUSTOMERS, HUB, RESTAURANTS};

/// Builder for test orders.
#[derive(Clone, Debug)]
pub struct TestOrder {
    restaurant: Location,
    customer: Location,
    prep_time: f64,
}

impl TestOrder {
    pub fn new(restaurant: &Location, customer: &Location) -> Self {
        Self {
            restaurant: restaurant.clone(),
            customer: customer.clone(),
            prep_time: 10.0,
        }
    }

    pub fn prep(mut self, minutes: f64) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn build(self) -> Order {
        Order::new(
            Restaurant::new(self.restaurant.name, self.restaurant.coords(), self.prep_time),
            Customer::new(self.customer.name, self.customer.coords()),
        )
    }
}

pub fn request(orders: Vec<TestOrder>) -> DeliveryRequest {
    DeliveryRequest::new(HUB.coords(), orders.into_iter().map(TestOrder::build).collect())
}

pub fn coordinate(location: &Location) -> Coordinate {
    Coordinate::from(location.coords())
}

/// The R1/C1 (prep 10) and R2/C2 (prep 5) pair used across scenarios.
pub fn two_order_request() -> DeliveryRequest {
    request(vec![
        TestOrder::new(&RESTAURANTS[0], &CUSTOMERS[0]).prep(10.0),
        TestOrder::new(&RESTAURANTS[1], &CUSTOMERS[1]).prep(5.0),
    ])
}

/// Pairs restaurant `i` with customer `i` for the first `count` entries.
pub fn neighbourhood_request(count: usize) -> DeliveryRequest {
    let orders = RESTAURANTS
        .iter()
        .zip(CUSTOMERS)
        .take(count)
        .enumerate()
        .map(|(i, (restaurant, customer))| {
            TestOrder::new(restaurant, customer).prep(5.0 + 4.0 * i as f64)
        })
        .collect();
    request(orders)
}
