//! Request-side data model: coordinates, parties and orders.
//!
//! Values here are plain data. `DeliveryRequest::validate` checks the
//! boundary invariants; the strategies assume they already hold.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    fn validate(&self, field: impl Fn() -> String) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange {
                field: field(),
                value: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange {
                field: field(),
                value: self.longitude,
            });
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// Pickup side of an order.
///
/// `prep_time` is measured in minutes from route start (t = 0), not from the
/// courier's arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub location: Coordinate,
    pub prep_time: f64,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, location: impl Into<Coordinate>, prep_time: f64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            prep_time,
        }
    }
}

/// Drop-off side of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub location: Coordinate,
}

impl Customer {
    pub fn new(name: impl Into<String>, location: impl Into<Coordinate>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderWire")]
pub struct Order {
    pub restaurant: Restaurant,
    pub customer: Customer,
}

impl Order {
    pub fn new(restaurant: Restaurant, customer: Customer) -> Self {
        Self { restaurant, customer }
    }

    pub fn prep_time(&self) -> f64 {
        self.restaurant.prep_time
    }
}

/// Accepts `prep_time` either on the restaurant or on the order itself.
#[derive(Deserialize)]
struct OrderWire {
    restaurant: RestaurantWire,
    customer: Customer,
    #[serde(default)]
    prep_time: Option<f64>,
}

#[derive(Deserialize)]
struct RestaurantWire {
    name: String,
    location: Coordinate,
    #[serde(default)]
    prep_time: Option<f64>,
}

impl TryFrom<OrderWire> for Order {
    type Error = ValidationError;

    fn try_from(wire: OrderWire) -> Result<Self, Self::Error> {
        let prep_time = wire
            .restaurant
            .prep_time
            .or(wire.prep_time)
            .ok_or(ValidationError::MissingPrepTime)?;

        Ok(Order {
            restaurant: Restaurant {
                name: wire.restaurant.name,
                location: wire.restaurant.location,
                prep_time,
            },
            customer: wire.customer,
        })
    }
}

/// A courier start position plus the orders to route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    #[serde(alias = "delivery_start_location")]
    pub start_location: Coordinate,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl DeliveryRequest {
    pub fn new(start_location: impl Into<Coordinate>, orders: Vec<Order>) -> Self {
        Self {
            start_location: start_location.into(),
            orders,
        }
    }

    /// Check coordinate bounds, names and prep times.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.start_location.validate(|| "start_location".to_string())?;

        for (index, order) in self.orders.iter().enumerate() {
            if order.restaurant.name.trim().is_empty() {
                return Err(ValidationError::EmptyName { order: index, party: "restaurant" });
            }
            if order.customer.name.trim().is_empty() {
                return Err(ValidationError::EmptyName { order: index, party: "customer" });
            }

            order
                .restaurant
                .location
                .validate(|| format!("order {index} restaurant"))?;
            order
                .customer
                .location
                .validate(|| format!("order {index} customer"))?;

            let prep_time = order.prep_time();
            if !prep_time.is_finite() || prep_time <= 0.0 {
                return Err(ValidationError::InvalidPrepTime { order: index, value: prep_time });
            }
        }

        Ok(())
    }
}
