//! Error types for the request boundary and configuration.
//!
//! The optimization core itself is infallible; these errors only surface
//! when validating incoming requests or reading configuration.

use thiserror::Error;

/// A request value that breaks one of the data-model invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { field: String, value: f64 },

    #[error("{field}: longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange { field: String, value: f64 },

    #[error("order {order}: {party} name must not be empty")]
    EmptyName { order: usize, party: &'static str },

    #[error("order {order}: prep_time must be a positive number of minutes, got {value}")]
    InvalidPrepTime { order: usize, value: f64 },

    // Raised while deserializing, before the order index is known
    #[error("order is missing prep_time")]
    MissingPrepTime,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy `{0}` (expected `eft` or `tsp`)")]
pub struct ParseStrategyError(pub String);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("courier speed must be a positive number of km/h, got {0}")]
    InvalidSpeed(f64),

    #[error("{var}: cannot parse `{value}` as a speed")]
    UnparseableSpeed { var: &'static str, value: String },

    #[error("{var}: {source}")]
    Strategy {
        var: &'static str,
        #[source]
        source: ParseStrategyError,
    },
}
