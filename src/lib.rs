//! delivery-planner core
//!
//! Sequences restaurant pickups and customer drop-offs for a single courier,
//! using a haversine travel-time model and two interchangeable strategies.

pub mod error;
pub mod model;
pub mod haversine;
pub mod route;
pub mod traits;
pub mod permutations;
pub mod eft;
pub mod tsp;
pub mod solver;

pub use model::{Coordinate, Customer, DeliveryRequest, Order, Restaurant};
pub use route::{RouteResult, RouteStep};
pub use solver::{optimize_exact, optimize_greedy, solve, DeliveryOptimizer, SolveOptions, Strategy};
