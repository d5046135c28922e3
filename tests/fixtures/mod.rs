//! Test fixtures for delivery-planner.
//!
//! Provides:
//! - Bengaluru (Indiranagar / Domlur) locations for realistic scenarios
//! - Builders for orders and requests

#![allow(dead_code)]

pub mod bengaluru_locations;
pub mod builders;

#[allow(unused_imports)]
pub use bengaluru_locations::*;
#[allow(unused_imports)]
pub use builders::*;
