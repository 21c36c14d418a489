//! Test fixtures for delivery-planner.
//!
//! Provides the Ahmedabad dairy-distribution dataset the planner was built
//! around: one depot and a small set of sample customers.

pub mod ahmedabad_locations;

pub use ahmedabad_locations::*;
