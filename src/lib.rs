//! delivery-planner core
//!
//! Assigns delivery customers to a fixed number of vehicles and orders each
//! vehicle's stops around a single depot: distance matrices from a road
//! service with great-circle fallback, balanced k-means grouping,
//! nearest-neighbor tour construction, and 2-opt improvement.

pub mod traits;
pub mod models;
pub mod haversine;
pub mod ors;
pub mod road;
pub mod cluster;
pub mod tour;
pub mod solver;
