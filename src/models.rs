//! Inbound and outbound data records for the planner.
//!
//! `Customer` and `Depot` are supplied by the data-loading collaborator and
//! are never mutated by the pipeline. `VehicleRoute` is the finished result
//! handed to the rendering/listing collaborator, read-only after return.

use serde::{Deserialize, Serialize};

/// A delivery point to be routed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub business_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub maps_link: Option<String>,
}

impl Customer {
    /// Location as a (lat, lng) pair.
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// The single depot every vehicle tour starts from and returns to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub maps_link: Option<String>,
}

impl Depot {
    /// Location as a (lat, lng) pair.
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// One stop on a vehicle's route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub customer: Customer,
    /// 1-based position in visit order.
    pub sequence_number: usize,
}

/// A finished route for one vehicle slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRoute {
    pub id: String,
    pub name: String,
    pub color: String,
    pub stops: Vec<RouteStop>,
    /// Closed-tour distance in kilometers, both depot legs included.
    pub total_distance: f64,
}

/// Display colors for vehicle slots, cycled when slots run past the end.
pub const VEHICLE_COLORS: [&str; 8] = [
    "#0F52BA", "#00AB66", "#D2691E", "#8B008B", "#B22222", "#2F4F4F", "#DAA520", "#4B0082",
];

/// Cosmetic display name and color for a vehicle slot.
pub fn vehicle_style(slot: usize) -> (String, &'static str) {
    (
        format!("Route Truck {}", slot + 1),
        VEHICLE_COLORS[slot % VEHICLE_COLORS.len()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_style_first_slots() {
        let (name, color) = vehicle_style(0);
        assert_eq!(name, "Route Truck 1");
        assert_eq!(color, "#0F52BA");

        let (name, color) = vehicle_style(1);
        assert_eq!(name, "Route Truck 2");
        assert_eq!(color, "#00AB66");
    }

    #[test]
    fn test_vehicle_style_cycles_colors() {
        let (name, color) = vehicle_style(VEHICLE_COLORS.len());
        assert_eq!(name, format!("Route Truck {}", VEHICLE_COLORS.len() + 1));
        assert_eq!(color, VEHICLE_COLORS[0]);
    }
}
