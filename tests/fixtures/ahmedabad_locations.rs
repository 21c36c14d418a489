//! Ahmedabad delivery locations for pipeline test fixtures.

use delivery_planner::models::{Customer, Depot};

fn customer(id: &str, business_name: &str, lat: f64, lng: f64) -> Customer {
    Customer {
        id: id.to_string(),
        business_name: business_name.to_string(),
        latitude: lat,
        longitude: lng,
        maps_link: None,
    }
}

/// The dairy head-office depot every route starts from.
pub fn depot() -> Depot {
    Depot {
        name: "Jain Dairy Products Pvt. Ltd. - Head Office".to_string(),
        latitude: 23.0372138,
        longitude: 72.560198,
        maps_link: None,
    }
}

/// Five sample delivery customers around the depot.
pub fn sample_customers() -> Vec<Customer> {
    vec![
        customer("C001", "Sample Customer 1", 23.0425, 72.5700),
        customer("C002", "Sample Customer 2", 23.0450, 72.5650),
        customer("C003", "Sample Customer 3", 23.0380, 72.5670),
        customer("C004", "Sample Customer 4", 23.0390, 72.5530),
        customer("C005", "Sample Customer 5", 23.0320, 72.5580),
    ]
}
