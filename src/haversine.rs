//! Haversine distance matrix provider (fallback when the road service is unavailable).
//!
//! Uses great-circle distance in kilometers.
//! Less accurate than road distances (ignores the street network) but always available.

use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine-based distance matrix provider.
///
/// Produces a symmetric matrix with a zero diagonal. Used as the geometric
/// fallback behind the road provider, and directly in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i != j {
                    matrix[i][j] = haversine_km(*from, *to);
                }
            }
        }

        matrix
    }
}
