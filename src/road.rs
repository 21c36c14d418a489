//! Road-first distance provider with geometric fallback.

use tracing::warn;

use crate::haversine::HaversineMatrix;
use crate::ors::OrsClient;
use crate::traits::DistanceMatrixProvider;

/// Distance provider that prefers road distances from OpenRouteService and
/// falls back to great-circle distances when the service cannot deliver a
/// usable matrix.
///
/// The fallback makes `matrix_for` total: callers always receive a fully
/// populated matrix, and a failed road request surfaces only as a warning.
#[derive(Debug, Clone)]
pub struct RoadMatrix {
    ors: OrsClient,
    fallback: HaversineMatrix,
}

impl RoadMatrix {
    pub fn new(ors: OrsClient) -> Self {
        Self {
            ors,
            fallback: HaversineMatrix,
        }
    }
}

impl DistanceMatrixProvider for RoadMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>> {
        // The matrix endpoint needs at least two locations.
        if locations.len() < 2 {
            return self.fallback.matrix_for(locations);
        }

        match self.ors.try_matrix(locations) {
            Ok(matrix) => matrix,
            Err(err) => {
                warn!(
                    error = ?err,
                    points = locations.len(),
                    "road distance request failed, using great-circle distances"
                );
                self.fallback.matrix_for(locations)
            }
        }
    }
}
