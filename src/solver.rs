//! Route planning pipeline: cluster, matrix, construct, improve, assemble.

use rand::Rng;
use rayon::prelude::*;

use crate::cluster::{ClusterOptions, assign_clusters};
use crate::models::{Customer, Depot, RouteStop, VehicleRoute, vehicle_style};
use crate::tour::{nearest_neighbor_tour, tour_length, two_opt};
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Number of vehicle slots (clusters) to plan for.
    pub vehicles: usize,
    pub cluster: ClusterOptions,
    /// Maximum full 2-opt passes per tour.
    pub two_opt_passes: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            vehicles: 2,
            cluster: ClusterOptions::default(),
            two_opt_passes: 100,
        }
    }
}

/// Plans one route per non-empty vehicle group.
///
/// Customers are clustered into `options.vehicles` balanced groups, then each
/// group independently gets a distance matrix (depot at index 0), a
/// nearest-neighbor tour, and 2-opt improvement. Group pipelines run in
/// parallel and share nothing; the returned routes are in vehicle slot order.
///
/// Zero customers or zero vehicles yields an empty list.
pub fn plan_routes<M, R>(
    customers: &[Customer],
    depot: &Depot,
    matrix_provider: &M,
    options: &PlanOptions,
    rng: &mut R,
) -> Vec<VehicleRoute>
where
    M: DistanceMatrixProvider + Sync,
    R: Rng,
{
    if customers.is_empty() || options.vehicles == 0 {
        return Vec::new();
    }

    let points: Vec<(f64, f64)> = customers.iter().map(Customer::location).collect();
    let clusters = assign_clusters(&points, options.vehicles, &options.cluster, rng);

    let mut groups: Vec<Vec<Customer>> = vec![Vec::new(); options.vehicles];
    for (idx, &cluster) in clusters.iter().enumerate() {
        groups[cluster].push(customers[idx].clone());
    }

    groups
        .into_par_iter()
        .enumerate()
        .filter(|(_, group)| !group.is_empty())
        .map(|(slot, group)| {
            let mut locations = Vec::with_capacity(group.len() + 1);
            locations.push(depot.location());
            locations.extend(group.iter().map(Customer::location));

            let matrix = matrix_provider.matrix_for(&locations);
            let tour = nearest_neighbor_tour(0, locations.len(), &matrix);
            let tour = two_opt(&tour, &matrix, options.two_opt_passes);

            assemble_route(slot, &group, &tour, &matrix)
        })
        .collect()
}

/// Maps an improved tour back to customer identities for one vehicle slot.
///
/// Tour positions between the two depot endpoints become stops with 1-based
/// sequence numbers in visit order; the total is the exact sum of matrix
/// entries along the closed tour, both depot legs included. Display name and
/// color come from the slot palette.
pub fn assemble_route(
    slot: usize,
    group: &[Customer],
    tour: &[usize],
    matrix: &[Vec<f64>],
) -> VehicleRoute {
    let mut stops = Vec::with_capacity(group.len());

    for position in 1..tour.len().saturating_sub(1) {
        // Depot occupies matrix index 0, so customer i sits at node i + 1.
        let node = tour[position];
        if let Some(customer) = node.checked_sub(1).and_then(|idx| group.get(idx)) {
            stops.push(RouteStop {
                customer: customer.clone(),
                sequence_number: position,
            });
        }
    }

    let (name, color) = vehicle_style(slot);

    VehicleRoute {
        id: format!("truck-{}", slot + 1),
        name,
        color: color.to_string(),
        stops,
        total_distance: tour_length(tour, matrix),
    }
}
