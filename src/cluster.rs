//! Balanced geographic clustering of customers into vehicle groups.
//!
//! Lloyd's k-means over raw lat/lng coordinates, which is a fine local-area
//! approximation for delivery territories. Attempts whose cluster sizes
//! spread too far apart are rerun with fresh random centroids.

use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ClusterOptions {
    /// Cap on Lloyd iterations within one clustering attempt.
    pub max_iterations: usize,
    /// Cap on balance-driven reruns before accepting the best attempt seen.
    pub max_rebalance_attempts: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_rebalance_attempts: 10,
        }
    }
}

/// Partitions `points` into `k` clusters, returning one cluster id in
/// `[0, k)` per input index.
///
/// An attempt is accepted when (max cluster size − min cluster size) is at
/// most half the average size; otherwise clustering reruns from fresh random
/// centroids, up to `max_rebalance_attempts`, after which the best-balanced
/// attempt wins.
///
/// Edge cases: empty input or `k == 0` yields an empty assignment; when
/// `points.len() <= k`, point `i` goes straight to cluster `min(i, k - 1)`.
pub fn assign_clusters<R: Rng>(
    points: &[(f64, f64)],
    k: usize,
    options: &ClusterOptions,
    rng: &mut R,
) -> Vec<usize> {
    if points.is_empty() || k == 0 {
        return Vec::new();
    }
    if points.len() <= k {
        return (0..points.len()).map(|i| i.min(k - 1)).collect();
    }

    let avg = points.len() as f64 / k as f64;
    let mut best_assignment = Vec::new();
    let mut best_spread = usize::MAX;

    for attempt in 0..options.max_rebalance_attempts.max(1) {
        let assignment = lloyd_attempt(points, k, options.max_iterations, rng);
        let spread = size_spread(&assignment, k);

        if (spread as f64) <= 0.5 * avg {
            return assignment;
        }

        debug!(attempt, spread, "cluster sizes too uneven, reseeding centroids");
        if spread < best_spread {
            best_spread = spread;
            best_assignment = assignment;
        }
    }

    best_assignment
}

/// One full k-means run: random distinct centroids, then assign/recompute
/// until a fixpoint or the iteration cap.
fn lloyd_attempt<R: Rng>(
    points: &[(f64, f64)],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n = points.len();

    let mut centroids: Vec<(f64, f64)> = Vec::with_capacity(k);
    let mut seeded = vec![false; n];
    while centroids.len() < k {
        let idx = rng.random_range(0..n);
        if seeded[idx] {
            continue;
        }
        seeded[idx] = true;
        centroids.push(points[idx]);
    }

    let mut clusters = vec![0usize; n];

    for _ in 0..max_iterations {
        let mut changed = false;

        // Assign each point to the nearest centroid, lowest id on ties.
        for (i, point) in points.iter().enumerate() {
            let mut min_dist = f64::MAX;
            let mut nearest = 0;
            for (j, centroid) in centroids.iter().enumerate() {
                let dist = (point.0 - centroid.0).powi(2) + (point.1 - centroid.1).powi(2);
                if dist < min_dist {
                    min_dist = dist;
                    nearest = j;
                }
            }
            if clusters[i] != nearest {
                clusters[i] = nearest;
                changed = true;
            }
        }

        if !changed {
            break;
        }

        // Recompute centroids; an emptied cluster reseeds at a random point.
        let mut sums = vec![(0.0f64, 0.0f64); k];
        let mut counts = vec![0usize; k];
        for (i, point) in points.iter().enumerate() {
            let cluster = clusters[i];
            sums[cluster].0 += point.0;
            sums[cluster].1 += point.1;
            counts[cluster] += 1;
        }
        for j in 0..k {
            if counts[j] > 0 {
                centroids[j] = (sums[j].0 / counts[j] as f64, sums[j].1 / counts[j] as f64);
            } else {
                centroids[j] = points[rng.random_range(0..n)];
            }
        }
    }

    clusters
}

fn size_spread(assignment: &[usize], k: usize) -> usize {
    let mut sizes = vec![0usize; k];
    for &cluster in assignment {
        sizes[cluster] += 1;
    }
    let max = sizes.iter().copied().max().unwrap_or(0);
    let min = sizes.iter().copied().min().unwrap_or(0);
    max - min
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_empty_input() {
        let assignment = assign_clusters(&[], 3, &ClusterOptions::default(), &mut rng());
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_zero_clusters() {
        let points = vec![(1.0, 1.0), (2.0, 2.0)];
        let assignment = assign_clusters(&points, 0, &ClusterOptions::default(), &mut rng());
        assert!(assignment.is_empty());
    }

    #[test]
    fn test_fewer_points_than_clusters() {
        let points = vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
        let assignment = assign_clusters(&points, 5, &ClusterOptions::default(), &mut rng());
        assert_eq!(assignment, vec![0, 1, 2]);
    }

    #[test]
    fn test_points_equal_clusters() {
        let points = vec![(1.0, 1.0), (2.0, 2.0)];
        let assignment = assign_clusters(&points, 2, &ClusterOptions::default(), &mut rng());
        assert_eq!(assignment, vec![0, 1]);
    }

    #[test]
    fn test_covers_every_point_with_valid_ids() {
        let points: Vec<(f64, f64)> = (0..20)
            .map(|i| (23.0 + (i as f64) * 0.01, 72.5 + ((i * 7) % 13) as f64 * 0.01))
            .collect();
        let k = 3;
        let assignment = assign_clusters(&points, k, &ClusterOptions::default(), &mut rng());

        assert_eq!(assignment.len(), points.len());
        for &cluster in &assignment {
            assert!(cluster < k);
        }
    }

    #[test]
    fn test_separated_blobs_land_in_distinct_clusters() {
        // Two tight blobs far apart; k-means must not mix them.
        let mut points = Vec::new();
        for i in 0..6 {
            points.push((10.0 + i as f64 * 0.001, 10.0));
        }
        for i in 0..6 {
            points.push((50.0 + i as f64 * 0.001, 50.0));
        }

        let assignment = assign_clusters(&points, 2, &ClusterOptions::default(), &mut rng());

        let first = assignment[0];
        assert!(assignment[..6].iter().all(|&c| c == first));
        let second = assignment[6];
        assert!(assignment[6..].iter().all(|&c| c == second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_assignment() {
        let points: Vec<(f64, f64)> = (0..15)
            .map(|i| ((i % 4) as f64, (i / 4) as f64))
            .collect();
        let options = ClusterOptions::default();

        let a = assign_clusters(&points, 3, &options, &mut StdRng::seed_from_u64(7));
        let b = assign_clusters(&points, 3, &options, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rebalance_cap_still_covers_all_points() {
        // Heavily skewed layout: one far outlier against a dense blob. Even
        // when no attempt passes the balance check, the best one is returned.
        let mut points = vec![(100.0, 100.0)];
        for i in 0..11 {
            points.push((0.0, i as f64 * 0.0001));
        }

        let options = ClusterOptions {
            max_iterations: 100,
            max_rebalance_attempts: 3,
        };
        let assignment = assign_clusters(&points, 2, &options, &mut rng());

        assert_eq!(assignment.len(), points.len());
        for &cluster in &assignment {
            assert!(cluster < 2);
        }
    }
}
