//! Tour construction and 2-opt improvement over a distance matrix.

/// Builds a closed tour over all `n` matrix indices with greedy nearest
/// neighbor, starting and ending at `start`.
///
/// From the current node, moves to the nearest unvisited node, ties going to
/// the lowest index. O(n²) comparisons. A single-member group yields the
/// three-node tour depot → member → depot.
pub fn nearest_neighbor_tour(start: usize, n: usize, matrix: &[Vec<f64>]) -> Vec<usize> {
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n + 1);

    tour.push(start);
    visited[start] = true;
    let mut current = start;

    for _ in 1..n {
        let mut best_dist = f64::MAX;
        let mut best_idx = None;

        for j in 0..n {
            if !visited[j] && matrix[current][j] < best_dist {
                best_dist = matrix[current][j];
                best_idx = Some(j);
            }
        }

        if let Some(next) = best_idx {
            tour.push(next);
            visited[next] = true;
            current = next;
        }
    }

    // Return to start
    tour.push(start);
    tour
}

/// Total length of `tour` as the sum of consecutive matrix entries.
pub fn tour_length(tour: &[usize], matrix: &[Vec<f64>]) -> f64 {
    tour.windows(2).map(|pair| matrix[pair[0]][pair[1]]).sum()
}

/// Improves a closed tour with 2-opt local search.
///
/// Scans interior index pairs (i, j); when replacing edges
/// (tour[i−1], tour[i]) and (tour[j], tour[j+1]) with their reconnection is
/// shorter, reverses the segment [i..=j] and keeps the result only if the
/// whole tour got shorter than the best known. Full passes repeat until one
/// makes no improvement or `max_passes` is reached. The endpoints never
/// move, so the tour still starts and ends at the depot. Deterministic for a
/// fixed tour and matrix.
pub fn two_opt(tour: &[usize], matrix: &[Vec<f64>], max_passes: usize) -> Vec<usize> {
    if tour.len() < 4 {
        return tour.to_vec();
    }

    let mut best = tour.to_vec();
    let mut best_length = tour_length(&best, matrix);
    let mut current = best.clone();

    for _ in 0..max_passes {
        let mut improved = false;

        for i in 1..current.len() - 2 {
            for j in i + 1..current.len() - 1 {
                // Adjacent edges share a node; nothing to reconnect.
                if j - i == 1 {
                    continue;
                }

                let a = current[i - 1];
                let b = current[i];
                let c = current[j];
                let d = current[j + 1];

                if matrix[a][c] + matrix[b][d] < matrix[a][b] + matrix[c][d] {
                    let mut candidate = current.clone();
                    candidate[i..=j].reverse();

                    let candidate_length = tour_length(&candidate, matrix);
                    if candidate_length < best_length {
                        best_length = candidate_length;
                        best = candidate;
                        improved = true;
                    }
                }
            }
        }

        if !improved {
            break;
        }
        current = best.clone();
    }

    best
}
