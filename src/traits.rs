//! Core seam for distance matrix acquisition.

/// Provides a pairwise travel-distance matrix for an ordered point set.
///
/// Points are (latitude, longitude) pairs. The returned matrix is indexed by
/// the input order and holds kilometers. Implementations must return a fully
/// populated square matrix with a zero diagonal; road-backed matrices may be
/// asymmetric by direction.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>>;
}
