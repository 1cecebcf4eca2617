//! Dense Euclidean distance model.

use super::city::City;
use crate::error::ConfigError;

/// A visiting order: a permutation of city indices `0..n`.
///
/// The tour is implicitly closed; the last city connects back to the first.
pub type Tour = Vec<usize>;

/// A fixed city catalog with a precomputed n×n distance matrix.
///
/// The matrix is stored in row-major order. The catalog never changes after
/// construction.
///
/// # Examples
///
/// ```
/// use u_memetic::distance::DistanceModel;
///
/// let model = DistanceModel::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
///     .unwrap();
/// assert_eq!(model.size(), 4);
/// assert!((model.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceModel {
    cities: Vec<City>,
    data: Vec<f64>,
    size: usize,
}

impl DistanceModel {
    /// Builds the model from a city catalog.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyCatalog`] if `cities` is empty,
    /// [`ConfigError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    pub fn new(cities: Vec<City>) -> Result<Self, ConfigError> {
        if cities.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if let Some(index) = cities.iter().position(|c| !c.is_finite()) {
            return Err(ConfigError::NonFiniteCoordinate { index });
        }

        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Ok(Self {
            cities,
            data,
            size: n,
        })
    }

    /// Builds the model from `(x, y)` pairs; index = city id.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Result<Self, ConfigError> {
        Self::new(coordinates.iter().copied().map(City::from).collect())
    }

    /// Number of cities (genes per tour).
    pub fn size(&self) -> usize {
        self.size
    }

    /// The city catalog in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Euclidean distance between city `i` and city `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Total length of the closed tour, including the edge from the last
    /// city back to the first. Lower is better.
    ///
    /// A single-city tour has length 0.
    ///
    /// # Complexity
    /// O(n)
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let (first, last) = match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0.0,
        };
        let open: f64 = tour.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        open + self.distance(last, first)
    }

    /// Returns `true` if `tour` is a permutation of `0..size()`.
    pub fn is_tour(&self, tour: &[usize]) -> bool {
        if tour.len() != self.size {
            return false;
        }
        let mut seen = vec![false; self.size];
        for &city in tour {
            if city >= self.size || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> DistanceModel {
        DistanceModel::from_coordinates(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
            .expect("valid catalog")
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            DistanceModel::new(Vec::new()).unwrap_err(),
            ConfigError::EmptyCatalog
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = DistanceModel::from_coordinates(&[(0.0, 0.0), (f64::NAN, 1.0)]).unwrap_err();
        assert_eq!(err, ConfigError::NonFiniteCoordinate { index: 1 });
    }

    #[test]
    fn test_distance_symmetric_and_zero_diagonal() {
        let m = unit_square();
        for i in 0..4 {
            assert_eq!(m.distance(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(m.distance(i, j), m.distance(j, i));
                assert!(m.distance(i, j) >= 0.0);
            }
        }
        assert!((m.distance(0, 2) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_square() {
        let m = unit_square();
        assert!((m.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
        // Crossing diagonals
        let crossed = m.tour_length(&[0, 2, 1, 3]);
        assert!((crossed - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-10);
    }

    #[test]
    fn test_single_city_tour_is_zero() {
        let m = DistanceModel::from_coordinates(&[(3.0, 4.0)]).unwrap();
        assert_eq!(m.tour_length(&[0]), 0.0);
    }

    #[test]
    fn test_two_city_tour_is_round_trip() {
        let m = DistanceModel::from_coordinates(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
        assert!((m.tour_length(&[0, 1]) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_rotation_and_reversal_invariant() {
        let m = DistanceModel::from_coordinates(&[
            (0.0, 0.0),
            (5.0, 1.0),
            (2.0, 7.0),
            (9.0, 3.0),
            (4.0, 4.0),
        ])
        .unwrap();
        let tour = vec![0, 3, 1, 4, 2];
        let base = m.tour_length(&tour);

        let mut rotated = tour.clone();
        for _ in 0..tour.len() {
            rotated.rotate_left(1);
            assert!((m.tour_length(&rotated) - base).abs() < 1e-9);
        }

        let reversed: Vec<usize> = tour.iter().rev().copied().collect();
        assert!((m.tour_length(&reversed) - base).abs() < 1e-9);
    }

    #[test]
    fn test_is_tour() {
        let m = unit_square();
        assert!(m.is_tour(&[2, 0, 3, 1]));
        assert!(!m.is_tour(&[0, 1, 2]));
        assert!(!m.is_tour(&[0, 1, 1, 3]));
        assert!(!m.is_tour(&[0, 1, 2, 4]));
    }

    #[test]
    fn test_cities_preserved() {
        let m = unit_square();
        assert_eq!(m.cities().len(), 4);
        assert_eq!(m.cities()[2], City::new(1.0, 1.0));
    }
}
