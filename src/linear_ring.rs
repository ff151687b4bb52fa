use crate::errors::RingError;
use crate::Coordinate;
use serde_json::Value;

/// Smallest closed ring that encloses an area: three corners plus the repeat.
pub const MIN_RING_COORDINATES: usize = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    coords: Vec<Coordinate>,
}

impl LinearRing {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        LinearRing { coords }
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        !self.coords.is_empty() && self.coords.first() == self.coords.last()
    }

    pub fn validate_ring(&self) -> Result<(), RingError> {
        if self.coords.len() < MIN_RING_COORDINATES {
            Err(RingError::TooFewCoordinates {
                found: self.coords.len(),
            })
        } else if !self.is_closed() {
            Err(RingError::NotClosed)
        } else {
            Ok(())
        }
    }

    /// Non-empty, but too short to bound an area.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self.validate_ring(),
            Err(RingError::TooFewCoordinates { found }) if found > 0
        )
    }

    /// Round every coordinate and drop those equal to the previously kept one.
    ///
    /// Only adjacent duplicates are caught; a coordinate repeated elsewhere in
    /// the ring survives. Returns the new ring and the number of coordinates
    /// dropped.
    pub fn dedup_rounded(&self, precision: i32) -> (LinearRing, usize) {
        let mut coords: Vec<Coordinate> = Vec::with_capacity(self.coords.len());
        let mut removed = 0;
        for coord in &self.coords {
            let rounded = coord.round(precision);
            if coords.last() == Some(&rounded) {
                removed += 1;
            } else {
                coords.push(rounded);
            }
        }
        (LinearRing { coords }, removed)
    }

    /// Append the first coordinate if the ring is open. Returns whether it did.
    ///
    /// Rings with fewer than two coordinates are left alone.
    pub fn close(&mut self) -> bool {
        if self.coords.len() < 2 || self.is_closed() {
            return false;
        }
        let first = self.coords[0].clone();
        self.coords.push(first);
        true
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.coords.iter().map(Coordinate::to_json).collect())
    }
}

impl<IP: Into<Coordinate>> From<Vec<IP>> for LinearRing {
    fn from(coords: Vec<IP>) -> Self {
        LinearRing::new(coords.into_iter().map(|ip| ip.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_dense_ring(rng: &mut SmallRng, n: usize) -> LinearRing {
        let mut coords = Vec::with_capacity(n);
        let mut x: f64 = rng.gen_range(-180.0, 180.0);
        let mut y: f64 = rng.gen_range(-90.0, 90.0);
        for _ in 0..n {
            let dx: f64 = rng.gen_range(-0.002, 0.002);
            let dy: f64 = rng.gen_range(-0.002, 0.002);
            x += dx;
            y += dy;
            coords.push(Coordinate::from((x, y)));
        }
        LinearRing::new(coords)
    }

    #[test]
    fn test_dedup_scenario() {
        let ring: LinearRing = vec![(1.00001, 2.00001), (1.00002, 2.00002), (3.0, 4.0)].into();
        let (cleaned, removed) = ring.dedup_rounded(2);
        assert_eq!(removed, 1);
        assert_eq!(cleaned, LinearRing::from(vec![(1.0, 2.0), (3.0, 4.0)]));
    }

    #[test]
    fn test_dedup_empty() {
        let (cleaned, removed) = LinearRing::default().dedup_rounded(3);
        assert!(cleaned.is_empty());
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_dedup_single() {
        let ring: LinearRing = vec![(0.123456, 9.87654)].into();
        let (cleaned, removed) = ring.dedup_rounded(2);
        assert_eq!(cleaned, LinearRing::from(vec![(0.12, 9.88)]));
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_dedup_all_identical() {
        let ring: LinearRing = vec![(5.001, 5.001), (5.002, 5.002), (5.003, 5.004), (4.999, 5.0)].into();
        let (cleaned, removed) = ring.dedup_rounded(1);
        assert_eq!(cleaned, LinearRing::from(vec![(5.0, 5.0)]));
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_dedup_keeps_non_adjacent_duplicates() {
        let ring: LinearRing = vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0001, 0.0001),
            (1.0, 1.0),
            (0.0, 0.0),
        ]
        .into();
        let (cleaned, removed) = ring.dedup_rounded(2);
        assert_eq!(removed, 0);
        assert_eq!(
            cleaned,
            LinearRing::from(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])
        );
    }

    #[test]
    fn test_dedup_compares_against_rounded_cursor() {
        // Each step is below the precision, but the drift accumulates.
        let ring: LinearRing = vec![(0.0, 0.0), (0.004, 0.0), (0.008, 0.0), (0.012, 0.0)].into();
        let (cleaned, removed) = ring.dedup_rounded(2);
        assert_eq!(cleaned, LinearRing::from(vec![(0.0, 0.0), (0.01, 0.0)]));
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_dedup_integers_and_floats() {
        let ring = LinearRing::new(vec![
            Coordinate::from((1, 2)),
            Coordinate::from((1.0001, 2.0)),
            Coordinate::from((2, 2)),
        ]);
        let (cleaned, removed) = ring.dedup_rounded(2);
        assert_eq!(removed, 1);
        assert_eq!(cleaned.to_json(), serde_json::json!([[1, 2], [2, 2]]));
    }

    #[test]
    fn test_dedup_preserves_closure() {
        let ring: LinearRing = vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.00001, 0.00001),
            (0.0, 0.0),
        ]
        .into();
        let (cleaned, removed) = ring.dedup_rounded(3);
        assert_eq!(removed, 1);
        assert!(cleaned.is_closed());
        assert_eq!(cleaned.len(), 4);
    }

    #[test]
    fn test_dedup_properties() {
        let mut rng = SmallRng::seed_from_u64(7);
        for precision in &[0, 1, 2, 3, 4] {
            let precision = *precision;
            for _ in 0..50 {
                let ring = random_dense_ring(&mut rng, 200);
                let (cleaned, removed) = ring.dedup_rounded(precision);
                assert_eq!(cleaned.len() + removed, ring.len());

                // No adjacent duplicates survive.
                for pair in cleaned.coords().windows(2) {
                    assert_ne!(pair[0], pair[1]);
                }

                // Every output coordinate is a fixed point of the rounding.
                for coord in cleaned.coords() {
                    assert_eq!(&coord.round(precision), coord);
                }

                // Output is a subsequence of the rounded input.
                let rounded: Vec<Coordinate> =
                    ring.coords().iter().map(|c| c.round(precision)).collect();
                let mut remaining = rounded.iter();
                for coord in cleaned.coords() {
                    assert!(remaining.any(|r| r == coord));
                }

                // A second pass is a no-op.
                let (again, removed_again) = cleaned.dedup_rounded(precision);
                assert_eq!(removed_again, 0);
                assert_eq!(again, cleaned);
            }
        }
    }

    #[test]
    fn test_close() {
        let mut ring: LinearRing = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)].into();
        assert!(!ring.is_closed());
        assert!(ring.close());
        assert!(ring.is_closed());
        assert_eq!(ring.len(), 4);
        assert!(!ring.close());
        assert_eq!(ring.len(), 4);

        let mut point: LinearRing = vec![(0.0, 0.0)].into();
        assert!(!point.close());
    }

    #[test]
    fn test_validate_ring() {
        let ring: LinearRing = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)].into();
        assert_eq!(ring.validate_ring(), Ok(()));
        assert!(!ring.is_degenerate());

        let ring: LinearRing = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)].into();
        assert_eq!(ring.validate_ring(), Err(RingError::NotClosed));
        assert!(!ring.is_degenerate());

        let ring: LinearRing = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)].into();
        assert_eq!(
            ring.validate_ring(),
            Err(RingError::TooFewCoordinates { found: 3 })
        );
        assert!(ring.is_degenerate());
        assert!(!LinearRing::default().is_degenerate());
    }
}
