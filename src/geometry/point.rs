//! Fixed-dimension point type.

/// A point with `D` real-valued coordinates.
///
/// Points are plain values: `Copy`, immutable once built, and compared
/// coordinate by coordinate.
///
/// # Examples
///
/// ```
/// use u_anneal_tsp::geometry::{Point, Point3};
///
/// let p: Point3 = Point::new([20.0, 80.0, 20.0]);
/// assert_eq!(p.coord(1), 80.0);
/// assert_eq!(p.dim(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const D: usize> {
    coords: [f64; D],
}

/// A point in the plane.
pub type Point2 = Point<2>;

/// A point in 3D space.
pub type Point3 = Point<3>;

impl<const D: usize> Point<D> {
    pub const fn new(coords: [f64; D]) -> Self {
        Self { coords }
    }

    /// All coordinates, in axis order.
    pub fn coords(&self) -> &[f64; D] {
        &self.coords
    }

    /// Coordinate along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= D`.
    pub fn coord(&self, axis: usize) -> f64 {
        self.coords[axis]
    }

    pub const fn dim(&self) -> usize {
        D
    }

    /// `true` when no coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Returns this point shifted by `offset` on every axis.
    pub fn offset(&self, offset: &Point<D>) -> Point<D> {
        let mut coords = self.coords;
        for (c, o) in coords.iter_mut().zip(offset.coords.iter()) {
            *c += o;
        }
        Point { coords }
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::new(coords)
    }
}

// Arrays of arbitrary const length have no serde impls, so points travel
// as plain sequences.
#[cfg(feature = "serde")]
impl<const D: usize> serde::Serialize for Point<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coords.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: usize> serde::Deserialize<'de> for Point<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        use serde::de::Error;

        let values = Vec::<f64>::deserialize(deserializer)?;
        let len = values.len();
        let coords: [f64; D] = values
            .try_into()
            .map_err(|_| De::Error::invalid_length(len, &format!("{D} coordinates").as_str()))?;
        Ok(Point { coords })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_point_serializes_as_sequence() {
        let p = Point3::new([1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");
        let back: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_point_rejects_wrong_length() {
        let err = serde_json::from_str::<Point2>("[1.0,2.0,3.0]").unwrap_err();
        assert!(err.to_string().contains("invalid length 3"), "{err}");
        assert!(serde_json::from_str::<Point2>("[1.0]").is_err());
    }
}
