//! Geographic coordinates and great-circle distance.

use std::fmt;

use super::DomainError;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, in decimal degrees.
///
/// Both components are guaranteed finite by construction.
///
/// # Examples
///
/// ```
/// use transport_catalogue::domain::Coordinates;
///
/// let c = Coordinates::new(55.611087, 37.20829).unwrap();
/// assert_eq!(c.lat(), 55.611087);
///
/// assert!(Coordinates::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DomainError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Great-circle distance in meters between two coordinates.
///
/// Uses the spherical law of cosines. Identical points are exactly zero.
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (from.lng - to.lng).abs().to_radians();

    // Rounding can push the cosine just outside [-1, 1] for near-identical points
    let cos_angle = lat1
        .sin()
        .mul_add(lat2.sin(), lat1.cos() * lat2.cos() * delta_lng.cos())
        .clamp(-1.0, 1.0);

    cos_angle.acos() * EARTH_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinates::new(f64::NAN, 1.0).is_err());
        assert!(Coordinates::new(1.0, f64::INFINITY).is_err());
        assert!(Coordinates::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn same_point_is_zero() {
        let c = coords(55.574371, 37.6517);
        assert_eq!(compute_distance(c, c), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = compute_distance(coords(0.0, 0.0), coords(0.0, 1.0));
        let expected = 1.0_f64.to_radians() * EARTH_RADIUS_M;
        assert!((d - expected).abs() < 1e-6, "got {d}, expected {expected}");
    }

    #[test]
    fn symmetric() {
        let a = coords(55.611087, 37.20829);
        let b = coords(55.595884, 37.209755);
        assert_eq!(compute_distance(a, b), compute_distance(b, a));
    }

    #[test]
    fn known_city_distance() {
        // Moscow to Saint Petersburg, roughly 634 km
        let moscow = coords(55.7558, 37.6173);
        let spb = coords(59.9343, 30.3351);
        let d = compute_distance(moscow, spb);
        assert!((d - 634_000.0).abs() < 5_000.0, "got {d}");
    }

    #[test]
    fn display() {
        assert_eq!(coords(1.5, -2.25).to_string(), "1.500000, -2.250000");
    }
}
