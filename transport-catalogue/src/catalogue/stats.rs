//! Route statistics over the catalogue.

use std::collections::HashSet;

use super::TransportCatalogue;
use crate::domain::{Bus, BusStat, compute_distance};

impl TransportCatalogue {
    /// Compute statistics for a bus by name.
    ///
    /// Returns `None` if the bus doesn't exist. Nothing is cached, so the
    /// result always reflects the catalogue as it is now.
    pub fn bus_stat(&self, name: &str) -> Option<BusStat> {
        self.find_bus(name).map(|bus| self.compute_stat(bus))
    }

    fn compute_stat(&self, bus: &Bus) -> BusStat {
        let mut route_length: u64 = 0;
        let mut geographic_length = 0.0;

        for (from, to) in bus.segments() {
            route_length += u64::from(self.distance(from, to));
            geographic_length += compute_distance(
                self.stops()[from.0].coordinates,
                self.stops()[to.0].coordinates,
            );
        }

        let unique_stop_count = bus.stops().iter().collect::<HashSet<_>>().len();

        BusStat {
            curvature: route_length as f64 / geographic_length,
            route_length,
            stop_count: bus.stops().len(),
            unique_stop_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalogue::TransportCatalogue;
    use crate::domain::{Coordinates, compute_distance};

    fn coords(lat: f64, lng: f64) -> Coordinates {
        Coordinates::new(lat, lng).unwrap()
    }

    #[test]
    fn roundtrip_stat_uses_reverse_fallback() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("X", coords(0.0, 0.0)).unwrap();
        catalogue.add_stop("Y", coords(0.0, 1.0)).unwrap();
        catalogue.add_distance("X", "Y", 100).unwrap();
        catalogue.add_bus("r", &["X", "Y", "X"], true).unwrap();

        let stat = catalogue.bus_stat("r").unwrap();
        assert_eq!(stat.stop_count, 3);
        assert_eq!(stat.unique_stop_count, 2);
        assert_eq!(stat.route_length, 200);

        let geo = compute_distance(coords(0.0, 0.0), coords(0.0, 1.0));
        let expected = 200.0 / (2.0 * geo);
        assert!((stat.curvature - expected).abs() < 1e-12);
    }

    #[test]
    fn out_and_back_counts_return_trip() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", coords(55.574371, 37.6517)).unwrap();
        catalogue.add_stop("B", coords(55.581065, 37.64839)).unwrap();
        catalogue.add_stop("C", coords(55.587655, 37.645687)).unwrap();
        catalogue.add_distance("A", "B", 900).unwrap();
        catalogue.add_distance("B", "A", 1000).unwrap();
        catalogue.add_distance("B", "C", 1300).unwrap();
        catalogue.add_bus("750", &["A", "B", "C"], false).unwrap();

        let stat = catalogue.bus_stat("750").unwrap();
        assert_eq!(stat.stop_count, 5);
        assert_eq!(stat.unique_stop_count, 3);
        // 900 + 1300 + 1300 (fallback) + 1000
        assert_eq!(stat.route_length, 4500);
        assert!(stat.curvature > 1.0);
    }

    #[test]
    fn unknown_bus_is_none() {
        let catalogue = TransportCatalogue::new();
        assert!(catalogue.bus_stat("missing").is_none());
    }

    #[test]
    fn single_stop_route_has_nan_curvature() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", coords(1.0, 1.0)).unwrap();
        catalogue.add_bus("solo", &["A"], true).unwrap();

        let stat = catalogue.bus_stat("solo").unwrap();
        assert_eq!(stat.stop_count, 1);
        assert_eq!(stat.unique_stop_count, 1);
        assert_eq!(stat.route_length, 0);
        assert!(stat.curvature.is_nan());
    }

    #[test]
    fn coincident_stops_have_infinite_curvature() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", coords(1.0, 1.0)).unwrap();
        catalogue.add_stop("B", coords(1.0, 1.0)).unwrap();
        catalogue.add_distance("A", "B", 50).unwrap();
        catalogue.add_bus("twins", &["A", "B"], false).unwrap();

        let stat = catalogue.bus_stat("twins").unwrap();
        assert_eq!(stat.route_length, 100);
        assert!(stat.curvature.is_infinite());
    }

    #[test]
    fn recomputed_after_stop_moves() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", coords(0.0, 0.0)).unwrap();
        catalogue.add_stop("B", coords(0.0, 1.0)).unwrap();
        catalogue.add_distance("A", "B", 200_000).unwrap();
        catalogue.add_bus("m", &["A", "B"], false).unwrap();

        let before = catalogue.bus_stat("m").unwrap();
        catalogue.add_stop("B", coords(0.0, 2.0)).unwrap();
        let after = catalogue.bus_stat("m").unwrap();

        assert_eq!(before.route_length, after.route_length);
        assert!(after.curvature < before.curvature);
    }
}
