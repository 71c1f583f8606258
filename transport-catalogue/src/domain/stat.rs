//! Route statistics.

/// Aggregate metrics of a bus route, derived from its effective stop sequence.
///
/// Never stored: recomputed from the catalogue on every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStat {
    /// Road length divided by great-circle length.
    ///
    /// `NaN` when both lengths are zero and `+inf` when only the great-circle
    /// length is zero (a route whose stops share one coordinate).
    pub curvature: f64,
    /// Sum of road distances in meters along the effective sequence
    pub route_length: u64,
    /// Length of the effective sequence
    pub stop_count: usize,
    /// Number of distinct stops in the effective sequence
    pub unique_stop_count: usize,
}
