//! Derived per-bus statistics

use geo::{Distance, HaversineMeasure};
use itertools::Itertools;

use super::catalogue::TransitCatalogue;
use crate::{Error, StopId};

/// Earth radius in meters used for geographic lengths
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Statistics computed once when a bus is added to the catalogue
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BusMetrics {
    /// Stops visited on a full trip, counting repeats
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length in meters along the realized path
    pub route_length: f64,
    /// Great-circle length in meters along the realized path
    pub geographic_length: f64,
    /// `route_length / geographic_length`, `None` when all stops coincide
    pub curvature: Option<f64>,
}

impl BusMetrics {
    /// Computes metrics for a route over already resolved stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDistance`] if some hop of the realized path
    /// has no road distance in either direction.
    pub(crate) fn compute(
        catalogue: &TransitCatalogue,
        stops: &[StopId],
        is_roundtrip: bool,
    ) -> Result<Self, Error> {
        let mut route_length = 0.0;
        let mut geographic_length = 0.0;

        for (from, to) in stops.iter().copied().tuple_windows::<(_, _)>() {
            route_length += catalogue.distance_between(from, to)?;
            if !is_roundtrip {
                route_length += catalogue.distance_between(to, from)?;
            }
            geographic_length += geographic_distance(catalogue, from, to);
        }

        let stop_count = if is_roundtrip {
            stops.len()
        } else {
            (stops.len() * 2).saturating_sub(1)
        };
        if !is_roundtrip {
            geographic_length *= 2.0;
        }

        let curvature = if geographic_length > 0.0 {
            Some(route_length / geographic_length)
        } else {
            None
        };

        Ok(Self {
            stop_count,
            unique_stop_count: stops.iter().unique().count(),
            route_length,
            geographic_length,
            curvature,
        })
    }
}

/// Great-circle distance in meters on a sphere of radius [`EARTH_RADIUS`]
fn geographic_distance(catalogue: &TransitCatalogue, from: StopId, to: StopId) -> f64 {
    let stops = catalogue.stops();
    HaversineMeasure::new(EARTH_RADIUS).distance(stops[from].geometry, stops[to].geometry)
}
