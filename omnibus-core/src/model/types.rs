//! Stop and bus entities

use geo::Point;

use super::metrics::BusMetrics;
use crate::StopId;

/// Named stop with its coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    /// `x` is longitude, `y` is latitude
    pub geometry: Point<f64>,
}

impl Stop {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            geometry: Point::new(lng, lat),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }
}

/// Bus route over catalogue stops
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    /// Route number
    pub name: String,
    /// Stops in the order they were submitted
    pub stops: Vec<StopId>,
    /// Round-trip routes are travelled as submitted; linear routes
    /// go to the last stop and come back the same way
    pub is_roundtrip: bool,
    pub metrics: BusMetrics,
}

impl Bus {
    /// Stops in the order a passenger riding the whole route visits them.
    ///
    /// For linear routes the turnaround stop is visited once.
    pub fn realized_stops(&self) -> impl Iterator<Item = StopId> + '_ {
        let backward: &[StopId] = if self.is_roundtrip {
            &[]
        } else {
            &self.stops[..self.stops.len().saturating_sub(1)]
        };
        self.stops.iter().chain(backward.iter().rev()).copied()
    }

    /// First stop of the route, if any
    pub fn first_stop(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    /// Final stop of the forward direction
    pub fn last_stop(&self) -> Option<StopId> {
        self.stops.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus(stops: Vec<StopId>, is_roundtrip: bool) -> Bus {
        Bus {
            name: "14".to_string(),
            stops,
            is_roundtrip,
            metrics: BusMetrics::default(),
        }
    }

    #[test]
    fn stop_coordinates() {
        let stop = Stop::new("Biryulyovo", 55.574371, 37.6517);
        assert_eq!(stop.latitude(), 55.574371);
        assert_eq!(stop.longitude(), 37.6517);
    }

    #[test]
    fn realized_stops_roundtrip() {
        let bus = bus(vec![0, 1, 2, 0], true);
        assert_eq!(bus.realized_stops().collect::<Vec<_>>(), vec![0, 1, 2, 0]);
    }

    #[test]
    fn realized_stops_linear() {
        let bus = bus(vec![0, 1, 2], false);
        assert_eq!(
            bus.realized_stops().collect::<Vec<_>>(),
            vec![0, 1, 2, 1, 0]
        );
        assert_eq!(bus.first_stop(), Some(0));
        assert_eq!(bus.last_stop(), Some(2));
    }
}
