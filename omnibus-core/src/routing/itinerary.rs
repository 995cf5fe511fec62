//! Fastest-route answer as a list of wait and ride actions

use serde::Serialize;

use super::graph::RideSegment;
use crate::{Minutes, TransitCatalogue};

/// One action of an itinerary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Wait for a bus at a stop
    Wait { stop_name: String, time: Minutes },
    /// Ride a bus for `span_count` stops
    Bus {
        bus: String,
        span_count: usize,
        time: Minutes,
    },
}

impl RouteItem {
    pub fn time(&self) -> Minutes {
        match self {
            Self::Wait { time, .. } | Self::Bus { time, .. } => *time,
        }
    }
}

/// Fastest way between two stops
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Itinerary {
    pub total_time: Minutes,
    pub items: Vec<RouteItem>,
    /// Traversed graph edges in travel order
    #[serde(skip)]
    pub segments: Vec<RideSegment>,
}

impl Itinerary {
    /// Itinerary of a passenger who is already at the destination
    pub fn empty() -> Self {
        Self::default()
    }

    /// Expand ride segments into alternating wait and ride actions.
    ///
    /// Each segment's total time is split into the boarding wait and the
    /// riding remainder.
    pub(crate) fn from_segments(
        catalogue: &TransitCatalogue,
        segments: Vec<RideSegment>,
        total_time: Minutes,
        wait_time: Minutes,
    ) -> Self {
        let items = segments
            .iter()
            .flat_map(|segment| {
                let stop_name = catalogue.stops()[segment.from].name.clone();
                let bus = catalogue.buses()[segment.bus].name.clone();
                [
                    RouteItem::Wait {
                        stop_name,
                        time: wait_time,
                    },
                    RouteItem::Bus {
                        bus,
                        span_count: segment.span_count,
                        time: segment.total_time - wait_time,
                    },
                ]
            })
            .collect();

        Self {
            total_time,
            items,
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of buses boarded
    pub fn boardings(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalogue() -> TransitCatalogue {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("Biryulyovo Zapadnoye", 55.574371, 37.6517).unwrap();
        catalogue.add_stop("Universam", 55.587655, 37.645687).unwrap();
        catalogue
            .set_distance("Biryulyovo Zapadnoye", "Universam", 2400.0)
            .unwrap();
        catalogue
            .add_bus("297", &["Biryulyovo Zapadnoye", "Universam"], false)
            .unwrap();
        catalogue
    }

    #[test]
    fn segments_expand_into_wait_and_ride() {
        let catalogue = catalogue();
        let segment = RideSegment {
            bus: 0,
            from: 0,
            to: 1,
            span_count: 1,
            total_time: 8.0,
        };

        let itinerary = Itinerary::from_segments(&catalogue, vec![segment], 8.0, 2.0);
        assert_eq!(itinerary.boardings(), 1);
        assert_eq!(
            itinerary.items,
            vec![
                RouteItem::Wait {
                    stop_name: "Biryulyovo Zapadnoye".into(),
                    time: 2.0
                },
                RouteItem::Bus {
                    bus: "297".into(),
                    span_count: 1,
                    time: 6.0
                },
            ]
        );
        let item_sum: Minutes = itinerary.items.iter().map(RouteItem::time).sum();
        assert_eq!(item_sum, itinerary.total_time);
    }

    #[test]
    fn serializes_with_type_tags() {
        let catalogue = catalogue();
        let segment = RideSegment {
            bus: 0,
            from: 1,
            to: 0,
            span_count: 1,
            total_time: 5.5,
        };
        let itinerary = Itinerary::from_segments(&catalogue, vec![segment], 5.5, 2.0);

        let value = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(
            value,
            json!({
                "total_time": 5.5,
                "items": [
                    {"type": "Wait", "stop_name": "Universam", "time": 2.0},
                    {"type": "Bus", "bus": "297", "span_count": 1, "time": 3.5},
                ]
            })
        );
    }

    #[test]
    fn empty_itinerary() {
        let itinerary = Itinerary::empty();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.total_time, 0.0);
        assert!(itinerary.items.is_empty());
    }
}
