//! Fastest-route planning over the bus network

mod config;
pub(crate) mod dijkstra;
pub mod graph;
mod itinerary;
mod router;

pub use config::RoutingSettings;
pub use graph::{RideSegment, RouteGraph};
pub use itinerary::{Itinerary, RouteItem};
pub use router::TransitRouter;
