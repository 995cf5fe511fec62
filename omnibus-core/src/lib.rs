//! Transit catalogue and fastest-route planner.
//!
//! The crate has two layers:
//!
//! - [`TransitCatalogue`] stores stops, buses and directed road distances,
//!   and answers statistics queries about them.
//! - [`TransitRouter`] compiles a populated catalogue into a weighted
//!   directed graph and answers fastest-route queries over it.
//!
//! ```no_run
//! use omnibus_core::prelude::*;
//!
//! let mut catalogue = TransitCatalogue::new();
//! catalogue.add_stop("A", 55.61, 37.20)?;
//! catalogue.add_stop("B", 55.59, 37.21)?;
//! catalogue.set_distance("A", "B", 3900.0)?;
//! catalogue.add_bus("256", &["A", "B"], false)?;
//!
//! let router = TransitRouter::new(&catalogue, RoutingSettings::from_kmh(6, 40.0)?)?;
//! let itinerary = router.find_fastest_route("A", "B");
//! # Ok::<(), omnibus_core::Error>(())
//! ```

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{BaseRequest, BusDescription, StopDescription, create_catalogue};
pub use model::{Bus, BusMetrics, Stop, TransitCatalogue};
pub use routing::{Itinerary, RideSegment, RouteItem, RoutingSettings, TransitRouter};

/// Dense index of a stop inside the catalogue arena
pub type StopId = usize;
/// Dense index of a bus inside the catalogue arena
pub type BusId = usize;
/// Travel time in minutes
pub type Minutes = f64;
