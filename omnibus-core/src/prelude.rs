// Re-export key components
pub use crate::Error;
pub use crate::loading::{BaseRequest, BusDescription, StopDescription, create_catalogue};
pub use crate::model::{Bus, BusMetrics, Stop, TransitCatalogue};
pub use crate::routing::{Itinerary, RideSegment, RouteItem, RoutingSettings, TransitRouter};

// Core identifiers
pub use crate::BusId;
pub use crate::Minutes;
pub use crate::StopId;
