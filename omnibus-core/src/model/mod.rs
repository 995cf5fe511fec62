//! Data model of the bus network
//!
//! Contains the stop and bus entities and the catalogue that owns them.

pub mod catalogue;
pub mod metrics;
pub mod types;

pub use catalogue::TransitCatalogue;
pub use metrics::BusMetrics;
pub use types::{Bus, Stop};
