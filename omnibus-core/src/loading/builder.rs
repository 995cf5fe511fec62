use itertools::{Either, Itertools};
use log::info;

use super::raw_types::{BaseRequest, BusDescription, StopDescription};
use crate::{Error, TransitCatalogue};

/// Creates a catalogue from base requests given in any order.
///
/// Stops are registered first, then their road distances, then buses, so
/// a bus or a distance may mention a stop described later in the input.
///
/// # Errors
///
/// Returns the first error raised while registering stops, distances or
/// buses.
pub fn create_catalogue<I>(requests: I) -> Result<TransitCatalogue, Error>
where
    I: IntoIterator<Item = BaseRequest>,
{
    let (stops, buses): (Vec<StopDescription>, Vec<BusDescription>) =
        requests.into_iter().partition_map(|request| match request {
            BaseRequest::Stop(stop) => Either::Left(stop),
            BaseRequest::Bus(bus) => Either::Right(bus),
        });

    let mut catalogue = TransitCatalogue::new();

    for stop in &stops {
        catalogue.add_stop(&stop.name, stop.latitude, stop.longitude)?;
    }

    let mut distance_count = 0;
    for stop in &stops {
        for (neighbour, &meters) in &stop.road_distances {
            catalogue.set_distance(&stop.name, neighbour, meters)?;
            distance_count += 1;
        }
    }

    for bus in &buses {
        catalogue.add_bus(&bus.name, &bus.stops, bus.is_roundtrip)?;
    }

    info!(
        "Loaded {} stops, {} road distances and {} buses",
        catalogue.stop_count(),
        distance_count,
        catalogue.bus_count()
    );
    Ok(catalogue)
}
