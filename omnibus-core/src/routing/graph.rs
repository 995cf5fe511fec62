//! Ride graph: one node per stop, one edge per uninterrupted ride.
//!
//! For every bus and every pair of stops `i < j` on its path an edge
//! `i -> j` is added, so a bus of `L` stops contributes `L * (L - 1) / 2`
//! edges per direction. Because each edge already means "stay on this bus
//! for `j - i` stops", the search never has to track which bus the
//! passenger is on.

use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};

use super::config::RoutingSettings;
use crate::{BusId, Error, Minutes, StopId, TransitCatalogue};

/// Node weight is the catalogue [`StopId`]; node index equals the stop id.
pub type RouteGraph = DiGraph<StopId, RideSegment>;

/// Board `bus` at `from`, stay on for `span_count` stops, alight at `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideSegment {
    pub bus: BusId,
    pub from: StopId,
    pub to: StopId,
    pub span_count: usize,
    /// Wait at boarding plus riding time
    pub total_time: Minutes,
}

/// Build the ride graph for every bus of the catalogue
///
/// # Errors
///
/// Returns [`Error::MissingDistance`] if some hop of a bus has no road
/// distance in the direction it is travelled or the opposite one.
pub(crate) fn build_route_graph(
    catalogue: &TransitCatalogue,
    settings: &RoutingSettings,
) -> Result<RouteGraph, Error> {
    let mut graph = RouteGraph::with_capacity(catalogue.stop_count(), 0);
    for stop in 0..catalogue.stop_count() {
        graph.add_node(stop);
    }

    for (bus_id, bus) in catalogue.buses().iter().enumerate() {
        add_ride_edges(&mut graph, catalogue, settings, bus_id, &bus.stops)?;
        if !bus.is_roundtrip {
            let backward = bus.stops.iter().rev().copied().collect_vec();
            add_ride_edges(&mut graph, catalogue, settings, bus_id, &backward)?;
        }
    }

    Ok(graph)
}

fn add_ride_edges(
    graph: &mut RouteGraph,
    catalogue: &TransitCatalogue,
    settings: &RoutingSettings,
    bus: BusId,
    stops: &[StopId],
) -> Result<(), Error> {
    let hop_times = stops
        .iter()
        .copied()
        .tuple_windows::<(_, _)>()
        .map(|(from, to)| {
            catalogue
                .distance_between(from, to)
                .map(|meters| settings.travel_time(meters))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (i, &from) in stops.iter().enumerate() {
        let mut total_time = settings.wait_time();
        for (j, &to) in stops.iter().enumerate().skip(i + 1) {
            total_time += hop_times[j - 1];
            graph.add_edge(
                NodeIndex::new(from),
                NodeIndex::new(to),
                RideSegment {
                    bus,
                    from,
                    to,
                    span_count: j - i,
                    total_time,
                },
            );
        }
    }

    Ok(())
}
