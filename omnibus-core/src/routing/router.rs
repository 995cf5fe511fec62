//! Fastest-route planner over a built catalogue

use hashbrown::HashMap;
use log::{info, trace};
use petgraph::graph::NodeIndex;

use super::config::RoutingSettings;
use super::dijkstra::{dijkstra_path, dijkstra_path_weights};
use super::graph::{RouteGraph, build_route_graph};
use super::itinerary::Itinerary;
use crate::{Error, Minutes, StopId, TransitCatalogue};

/// Planner answering fastest-route queries.
///
/// The router borrows the catalogue for its whole lifetime, so the
/// catalogue cannot change under a built graph. To route over a modified
/// network, drop the router and build a new one.
#[derive(Debug)]
pub struct TransitRouter<'a> {
    catalogue: &'a TransitCatalogue,
    settings: RoutingSettings,
    graph: RouteGraph,
}

impl<'a> TransitRouter<'a> {
    /// Compile the catalogue into a ride graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDistance`] if a bus hop has no road distance.
    pub fn new(catalogue: &'a TransitCatalogue, settings: RoutingSettings) -> Result<Self, Error> {
        let graph = build_route_graph(catalogue, &settings)?;
        info!(
            "Built ride graph: {} stops, {} buses, {} ride edges",
            graph.node_count(),
            catalogue.bus_count(),
            graph.edge_count()
        );

        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn catalogue(&self) -> &'a TransitCatalogue {
        self.catalogue
    }

    /// Fastest way from one stop to another.
    ///
    /// Asking for a route from a stop to itself yields an empty itinerary
    /// without looking the name up. Otherwise returns `None` if either stop
    /// is unknown or no bus connects them.
    pub fn find_fastest_route(&self, from: &str, to: &str) -> Option<Itinerary> {
        if from == to {
            return Some(Itinerary::empty());
        }
        let Some((source, target)) = self.resolve(from).zip(self.resolve(to)) else {
            trace!("Route {from} -> {to}: unknown stop");
            return None;
        };

        let Some(path) = dijkstra_path(&self.graph, NodeIndex::new(source), NodeIndex::new(target))
        else {
            trace!("Route {from} -> {to}: not reachable");
            return None;
        };
        trace!(
            "Route {from} -> {to}: {:.2} min over {} rides",
            path.cost,
            path.edges.len()
        );

        let segments = path.edges.iter().map(|&edge| self.graph[edge]).collect();
        Some(Itinerary::from_segments(
            self.catalogue,
            segments,
            path.cost,
            self.settings.wait_time(),
        ))
    }

    /// Fastest travel time from a stop to every stop reachable from it,
    /// optionally bounded by `max_time`.
    ///
    /// Returns `None` if the stop is unknown.
    pub fn travel_times_from(
        &self,
        from: &str,
        max_time: Option<Minutes>,
    ) -> Option<HashMap<StopId, Minutes>> {
        let source = self.resolve(from)?;
        let times = dijkstra_path_weights(&self.graph, NodeIndex::new(source), max_time)
            .into_iter()
            .map(|(node, time)| (node.index(), time))
            .collect();
        Some(times)
    }

    fn resolve(&self, name: &str) -> Option<StopId> {
        self.catalogue.stop_id(name)
    }
}
