//! Catalogue of stops, buses and road distances

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::{debug, warn};

use super::metrics::BusMetrics;
use super::types::{Bus, Stop};
use crate::{BusId, Error, StopId};

/// Owner of every stop and bus of the network.
///
/// Stops and buses live in append-only arenas, so a [`StopId`] or
/// [`BusId`] stays valid for the whole lifetime of the catalogue.
#[derive(Debug, Clone, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, BusId>,
    /// Buses through each stop, indexed by `StopId`
    stop_buses: Vec<HashSet<BusId>>,
    /// Directed road distances in meters
    distances: HashMap<(StopId, StopId), f64>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new stop
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateStop`] if a stop with this name exists.
    pub fn add_stop(&mut self, name: &str, lat: f64, lng: f64) -> Result<StopId, Error> {
        if self.stop_index.contains_key(name) {
            return Err(Error::DuplicateStop(name.to_string()));
        }

        let id = self.stops.len();
        self.stops.push(Stop::new(name, lat, lng));
        self.stop_buses.push(HashSet::new());
        self.stop_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Registers a bus over existing stops.
    ///
    /// Adding a bus whose name is already known does nothing and returns
    /// the id of the existing bus.
    ///
    /// # Errors
    ///
    /// Fails without modifying the catalogue if a stop is unknown, the
    /// route is empty or a road distance along the route is missing.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, Error> {
        if let Some(&existing) = self.bus_index.get(name) {
            debug!("Bus {name} is already registered, ignoring redefinition");
            return Ok(existing);
        }
        if stop_names.is_empty() {
            return Err(Error::EmptyRoute(name.to_string()));
        }

        let stops = stop_names
            .iter()
            .map(|stop| self.resolve_stop(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let metrics = BusMetrics::compute(self, &stops, is_roundtrip)?;
        if metrics.curvature.is_none() && stops.len() > 1 {
            warn!("Bus {name} has zero geographic length, curvature is undefined");
        }

        let id = self.buses.len();
        for &stop in &stops {
            self.stop_buses[stop].insert(id);
        }
        debug!(
            "Added bus {name}: {} stops ({} unique), {:.0} m",
            metrics.stop_count, metrics.unique_stop_count, metrics.route_length
        );
        self.buses.push(Bus {
            name: name.to_string(),
            stops,
            is_roundtrip,
            metrics,
        });
        self.bus_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Stores the road distance from one stop to another, replacing any
    /// previous value for the same direction.
    ///
    /// # Errors
    ///
    /// Returns an error if either stop is unknown or the distance is
    /// negative or not finite.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), Error> {
        let from_id = self.resolve_stop(from)?;
        let to_id = self.resolve_stop(to)?;
        if !meters.is_finite() || meters < 0.0 {
            return Err(Error::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                meters,
            });
        }
        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    /// Road distance between two named stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStop`] for unknown names and
    /// [`Error::MissingDistance`] if no distance was set in either direction.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64, Error> {
        let from_id = self.resolve_stop(from)?;
        let to_id = self.resolve_stop(to)?;
        self.distance_between(from_id, to_id)
    }

    /// Road distance from `from` to `to`.
    ///
    /// Falls back to the `to -> from` distance when the requested direction
    /// was never set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDistance`] if neither direction is known.
    pub fn distance_between(&self, from: StopId, to: StopId) -> Result<f64, Error> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| Error::MissingDistance {
                from: self.stop_name(from),
                to: self.stop_name(to),
            })
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id])
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_id(name).map(|id| &self.buses[id])
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_index.get(name).copied()
    }

    pub fn stop_by_id(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id)
    }

    pub fn bus_by_id(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id)
    }

    /// Buses serving the stop, `None` if the stop is unknown
    pub fn buses_by_stop(&self, name: &str) -> Option<&HashSet<BusId>> {
        self.stop_id(name).map(|id| &self.stop_buses[id])
    }

    /// Whether at least one bus passes through the stop
    pub fn has_buses(&self, stop: StopId) -> bool {
        self.stop_buses.get(stop).is_some_and(|buses| !buses.is_empty())
    }

    /// Names of the buses serving the stop, sorted
    pub fn stop_stat(&self, name: &str) -> Option<Vec<&str>> {
        self.buses_by_stop(name).map(|buses| {
            buses
                .iter()
                .map(|&bus| self.buses[bus].name.as_str())
                .sorted_unstable()
                .collect()
        })
    }

    /// All stops in insertion order
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Stops served by at least one bus, sorted by name
    pub fn stops_with_buses(&self) -> Vec<&Stop> {
        self.stops
            .iter()
            .enumerate()
            .filter(|(id, _)| self.has_buses(*id))
            .map(|(_, stop)| stop)
            .sorted_unstable_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    /// All buses sorted by name
    pub fn buses_sorted(&self) -> Vec<&Bus> {
        self.buses
            .iter()
            .sorted_unstable_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    fn resolve_stop(&self, name: &str) -> Result<StopId, Error> {
        self.stop_id(name)
            .ok_or_else(|| Error::UnknownStop(name.to_string()))
    }

    fn stop_name(&self, id: StopId) -> String {
        self.stops
            .get(id)
            .map_or_else(|| format!("#{id}"), |stop| stop.name.clone())
    }
}
