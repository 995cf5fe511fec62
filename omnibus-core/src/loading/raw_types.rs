use std::collections::BTreeMap;

use serde::Deserialize;

/// Stop record of a base request
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StopDescription {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road distances in meters from this stop to its neighbours
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// Bus record of a base request
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BusDescription {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopDescription),
    Bus(BusDescription),
}
