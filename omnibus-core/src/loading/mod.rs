//! This module turns base requests (stop and bus descriptions produced by
//! an input layer) into a populated catalogue.

mod builder;
mod raw_types;

pub use builder::create_catalogue;
pub use raw_types::{BaseRequest, BusDescription, StopDescription};
