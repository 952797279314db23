//! Locations module - where a manually tracked balance is custodied.

mod location_codec;
mod location_model;

pub use location_codec::{decode_location, LocationError};
pub use location_model::Location;
