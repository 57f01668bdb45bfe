//! Domain layer for GeoAddr
//!
//! Value objects shared by the geocoding client and its front ends:
//! validated coordinates and the address component vocabulary.
//! This layer performs no I/O.

pub mod value_objects;

pub use value_objects::*;
