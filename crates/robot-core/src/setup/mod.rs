//! World Setup
//!
//! The built-in village map, the mail route, and random parcel placement.

pub mod parcels;
pub mod village;

pub use parcels::*;
pub use village::*;
