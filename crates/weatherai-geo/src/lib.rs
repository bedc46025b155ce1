//! Geography catalog for Weather AI
//!
//! Static country/city dataset with validated coordinates, queried by the
//! location selector.

pub mod catalog;
pub mod dataset;
pub mod types;

pub use catalog::{GeographyCatalog, StaticCatalog};
pub use dataset::Dataset;
pub use types::*;
