//! Maps UI and catalog errors to weatherai_core::AppError for consistent
//! user-facing messages.

mod catalog;
mod route;
mod selector;

pub use catalog::map_geo_error;
