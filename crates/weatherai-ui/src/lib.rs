//! Location picker view-model, routes and pages for Weather AI.

pub mod error_mapping;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod route;
pub mod router;

pub use models::selector_model::{CityControl, LocationSelector, SelectorError};
pub use navigation::{navigation_path, Navigator, RecordingNavigator};
pub use pages::{HomePage, LocationPage};
pub use route::{LocationParams, Route, RouteError};
pub use router::{AppRouter, PageStatus, RenderedPage};
