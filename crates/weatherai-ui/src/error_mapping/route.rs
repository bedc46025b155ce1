use crate::route::RouteError;
use weatherai_core::{AppError, NavigationError};

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::NotFound(path) => AppError::Navigation(NavigationError::NotFound(path)),
            e @ RouteError::MissingSegment { .. } => {
                AppError::Navigation(NavigationError::Malformed(e.to_string()))
            }
        }
    }
}
