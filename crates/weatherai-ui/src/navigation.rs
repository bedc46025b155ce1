//! Outbound navigation port.
//!
//! The selector never talks to a router directly; it issues a fire-and-forget
//! request through [`Navigator`], which the application injects.

use parking_lot::Mutex;
use weatherai_geo::Coordinates;

/// Receives navigation requests. Requests are not acknowledged or retried.
pub trait Navigator: Send + Sync {
    fn request_navigation(&self, path: &str);
}

/// Location page path for `coordinates`: `{base}/{latitude}/{longitude}`
pub fn navigation_path(base_path: &str, coordinates: &Coordinates) -> String {
    format!(
        "{}/{}/{}",
        base_path,
        coordinates.latitude(),
        coordinates.longitude()
    )
}

/// Navigator that only remembers what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.requests.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn request_navigation(&self, path: &str) {
        self.requests.lock().push(path.to_string());
    }
}
