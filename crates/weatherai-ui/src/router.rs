//! Application router: resolves navigation requests to rendered pages.

use parking_lot::Mutex;

use crate::navigation::Navigator;
use crate::pages::{HomePage, LocationPage};
use crate::route::{Route, RouteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

/// Result of the most recent navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub path: String,
    pub status: PageStatus,
    pub body: String,
}

#[derive(Debug)]
pub struct AppRouter {
    base_path: String,
    home: HomePage,
    history: Mutex<Vec<String>>,
    current: Mutex<Option<RenderedPage>>,
}

impl AppRouter {
    pub fn new(base_path: impl Into<String>, home: HomePage) -> Self {
        Self {
            base_path: base_path.into(),
            home,
            history: Mutex::new(Vec::new()),
            current: Mutex::new(None),
        }
    }

    /// Render the page for `path` without recording a navigation
    pub fn resolve(&self, path: &str) -> Result<String, RouteError> {
        match Route::parse(&self.base_path, path)? {
            Route::Home => Ok(self.home.render()),
            Route::Location(params) => Ok(LocationPage::render(&params)),
        }
    }

    /// Every path requested so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    pub fn current(&self) -> Option<RenderedPage> {
        self.current.lock().clone()
    }
}

impl Navigator for AppRouter {
    fn request_navigation(&self, path: &str) {
        tracing::info!("Navigating to {}", path);
        self.history.lock().push(path.to_string());

        let page = match self.resolve(path) {
            Ok(body) => RenderedPage {
                path: path.to_string(),
                status: PageStatus::Ok,
                body,
            },
            Err(e) => {
                tracing::warn!("Navigation failed: {}", e);
                RenderedPage {
                    path: path.to_string(),
                    status: PageStatus::NotFound,
                    body: format!("404: {}", e),
                }
            }
        };

        *self.current.lock() = Some(page);
    }
}
