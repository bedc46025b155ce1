//! Route contract between the selector and the pages.
//!
//! The location route comes in two forms:
//! - `{base}/{lat}/{long}`: what the selector emits
//! - `{base}/{city}/{lat}/{long}`: a labelled link, city percent-encoded
//!
//! Latitude and longitude are carried as strings and not validated here.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Parameters handed to the location page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParams {
    pub city: Option<String>,
    pub lat: String,
    pub long: String,
}

impl LocationParams {
    /// Path for these parameters; includes the city segment when present.
    pub fn to_path(&self, base_path: &str) -> String {
        let lat = utf8_percent_encode(&self.lat, SEGMENT);
        let long = utf8_percent_encode(&self.long, SEGMENT);
        match &self.city {
            Some(city) => format!(
                "{}/{}/{}/{}",
                base_path,
                utf8_percent_encode(city, SEGMENT),
                lat,
                long
            ),
            None => format!("{}/{}/{}", base_path, lat, long),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Location(LocationParams),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("No route for {0}")]
    NotFound(String),
    #[error("{path}: missing {segment} segment")]
    MissingSegment { path: String, segment: &'static str },
}

impl Route {
    /// Resolve `path` against the location route mounted at `base_path`.
    /// Query strings and fragments are ignored.
    pub fn parse(base_path: &str, path: &str) -> Result<Route, RouteError> {
        let clean = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Ok(Route::Home);
        }

        let base: Vec<&str> = base_path.split('/').filter(|s| !s.is_empty()).collect();
        if base.is_empty() || !segments.starts_with(&base) {
            return Err(RouteError::NotFound(path.to_string()));
        }

        let params: Vec<String> = segments[base.len()..]
            .iter()
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        let missing = |segment| RouteError::MissingSegment {
            path: path.to_string(),
            segment,
        };

        match params.as_slice() {
            [] => Err(missing("lat")),
            [_] => Err(missing("long")),
            [lat, long] => Ok(Route::Location(LocationParams {
                city: None,
                lat: lat.clone(),
                long: long.clone(),
            })),
            [city, lat, long] => Ok(Route::Location(LocationParams {
                city: Some(city.clone()),
                lat: lat.clone(),
                long: long.clone(),
            })),
            _ => Err(RouteError::NotFound(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/location";

    #[test]
    fn test_root_is_home() {
        assert_eq!(Route::parse(BASE, "/"), Ok(Route::Home));
        assert_eq!(Route::parse(BASE, ""), Ok(Route::Home));
    }

    #[test]
    fn test_two_segment_form() {
        let route = Route::parse(BASE, "/location/48.8566/2.3522").unwrap();
        assert_eq!(
            route,
            Route::Location(LocationParams {
                city: None,
                lat: "48.8566".into(),
                long: "2.3522".into(),
            })
        );
    }

    #[test]
    fn test_three_segment_form_decodes_city() {
        let route = Route::parse(BASE, "/location/New%20York%20City/40.71/-74.0").unwrap();
        let Route::Location(params) = route else {
            panic!("expected location route");
        };
        assert_eq!(params.city.as_deref(), Some("New York City"));
        assert_eq!(params.lat, "40.71");
        assert_eq!(params.long, "-74.0");
    }

    #[test]
    fn test_query_and_trailing_slash_ignored() {
        let route = Route::parse(BASE, "/location/1/2/?units=metric").unwrap();
        assert!(matches!(route, Route::Location(p) if p.lat == "1" && p.long == "2"));
    }

    #[test]
    fn test_missing_segments() {
        assert_eq!(
            Route::parse(BASE, "/location"),
            Err(RouteError::MissingSegment {
                path: "/location".into(),
                segment: "lat"
            })
        );
        assert!(matches!(
            Route::parse(BASE, "/location/48.8"),
            Err(RouteError::MissingSegment { segment: "long", .. })
        ));
    }

    #[test]
    fn test_unknown_paths() {
        assert!(matches!(
            Route::parse(BASE, "/forecast/1/2"),
            Err(RouteError::NotFound(_))
        ));
        assert!(matches!(
            Route::parse(BASE, "/location/a/b/c/d"),
            Err(RouteError::NotFound(_))
        ));
        assert!(matches!(
            Route::parse(BASE, "/locations/1/2"),
            Err(RouteError::NotFound(_))
        ));
    }

    #[test]
    fn test_nested_base_path() {
        let route = Route::parse("/app/location", "/app/location/1/2").unwrap();
        assert!(matches!(route, Route::Location(_)));
    }

    #[test]
    fn test_to_path_encodes_city() {
        let params = LocationParams {
            city: Some("São Paulo".into()),
            lat: "-23.5475".into(),
            long: "-46.63611".into(),
        };
        let path = params.to_path(BASE);
        assert_eq!(path, "/location/S%C3%A3o%20Paulo/-23.5475/-46.63611");
        assert_eq!(Route::parse(BASE, &path), Ok(Route::Location(params)));
    }

    #[test]
    fn test_to_path_without_city() {
        let params = LocationParams {
            city: None,
            lat: "1.5".into(),
            long: "2.5".into(),
        };
        assert_eq!(params.to_path(BASE), "/location/1.5/2.5");
    }
}
