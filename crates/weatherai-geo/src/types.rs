use serde::Serialize;

/// A validated latitude/longitude pair.
///
/// Values keep the exact string form the dataset provided so they can be
/// placed into a route unchanged. Construction fails for missing, non-numeric,
/// or out-of-range values, so a `Coordinates` always yields usable path segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    latitude: String,
    longitude: String,
}

impl Coordinates {
    /// Validate a coordinate pair. `record` names the dataset entry for error reporting.
    pub fn new(
        record: &str,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, GeoError> {
        let latitude = validate_component(record, "latitude", latitude, 90.0)?;
        let longitude = validate_component(record, "longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

fn validate_component(
    record: &str,
    field: &'static str,
    value: Option<&str>,
    limit: f64,
) -> Result<String, GeoError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GeoError::MissingCoordinate {
            record: record.to_string(),
            field,
        })?;

    let invalid = || GeoError::InvalidCoordinate {
        record: record.to_string(),
        field,
        value: raw.to_string(),
    };

    let degrees: f64 = raw.parse().map_err(|_| invalid())?;
    if !degrees.is_finite() || degrees.abs() > limit {
        return Err(invalid());
    }

    Ok(raw.to_string())
}

/// Country payload of a [`CountryOption`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryValue {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub iso_code: String,
}

/// A selectable country: display label plus its coordinates and ISO code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub label: String,
    pub value: CountryValue,
}

impl CountryOption {
    pub fn iso_code(&self) -> &str {
        &self.value.iso_code
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.value.coordinates
    }
}

/// City payload of a [`CityOption`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityValue {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub country_code: String,
    pub name: String,
    pub state_code: String,
}

/// A selectable city within a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityOption {
    pub label: String,
    pub value: CityValue,
}

impl CityOption {
    pub fn country_code(&self) -> &str {
        &self.value.country_code
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.value.coordinates
    }
}

/// Geography dataset errors
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("{record}: missing {field}")]
    MissingCoordinate { record: String, field: &'static str },
    #[error("{record}: invalid {field} {value:?}")]
    InvalidCoordinate {
        record: String,
        field: &'static str,
        value: String,
    },
    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),
    #[error("Dataset IO error: {0}")]
    Io(#[from] std::io::Error),
}
