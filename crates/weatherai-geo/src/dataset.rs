//! Raw geography records, in the shape of the `country-state-city` package.
//!
//! Records are loaded as-is; coordinates may be missing. Validation happens
//! when the catalog turns records into options. City files may use either the
//! keyed object form or the package's compact
//! `[name, countryCode, stateCode, latitude, longitude]` rows, so a full
//! export can be dropped into a dataset directory unchanged.

use crate::types::GeoError;
use serde::Deserialize;
use std::path::Path;

const EMBEDDED_COUNTRIES: &str = include_str!("../data/countries.json");
const EMBEDDED_CITIES: &str = include_str!("../data/cities.json");

pub const COUNTRIES_FILE: &str = "countries.json";
pub const CITIES_FILE: &str = "cities.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: String,
    pub iso_code: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Field order matches the compact row layout, which serde reads positionally.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub state_code: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub countries: Vec<CountryRecord>,
    pub cities: Vec<CityRecord>,
}

impl Dataset {
    /// The dataset compiled into the binary
    pub fn embedded() -> Result<Self, GeoError> {
        Self::from_json(EMBEDDED_COUNTRIES, EMBEDDED_CITIES)
    }

    pub fn from_json(countries: &str, cities: &str) -> Result<Self, GeoError> {
        Ok(Self {
            countries: serde_json::from_str(countries)?,
            cities: serde_json::from_str(cities)?,
        })
    }

    /// Load `countries.json` and `cities.json` from a directory
    pub fn from_dir(dir: &Path) -> Result<Self, GeoError> {
        let countries = std::fs::read_to_string(dir.join(COUNTRIES_FILE))?;
        let cities = std::fs::read_to_string(dir.join(CITIES_FILE))?;
        tracing::debug!("Loaded dataset from {}", dir.display());
        Self::from_json(&countries, &cities)
    }
}
