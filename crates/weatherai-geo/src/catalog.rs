//! Country and city lookups over a static, in-memory dataset.

use std::collections::HashMap;
use std::path::Path;

use crate::dataset::{CityRecord, CountryRecord, Dataset};
use crate::types::{CityOption, CityValue, Coordinates, CountryOption, CountryValue, GeoError};

/// Read-only geography lookups used by the location selector.
///
/// Both queries are pure and synchronous. Implementations must return the
/// same country order on every call.
pub trait GeographyCatalog: Send + Sync {
    /// All known countries
    fn list_countries(&self) -> Vec<CountryOption>;

    /// Cities of the country with `iso_code`. Unknown codes and countries
    /// without cities yield an empty list.
    fn list_cities(&self, iso_code: &str) -> Vec<CityOption>;

    /// Find a country by ISO code or display name (case-insensitive)
    fn find_country(&self, query: &str) -> Option<CountryOption> {
        let query = query.trim();
        self.list_countries().into_iter().find(|c| {
            c.value.iso_code.eq_ignore_ascii_case(query) || c.label.eq_ignore_ascii_case(query)
        })
    }
}

/// Catalog backed by a [`Dataset`] validated up front
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    countries: Vec<CountryOption>,
    cities: HashMap<String, Vec<CityOption>>,
}

impl StaticCatalog {
    /// Catalog over the dataset compiled into the binary
    pub fn embedded() -> Result<Self, GeoError> {
        Ok(Self::from_dataset(Dataset::embedded()?))
    }

    /// Catalog over `dir` when given, otherwise the embedded dataset
    pub fn load(dir: Option<&Path>) -> Result<Self, GeoError> {
        match dir {
            Some(dir) => Ok(Self::from_dataset(Dataset::from_dir(dir)?)),
            None => Self::embedded(),
        }
    }

    /// Build options from raw records. Records with unusable coordinates are
    /// skipped so they never reach a route.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let countries: Vec<CountryOption> = dataset
            .countries
            .into_iter()
            .filter_map(|record| match country_option(record) {
                Ok(option) => Some(option),
                Err(e) => {
                    tracing::warn!("Skipping country: {}", e);
                    None
                }
            })
            .collect();

        let mut cities: HashMap<String, Vec<CityOption>> = HashMap::new();
        let mut skipped = 0usize;
        for record in dataset.cities {
            match city_option(record) {
                Ok(option) => cities
                    .entry(option.value.country_code.clone())
                    .or_default()
                    .push(option),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping city: {}", e);
                }
            }
        }

        tracing::debug!(
            "Catalog ready: {} countries, {} cities ({} skipped)",
            countries.len(),
            cities.values().map(Vec::len).sum::<usize>(),
            skipped
        );

        Self { countries, cities }
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

impl GeographyCatalog for StaticCatalog {
    fn list_countries(&self) -> Vec<CountryOption> {
        self.countries.clone()
    }

    fn list_cities(&self, iso_code: &str) -> Vec<CityOption> {
        let cities = self.cities.get(iso_code).cloned().unwrap_or_default();
        tracing::debug!("{} cities for {:?}", cities.len(), iso_code);
        cities
    }
}

fn country_option(record: CountryRecord) -> Result<CountryOption, GeoError> {
    let coordinates = Coordinates::new(
        &record.name,
        record.latitude.as_deref(),
        record.longitude.as_deref(),
    )?;
    Ok(CountryOption {
        label: record.name,
        value: CountryValue {
            coordinates,
            iso_code: record.iso_code,
        },
    })
}

fn city_option(record: CityRecord) -> Result<CityOption, GeoError> {
    let coordinates = Coordinates::new(
        &record.name,
        record.latitude.as_deref(),
        record.longitude.as_deref(),
    )?;
    Ok(CityOption {
        label: record.name.clone(),
        value: CityValue {
            coordinates,
            country_code: record.country_code,
            name: record.name,
            state_code: record.state_code,
        },
    })
}
