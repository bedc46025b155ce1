//! Country/city selector view-model.
//!
//! Holds the selection state for one picker. Choosing a country clears the
//! city and repopulates the city list; choosing a city navigates to its
//! location page. The city list is only reachable through [`CityControl`],
//! which exists once a country is chosen.

use std::sync::Arc;

use weatherai_core::SelectionPhase;
use weatherai_geo::{CityOption, CountryOption, GeographyCatalog};

use crate::navigation::{navigation_path, Navigator};

const DEFAULT_BASE_PATH: &str = "/location";

/// Lookup failures, and city choices that do not belong to the selected country
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
    #[error("Unknown city {city} in {country}")]
    UnknownCity { country: String, city: String },
}

pub struct LocationSelector {
    catalog: Arc<dyn GeographyCatalog>,
    navigator: Arc<dyn Navigator>,
    base_path: String,
    countries: Vec<CountryOption>,
    city_options: Vec<CityOption>,
    selected_country: Option<CountryOption>,
    selected_city: Option<CityOption>,
    phase: SelectionPhase,
}

impl LocationSelector {
    pub fn new(catalog: Arc<dyn GeographyCatalog>, navigator: Arc<dyn Navigator>) -> Self {
        let countries = catalog.list_countries();
        tracing::debug!("Selector loaded {} countries", countries.len());
        Self {
            catalog,
            navigator,
            base_path: DEFAULT_BASE_PATH.to_string(),
            countries,
            city_options: Vec::new(),
            selected_country: None,
            selected_city: None,
            phase: SelectionPhase::Initial,
        }
    }

    /// Mount the location route somewhere other than `/location`
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn countries(&self) -> &[CountryOption] {
        &self.countries
    }

    pub fn selected_country(&self) -> Option<&CountryOption> {
        self.selected_country.as_ref()
    }

    pub fn selected_city(&self) -> Option<&CityOption> {
        self.selected_city.as_ref()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Find a country option by ISO code or label
    pub fn find_country(&self, query: &str) -> Result<CountryOption, SelectorError> {
        self.catalog
            .find_country(query)
            .ok_or_else(|| SelectorError::UnknownCountry(query.trim().to_string()))
    }

    /// Select a country. Always clears the city, even when re-selecting the
    /// current country. Never navigates.
    pub fn choose_country(&mut self, option: CountryOption) {
        tracing::info!("Country selected: {} ({})", option.label, option.iso_code());
        self.city_options = self.catalog.list_cities(option.iso_code());
        self.selected_country = Some(option);
        self.selected_city = None;
        self.phase = self.phase.on_country_chosen();
    }

    /// The city control, available once a country is selected
    pub fn city_control(&mut self) -> Option<CityControl<'_>> {
        if !self.phase.can_choose_city() {
            return None;
        }
        Some(CityControl { selector: self })
    }

    /// City options of the selected country; `None` before a country is chosen
    pub fn city_options(&self) -> Option<&[CityOption]> {
        self.phase
            .can_choose_city()
            .then_some(self.city_options.as_slice())
    }
}

impl std::fmt::Debug for LocationSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationSelector")
            .field("base_path", &self.base_path)
            .field("countries", &self.countries.len())
            .field("selected_country", &self.selected_country.as_ref().map(|c| &c.label))
            .field("selected_city", &self.selected_city.as_ref().map(|c| &c.label))
            .field("phase", &self.phase)
            .finish()
    }
}

/// City picker of a selector with a chosen country
pub struct CityControl<'a> {
    selector: &'a mut LocationSelector,
}

impl CityControl<'_> {
    pub fn country(&self) -> Option<&CountryOption> {
        self.selector.selected_country.as_ref()
    }

    /// Selectable cities; empty when the country has none listed
    pub fn options(&self) -> &[CityOption] {
        &self.selector.city_options
    }

    /// Find a city option by label (case-insensitive)
    pub fn find(&self, name: &str) -> Result<CityOption, SelectorError> {
        let name = name.trim();
        self.options()
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| self.unknown_city(name))
    }

    /// Select a city and request navigation to its location page.
    /// Returns the requested path.
    ///
    /// Only options listed for the selected country are accepted; anything
    /// else leaves the selection untouched and navigates nowhere.
    pub fn choose(self, option: CityOption) -> Result<String, SelectorError> {
        if !self.options().contains(&option) {
            tracing::warn!(
                "Rejected city {} ({}): not listed for the selected country",
                option.label,
                option.country_code()
            );
            return Err(self.unknown_city(&option.label));
        }

        let selector = self.selector;
        let path = navigation_path(&selector.base_path, option.coordinates());
        tracing::info!("City selected: {} -> {}", option.label, path);

        selector.selected_city = Some(option);
        selector.phase = selector.phase.on_city_chosen();
        selector.navigator.request_navigation(&path);
        Ok(path)
    }

    fn unknown_city(&self, name: &str) -> SelectorError {
        SelectorError::UnknownCity {
            country: self
                .country()
                .map(|c| c.iso_code().to_string())
                .unwrap_or_default(),
            city: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use weatherai_geo::StaticCatalog;

    fn selector() -> (LocationSelector, Arc<RecordingNavigator>) {
        let catalog = Arc::new(StaticCatalog::embedded().unwrap());
        let nav = Arc::new(RecordingNavigator::new());
        (LocationSelector::new(catalog, nav.clone()), nav)
    }

    #[test]
    fn test_initial_state() {
        let (mut sel, nav) = selector();
        assert_eq!(sel.phase(), SelectionPhase::Initial);
        assert!(sel.selected_country().is_none());
        assert!(sel.selected_city().is_none());
        assert!(sel.city_options().is_none());
        assert!(sel.city_control().is_none());
        assert!(!sel.countries().is_empty());
        assert!(nav.requests().is_empty());
    }

    #[test]
    fn test_choose_country_populates_cities_without_navigating() {
        let (mut sel, nav) = selector();
        let france = sel.find_country("FR").unwrap();
        sel.choose_country(france);

        assert_eq!(sel.phase(), SelectionPhase::CountrySelected);
        let cities = sel.city_options().unwrap();
        assert!(!cities.is_empty());
        assert!(cities.iter().all(|c| c.country_code() == "FR"));
        assert!(nav.requests().is_empty());
    }

    #[test]
    fn test_choose_city_navigates_once() {
        let (mut sel, nav) = selector();
        sel.choose_country(sel.find_country("France").unwrap());

        let control = sel.city_control().unwrap();
        let paris = control.find("paris").unwrap();
        let path = control.choose(paris).unwrap();

        assert_eq!(path, "/location/48.85341000/2.34880000");
        assert_eq!(nav.requests(), vec!["/location/48.85341000/2.34880000"]);
        assert_eq!(sel.phase(), SelectionPhase::CitySelected);
        assert_eq!(sel.selected_city().unwrap().label, "Paris");
    }

    #[test]
    fn test_city_from_another_country_is_rejected() {
        let (mut sel, nav) = selector();
        sel.choose_country(sel.find_country("DE").unwrap());
        let berlin = sel.city_control().unwrap().find("Berlin").unwrap();

        sel.choose_country(sel.find_country("FR").unwrap());
        let result = sel.city_control().unwrap().choose(berlin);

        assert_eq!(
            result,
            Err(SelectorError::UnknownCity {
                country: "FR".into(),
                city: "Berlin".into()
            })
        );
        assert!(nav.requests().is_empty());
        assert!(sel.selected_city().is_none());
        assert_eq!(sel.phase(), SelectionPhase::CountrySelected);
    }

    #[test]
    fn test_edited_city_option_is_rejected() {
        let (mut sel, nav) = selector();
        sel.choose_country(sel.find_country("FR").unwrap());
        let control = sel.city_control().unwrap();
        let mut forged = control.find("Paris").unwrap();
        forged.label = "Paris, Texas".into();

        assert!(control.choose(forged).is_err());
        assert!(nav.requests().is_empty());
        assert!(sel.selected_city().is_none());
    }

    #[test]
    fn test_country_change_clears_city() {
        let (mut sel, _nav) = selector();
        sel.choose_country(sel.find_country("FR").unwrap());
        let control = sel.city_control().unwrap();
        let lyon = control.find("Lyon").unwrap();
        control.choose(lyon).unwrap();

        sel.choose_country(sel.find_country("DE").unwrap());
        assert!(sel.selected_city().is_none());
        assert_eq!(sel.phase(), SelectionPhase::CountrySelected);
        assert!(sel
            .city_options()
            .unwrap()
            .iter()
            .all(|c| c.country_code() == "DE"));
    }

    #[test]
    fn test_reselecting_same_country_only_resets_city() {
        let (mut sel, nav) = selector();
        let japan = sel.find_country("JP").unwrap();
        sel.choose_country(japan.clone());
        let before = sel.city_options().unwrap().to_vec();
        let control = sel.city_control().unwrap();
        let tokyo = control.find("Tokyo").unwrap();
        control.choose(tokyo).unwrap();

        sel.choose_country(japan.clone());
        assert_eq!(sel.selected_country(), Some(&japan));
        assert!(sel.selected_city().is_none());
        assert_eq!(sel.city_options().unwrap(), before.as_slice());
        assert_eq!(nav.requests().len(), 1);
    }

    #[test]
    fn test_country_without_cities_has_empty_control() {
        let (mut sel, nav) = selector();
        sel.choose_country(sel.find_country("AQ").unwrap());
        let control = sel.city_control().unwrap();
        assert!(control.options().is_empty());
        assert_eq!(
            control.find("McMurdo"),
            Err(SelectorError::UnknownCity {
                country: "AQ".into(),
                city: "McMurdo".into()
            })
        );
        assert!(nav.requests().is_empty());
    }

    #[test]
    fn test_unknown_country() {
        let (sel, _nav) = selector();
        assert_eq!(
            sel.find_country("Atlantis"),
            Err(SelectorError::UnknownCountry("Atlantis".into()))
        );
    }

    #[test]
    fn test_find_country_matches_catalog_lookup() {
        let (sel, _nav) = selector();
        let catalog = StaticCatalog::embedded().unwrap();
        for query in ["fr", " France ", "germany", "JP"] {
            assert_eq!(sel.find_country(query).ok(), catalog.find_country(query));
        }
    }

    #[test]
    fn test_custom_base_path() {
        let (sel, nav) = selector();
        let mut sel = sel.with_base_path("/weather");
        sel.choose_country(sel.find_country("KE").unwrap());
        let control = sel.city_control().unwrap();
        let nairobi = control.find("Nairobi").unwrap();
        control.choose(nairobi).unwrap();
        assert_eq!(nav.last().as_deref(), Some("/weather/-1.28333000/36.81667000"));
    }

    #[test]
    fn test_country_list_is_snapshotted() {
        let (sel, _nav) = selector();
        let catalog = StaticCatalog::embedded().unwrap();
        assert_eq!(sel.countries(), catalog.list_countries().as_slice());
    }
}
