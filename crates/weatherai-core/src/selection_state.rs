//! Country/city selection state machine.
//!
//! Tracks which controls of the location selector are live. Used by
//! `LocationSelector` in the UI crate.

/// Phase of a country/city selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Initial,
    CountrySelected,
    CitySelected,
}

impl SelectionPhase {
    /// True once a country has been chosen; the city control is only live then.
    pub fn can_choose_city(self) -> bool {
        !matches!(self, SelectionPhase::Initial)
    }

    /// State after a country is chosen. Always clears any city choice.
    pub fn on_country_chosen(self) -> Self {
        SelectionPhase::CountrySelected
    }

    /// State after a city is chosen. Unreachable from `Initial`.
    pub fn on_city_chosen(self) -> Self {
        if self.can_choose_city() {
            SelectionPhase::CitySelected
        } else {
            self
        }
    }
}
