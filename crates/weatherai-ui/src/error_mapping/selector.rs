use crate::models::selector_model::SelectorError;
use weatherai_core::{AppError, CatalogError};

impl From<SelectorError> for AppError {
    fn from(e: SelectorError) -> Self {
        match e {
            SelectorError::UnknownCountry(s) => AppError::Catalog(CatalogError::CountryNotFound(s)),
            SelectorError::UnknownCity { country, city } => {
                AppError::Catalog(CatalogError::CityNotFound { country, city })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_city_maps_to_catalog_error() {
        let err: AppError = SelectorError::UnknownCity {
            country: "FR".into(),
            city: "Gotham".into(),
        }
        .into();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::CityNotFound { .. })
        ));
    }
}
