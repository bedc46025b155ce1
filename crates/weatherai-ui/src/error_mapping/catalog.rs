use weatherai_core::{AppError, CatalogError};
use weatherai_geo::GeoError;

/// Neither type is local here, so this is a function rather than a `From` impl.
pub fn map_geo_error(e: GeoError) -> AppError {
    match e {
        GeoError::Io(io) => AppError::Io(io),
        other => AppError::Catalog(CatalogError::DatasetUnavailable(other.to_string())),
    }
}
