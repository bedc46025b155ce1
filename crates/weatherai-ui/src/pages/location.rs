//! Location page. Echoes its route parameters; weather lookup is not wired in.

use crate::route::LocationParams;

pub struct LocationPage;

impl LocationPage {
    pub const HEADING: &'static str = "WeatherPage";

    pub fn render(params: &LocationParams) -> String {
        tracing::info!(
            city = params.city.as_deref().unwrap_or(""),
            lat = %params.lat,
            long = %params.long,
            "Rendering location page"
        );

        let details: Vec<&str> = params
            .city
            .as_deref()
            .into_iter()
            .chain([params.lat.as_str(), params.long.as_str()])
            .collect();

        format!(
            "{}\nWelcome to {}! {}",
            Self::HEADING,
            Self::HEADING,
            details.join(" ")
        )
    }
}
