use weatherai_core::UiConfig;

/// Landing page hosting the location picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub title: String,
    pub subtitle: String,
    pub country_count: usize,
}

impl HomePage {
    pub fn new(ui: &UiConfig, country_count: usize) -> Self {
        Self {
            title: ui.title.clone(),
            subtitle: ui.subtitle.clone(),
            country_count,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n\nChoose a country ({} available), then a city.",
            self.title, self.subtitle, self.country_count
        )
    }
}
