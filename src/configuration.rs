use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub webdriver: WebdriverSettings,
    pub scrape: ScrapeSettings,
}

#[derive(Deserialize, Clone)]
pub struct WebdriverSettings {
    pub server_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub implicit_wait_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub input_wait_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub price_wait_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub settle_delay_secs: u64,
}

#[derive(Deserialize, Clone)]
pub struct ScrapeSettings {
    pub search_product: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_search_results: usize,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .add_source(config::File::from(base_path.join("configuration.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
