use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub enrichment: EnrichmentSettings,
    pub webhook: WebhookSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct EnrichmentSettings {
    pub favicon_base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub favicon_size: u16,
    pub summary_base_url: String,
    /// Appended to the stripped brand name when guessing a domain.
    pub domain_suffix: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub debounce_ms: u64,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebhookSettings {
    pub url: String,
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
