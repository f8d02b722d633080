use serde::Serialize;

use crate::domain::industry::Industry;

/// Where the description on an [`EnrichmentResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptionSource {
    Fetched,
    Fallback,
}

/// Display-ready brand content derived from a raw company name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub description_source: DescriptionSource,
    pub industry: Industry,
    pub sitelinks: Vec<String>,
    pub offer: String,
    pub is_loading: bool,
    pub is_loaded: bool,
}

impl Default for EnrichmentResult {
    fn default() -> Self {
        EnrichmentResult {
            logo_url: None,
            description: None,
            description_source: DescriptionSource::Fallback,
            industry: Industry::General,
            sitelinks: vec![],
            offer: "Get 20% off your first query".to_string(),
            is_loading: false,
            is_loaded: false,
        }
    }
}

/// Naive domain guess: lower-case, keep alphanumerics, append the configured
/// suffix. Nobody checks whether the domain actually exists.
pub fn guess_domain(name: &str, suffix: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    format!("{}{}", slug, suffix)
}

/// Canned description used whenever the summary lookup fails.
pub fn fallback_description(name: &str) -> String {
    format!(
        "Official verified business account for {}. Connect with us for the best experience.",
        name
    )
}

/// First sentence of a summary extract, period restored.
pub fn first_sentence(text: &str) -> Option<String> {
    match text.split('.').next() {
        Some(s) if !s.trim().is_empty() => Some(format!("{}.", s)),
        _ => None,
    }
}
