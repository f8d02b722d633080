use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    configuration::EnrichmentSettings,
    domain::{
        brand::{
            fallback_description, first_sentence, guess_domain, DescriptionSource,
            EnrichmentResult,
        },
        content::{offer_for, sitelinks_for},
        industry::classify,
    },
};

/// Seam for the preview engine so tests can substitute a double.
#[async_trait]
pub trait BrandFetcher: Send + Sync {
    async fn fetch_brand(&self, name: &str) -> EnrichmentResult;
}

/// Enriches a raw company name with a logo reference, a one-sentence
/// description and derived display content from public endpoints.
pub struct Scout {
    client: Client,
    favicon_base_url: String,
    favicon_size: u16,
    summary_base_url: String,
    domain_suffix: String,
}

#[derive(Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
}

impl Scout {
    pub fn new(settings: EnrichmentSettings) -> Self {
        Scout {
            client: reqwest::Client::new(),
            favicon_base_url: settings.favicon_base_url,
            favicon_size: settings.favicon_size,
            summary_base_url: settings.summary_base_url,
            domain_suffix: settings.domain_suffix,
        }
    }

    // URL construction cannot fail; a domain with no favicon just renders
    // nothing on the other end.
    fn favicon_url(&self, domain: &str) -> String {
        format!(
            "{}?domain={}&sz={}",
            self.favicon_base_url, domain, self.favicon_size
        )
    }

    async fn fetch_summary(&self, name: &str) -> anyhow::Result<String> {
        let url = format!("{}/{}", self.summary_base_url, urlencoding::encode(name));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Summary request failed")?
            .error_for_status()
            .context("Summary lookup returned an error status")?;

        let summary = response
            .json::<SummaryResponse>()
            .await
            .context("Malformed summary payload")?;

        summary
            .extract
            .as_deref()
            .and_then(first_sentence)
            .context("Summary had no usable extract")
    }
}

#[async_trait]
impl BrandFetcher for Scout {
    /// Always resolves: every lookup failure degrades to generic content.
    async fn fetch_brand(&self, name: &str) -> EnrichmentResult {
        let name = name.trim();
        let domain = guess_domain(name, &self.domain_suffix);
        let logo_url = self.favicon_url(&domain);

        let (description, source) = match self.fetch_summary(name).await {
            Ok(sentence) => (sentence, DescriptionSource::Fetched),
            Err(e) => {
                log::warn!("Summary lookup failed for {}: {:?}", name, e);
                (fallback_description(name), DescriptionSource::Fallback)
            }
        };

        // The fallback text never participates in classification.
        let industry = match source {
            DescriptionSource::Fetched => classify(name, &description),
            DescriptionSource::Fallback => classify(name, ""),
        };

        EnrichmentResult {
            logo_url: Some(logo_url),
            description: Some(description),
            description_source: source,
            industry,
            sitelinks: sitelinks_for(industry),
            offer: offer_for(industry, name),
            is_loading: false,
            is_loaded: false,
        }
    }
}
