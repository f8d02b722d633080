use anyhow::Context;
use reqwest::Client;

use crate::domain::lead::Lead;

/// One-shot forwarder for wizard-collected lead details.
pub struct LeadGateway {
    client: Client,
    url: String,
}

impl LeadGateway {
    pub fn new(url: String) -> Self {
        LeadGateway {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// POSTs the lead to the spreadsheet webhook. The original page sent this
    /// as an opaque no-cors request and could not see server-side rejections;
    /// here a non-2xx status is reported as a failure so the wizard can hold
    /// back its confirmation step.
    pub async fn submit(&self, lead: &Lead) -> anyhow::Result<()> {
        log::info!("Submitting lead for company: {}", lead.company_name);

        self.client
            .post(&self.url)
            .json(lead)
            .send()
            .await
            .context("Failed to reach the lead webhook")?
            .error_for_status()
            .context("Lead webhook rejected the submission")?;

        Ok(())
    }
}
