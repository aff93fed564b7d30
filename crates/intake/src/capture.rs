use chrono::Utc;
use shared_types::{LeadCaptureConfig, LeadDraft, LeadError, LeadPayload};
use std::time::Duration;

use crate::page::PageContext;
use crate::webhook::LeadWebhook;

/// Resolved destinations for one dialog instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureSettings {
    pub webhook_url: String,
    pub redirect_url: String,
    pub redirect_delay: Duration,
}

impl CaptureSettings {
    pub fn new(webhook_url: impl Into<String>, redirect_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            redirect_url: redirect_url.into(),
            redirect_delay: Duration::from_millis(shared_types::DEFAULT_REDIRECT_DELAY_MS),
        }
    }

    pub fn redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}

impl From<&LeadCaptureConfig> for CaptureSettings {
    fn from(config: &LeadCaptureConfig) -> Self {
        Self::new(config.webhook_url.clone(), config.redirect_url.clone())
            .redirect_delay(Duration::from_millis(config.redirect_delay_ms))
    }
}

/// Drives one submission: validate, POST, then schedule the redirect.
pub struct LeadCapture<W, P> {
    webhook: W,
    page: P,
    settings: CaptureSettings,
}

impl<W: LeadWebhook, P: PageContext> LeadCapture<W, P> {
    pub fn new(webhook: W, page: P, settings: CaptureSettings) -> Self {
        Self {
            webhook,
            page,
            settings,
        }
    }

    /// Submit the draft.
    ///
    /// A draft with any blank field fails before anything leaves the page.
    /// On a 2xx answer the redirect is scheduled and the delivered payload
    /// returned. Clearing the form is left to [`crate::LeadForm::finish`].
    pub async fn submit(&self, draft: &LeadDraft) -> Result<LeadPayload, LeadError> {
        let lead = draft.validate()?;

        let source = self.page.source_url().await;
        let payload = LeadPayload::new(lead, source, Utc::now());

        self.webhook
            .deliver(&self.settings.webhook_url, &payload)
            .await?;

        self.page
            .redirect_after(&self.settings.redirect_url, self.settings.redirect_delay);

        Ok(payload)
    }
}
