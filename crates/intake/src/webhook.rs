use shared_types::{LeadError, LeadPayload};

/// Destination for captured leads.
///
/// Implementations report success only for a 2xx answer; the response body
/// is never inspected.
#[allow(async_fn_in_trait)]
pub trait LeadWebhook {
    async fn deliver(&self, url: &str, payload: &LeadPayload) -> Result<(), LeadError>;
}

/// Posts leads as JSON over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpWebhook {
    client: reqwest::Client,
}

impl HttpWebhook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadWebhook for HttpWebhook {
    #[tracing::instrument(skip_all, fields(url = url))]
    async fn deliver(&self, url: &str, payload: &LeadPayload) -> Result<(), LeadError> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| LeadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(status = status.as_u16(), source = %payload.source, "Lead delivered");
        Ok(())
    }
}
