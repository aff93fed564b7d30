use dioxus::prelude::*;
use intake::PageContext;
use std::time::Duration;

/// The hosting browser page, reached through `document::eval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageContext for BrowserPage {
    async fn source_url(&self) -> String {
        match document::eval("return window.location.href;")
            .join::<String>()
            .await
        {
            Ok(href) => href,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read the page URL");
                String::new()
            }
        }
    }

    fn redirect_after(&self, url: &str, delay: Duration) {
        tracing::debug!(?delay, "Scheduling redirect");
        document::eval(&redirect_script(url, delay));
    }
}

/// Script that performs a full-page navigation after `delay`.
///
/// The URL goes through JSON encoding, which yields a valid JS string
/// literal whatever the URL contains.
fn redirect_script(url: &str, delay: Duration) -> String {
    let target = serde_json::Value::from(url).to_string();
    format!(
        "setTimeout(function() {{ window.location.href = {target}; }}, {});",
        delay.as_millis()
    )
}
