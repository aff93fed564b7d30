use std::time::Duration;

/// The hosting page, as seen by the submit flow.
#[allow(async_fn_in_trait)]
pub trait PageContext {
    /// URL of the page the visitor is on. Empty if the host can't tell.
    async fn source_url(&self) -> String;

    /// Navigate the whole page to `url` once `delay` has elapsed.
    fn redirect_after(&self, url: &str, delay: Duration);
}
