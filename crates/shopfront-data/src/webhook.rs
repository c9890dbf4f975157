//! Best-effort webhook delivery.

use serde::Serialize;

use crate::FetchClient;

/// POST `payload` to `url` if one is configured.
///
/// Returns whether the webhook accepted the payload. No URL means no
/// request. Failures are logged at `warn` and swallowed.
pub async fn post_best_effort<T: Serialize + ?Sized>(
    client: &FetchClient,
    url: Option<&str>,
    payload: &T,
) -> bool {
    let Some(url) = url else {
        tracing::debug!("no webhook configured, skipping");
        return false;
    };

    match client.post_json(url, payload).await {
        Ok(response) => {
            tracing::debug!(url, status = response.status, "webhook delivered");
            true
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "webhook delivery failed");
            false
        }
    }
}
