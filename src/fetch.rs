use url::Url;

use crate::error::ImportError;

/// Fetches the raw HTML of a page with a browser-like user-agent.
///
/// Any failure — unparsable URL, transport error, non-2xx status — is
/// logged with its detail and surfaced as the same generic
/// [`ImportError::Fetch`]. No retries, no explicit timeout; the transport
/// defaults apply.
pub async fn fetch_html(url: &str, user_agent: &str) -> Result<String, ImportError> {
    let parsed = Url::parse(url).map_err(|e| {
        ::log::warn!("Rejecting import URL {}: {}", url, e);
        ImportError::Fetch
    })?;

    ::log::debug!("Fetching {}", parsed);

    let response = reqwest::Client::new()
        .get(parsed)
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| {
            ::log::warn!("Fetch failed for {}: {}", url, e);
            ImportError::Fetch
        })?;

    let status = response.status();
    if !status.is_success() {
        ::log::warn!("Fetch for {} returned status {}", url, status);
        return Err(ImportError::Fetch);
    }

    response.text().await.map_err(|e| {
        ::log::warn!("Failed to read response body for {}: {}", url, e);
        ImportError::Fetch
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_url_is_a_generic_fetch_error() {
        let result = fetch_html("not a url", "test-agent").await;
        assert!(matches!(result, Err(ImportError::Fetch)));
    }
}
