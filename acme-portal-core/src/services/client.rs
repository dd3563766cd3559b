//! HTTP client for the certificate backend.
//!
//! Two endpoints, both `POST`:
//! - `{base}/challenge` with `{"domains": [...]}`
//! - `{base}/issue/{id}` without a body
//!
//! The JSON body is decoded regardless of the HTTP status. Error bodies become
//! [`Outcome::Failure`]; network and decode problems are returned as `Err`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{PortalError, PortalResult};
use crate::types::{
    ApiFailure, ChallengeOrder, ChallengeRequest, DomainList, IssuedCertificate, OrderId, Outcome,
};
use crate::utils::truncate_for_log;

/// Backend operations used by the two flows.
#[async_trait]
pub trait CertificateApi: Send + Sync {
    /// `POST {base}/challenge`
    async fn request_challenge(&self, domains: &DomainList)
        -> PortalResult<Outcome<ChallengeOrder>>;

    /// `POST {base}/issue/{id}`
    async fn issue_certificate(&self, id: &OrderId) -> PortalResult<Outcome<IssuedCertificate>>;
}

/// reqwest-backed [`CertificateApi`].
#[derive(Debug, Clone)]
pub struct HttpCertificateApi {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpCertificateApi {
    /// Create a client for `base_url`.
    ///
    /// The URL may carry a path prefix (`https://host/api`); endpoint segments
    /// are appended to it.
    pub fn new(base_url: &str, timeout: Duration) -> PortalResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| PortalError::Config(format!("Invalid API URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(PortalError::Config(format!(
                "Invalid API URL '{base_url}': cannot be a base"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("acme-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortalError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> PortalResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| PortalError::Config(format!("Invalid API URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a POST and decode the body as JSON.
    ///
    /// `log_body` is off for responses that carry key material.
    async fn post_json<B: Serialize + Sync + ?Sized>(
        &self,
        url: Url,
        body: Option<&B>,
        log_body: bool,
    ) -> PortalResult<Value> {
        debug!("[API] POST {url}");

        let mut request = self.client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                PortalError::Transport(format!(
                    "Request timed out after {}s",
                    self.timeout.as_secs()
                ))
            } else {
                PortalError::Transport(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        debug!("[API] Response Status: {status}");

        let text = response
            .text()
            .await
            .map_err(|e| PortalError::Transport(format!("Failed to read response body: {e}")))?;

        if log_body {
            debug!("[API] Response Body: {}", truncate_for_log(&text));
        } else {
            debug!("[API] Response Body: <{} bytes>", text.len());
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!("[API] Non-JSON response (HTTP {status}): {e}");
            PortalError::Parse(format!("Invalid JSON response (HTTP {status}): {e}"))
        })
    }
}

/// Turn a decoded body into an [`Outcome`].
pub(crate) fn decode_outcome<T: DeserializeOwned>(body: Value) -> PortalResult<Outcome<T>> {
    if let Some(failure) = ApiFailure::from_body(&body) {
        return Ok(failure.into());
    }
    serde_json::from_value(body).map(Outcome::Success).map_err(|e| {
        error!("[API] Unexpected response shape: {e}");
        PortalError::Parse(format!("Unexpected response: {e}"))
    })
}

#[async_trait]
impl CertificateApi for HttpCertificateApi {
    async fn request_challenge(
        &self,
        domains: &DomainList,
    ) -> PortalResult<Outcome<ChallengeOrder>> {
        let url = self.endpoint(&["challenge"])?;
        let body = self
            .post_json(url, Some(&ChallengeRequest { domains }), true)
            .await?;
        decode_outcome(body)
    }

    async fn issue_certificate(&self, id: &OrderId) -> PortalResult<Outcome<IssuedCertificate>> {
        let url = self.endpoint(&["issue", id.as_str()])?;
        let body = self.post_json::<()>(url, None, false).await?;
        decode_outcome(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api(base: &str) -> HttpCertificateApi {
        HttpCertificateApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_on_bare_host() {
        let url = api("http://localhost:8080").endpoint(&["challenge"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/challenge");
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let url = api("https://ssl.example.com/api/").endpoint(&["issue", "abc"]).unwrap();
        assert_eq!(url.as_str(), "https://ssl.example.com/api/issue/abc");
    }

    #[test]
    fn endpoint_percent_encodes_id() {
        let url = api("https://ssl.example.com")
            .endpoint(&["issue", "a b?c#d%"])
            .unwrap();
        assert_eq!(url.path(), "/issue/a%20b%3Fc%23d%25");
    }

    #[test]
    fn invalid_base_url() {
        let err = HttpCertificateApi::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
        let err = HttpCertificateApi::new("mailto:ops@example.com", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn decode_success() {
        let outcome: Outcome<ChallengeOrder> = decode_outcome(json!({
            "id": "abc123",
            "dns": [{"type": "TXT", "record": "_acme", "value": "xyz"}]
        }))
        .unwrap();
        let order = outcome.success().unwrap();
        assert_eq!(order.id, "abc123");
        assert_eq!(order.dns[0].record_type, "TXT");
    }

    #[test]
    fn decode_error_body() {
        let outcome: Outcome<IssuedCertificate> =
            decode_outcome(json!({"status": "error", "message": "Order expired"})).unwrap();
        assert_eq!(outcome.failure_message(), Some("Order expired"));
    }

    #[test]
    fn decode_unexpected_shape() {
        let result: PortalResult<Outcome<IssuedCertificate>> = decode_outcome(json!([1, 2, 3]));
        assert!(matches!(result, Err(PortalError::Parse(_))));
    }
}
