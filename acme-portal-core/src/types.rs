//! Public types shared by the challenge and issue flows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PortalError;

/// Ordered list of trimmed, non-empty domain names that passed validation.
///
/// Duplicates are kept: the backend decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainList(Vec<String>);

impl DomainList {
    pub(crate) fn new(domains: Vec<String>) -> Self {
        Self(domains)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for DomainList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// Order identifier returned by the challenge endpoint and fed back to the issue endpoint.
///
/// Parsing trims the input and rejects blanks and anything containing a path
/// separator, so the value always maps to exactly one URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(PortalError::MissingId);
        }
        if id.contains(['/', '\\']) {
            return Err(PortalError::InvalidId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body of `POST /challenge`.
#[derive(Debug, Serialize)]
pub(crate) struct ChallengeRequest<'a> {
    pub domains: &'a DomainList,
}

/// One DNS record the user has to publish before issuing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsChallengeRecord {
    /// Record type, usually `TXT`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name (e.g. `_acme-challenge.example.com`).
    pub record: String,
    /// Record content.
    pub value: String,
}

/// Successful `POST /challenge` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOrder {
    /// Identifier to keep for the issue step.
    pub id: String,
    /// Records to publish; may be absent or `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: Vec<DnsChallengeRecord>,
}

/// Successful `POST /issue/{id}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedCertificate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
    /// One or more concatenated PEM certificate blocks, leaf first.
    pub certificate: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private_key: String,
}

/// Optional response fields: an explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error body reported by the backend.
///
/// Shapes seen in the wild: `{"error": "..."}` and
/// `{"status": "error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: String,
}

impl ApiFailure {
    /// Classify a decoded body. Returns `None` when the body is not an error report.
    pub fn from_body(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        let error = object.get("error").filter(|v| is_truthy(v));
        let status_error = object.get("status").and_then(Value::as_str) == Some("error");
        if error.is_none() && !status_error {
            return None;
        }

        let message = object
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .or_else(|| {
                error.map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
            })
            .unwrap_or_else(|| "Unknown error".to_string());

        Some(Self { message })
    }
}

/// JavaScript-style truthiness, matching how the backend's clients read `error`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stored result of one submission.
///
/// Validation errors, backend error bodies and transport failures all end up
/// as [`Outcome::Failure`]; the message is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(message),
        }
    }
}

impl<T> From<PortalError> for Outcome<T> {
    fn from(error: PortalError) -> Self {
        Self::failure(error.to_string())
    }
}

impl<T> From<ApiFailure> for Outcome<T> {
    fn from(failure: ApiFailure) -> Self {
        Self::failure(failure.message)
    }
}

/// Certificate text split for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CertificateChain {
    /// Every block, each ending with the END CERTIFICATE marker.
    pub blocks: Vec<String>,
    /// First block, empty when the input had none.
    pub leaf: String,
    /// Remaining blocks joined by a newline, empty when there is only a leaf.
    pub bundle: String,
}

impl CertificateChain {
    /// Whether there is an intermediate bundle worth rendering.
    pub fn has_bundle(&self) -> bool {
        !self.bundle.is_empty()
    }

    /// Leaf followed by the bundle, newline separated, with a trailing newline.
    pub fn full_chain(&self) -> String {
        let mut out = self.blocks.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

/// Best-effort X.509 details of one rendered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    pub subject: String,
    pub issuer: String,
    pub common_name: Option<String>,
    /// Subject Alternative Names (DNS entries only).
    pub san: Vec<String>,
    /// RFC 3339, UTC.
    pub not_before: String,
    /// RFC 3339, UTC.
    pub not_after: String,
    /// Days until expiration (negative if expired).
    pub days_remaining: i64,
    pub is_expired: bool,
    pub is_ca: bool,
    /// Uppercase hex SHA-256 of the DER bytes.
    pub fingerprint_sha256: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_id_trims_and_rejects_blank() {
        assert_eq!("  abc123 ".parse::<OrderId>().map(|id| id.0), Ok("abc123".into()));
        assert_eq!("   ".parse::<OrderId>(), Err(PortalError::MissingId));
    }

    #[test]
    fn order_id_rejects_path_separators() {
        assert!(matches!(
            "a/b".parse::<OrderId>(),
            Err(PortalError::InvalidId(_))
        ));
        assert!(matches!(
            "..\\x".parse::<OrderId>(),
            Err(PortalError::InvalidId(_))
        ));
    }

    #[test]
    fn failure_from_error_field() {
        let failure = ApiFailure::from_body(&json!({"error": "order not found"}));
        assert_eq!(failure.map(|f| f.message), Some("order not found".into()));
    }

    #[test]
    fn failure_from_status_error_prefers_message() {
        let body = json!({"status": "error", "message": "DNS record not propagated"});
        let failure = ApiFailure::from_body(&body);
        assert_eq!(
            failure.map(|f| f.message),
            Some("DNS record not propagated".into())
        );
    }

    #[test]
    fn message_wins_over_error_field() {
        let failure = ApiFailure::from_body(&json!({"error": "x", "message": "y"}));
        assert_eq!(failure.map(|f| f.message), Some("y".into()));

        let failure = ApiFailure::from_body(&json!({"error": "x", "message": ""}));
        assert_eq!(failure.map(|f| f.message), Some("x".into()));
    }

    #[test]
    fn falsy_error_field_is_not_a_failure() {
        assert!(ApiFailure::from_body(&json!({"error": "", "id": "x"})).is_none());
        assert!(ApiFailure::from_body(&json!({"error": null, "id": "x"})).is_none());
        assert!(ApiFailure::from_body(&json!({"id": "x"})).is_none());
    }

    #[test]
    fn challenge_order_without_dns() {
        let order: ChallengeOrder = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert!(order.dns.is_empty());
    }

    #[test]
    fn challenge_order_with_null_dns() {
        let order: ChallengeOrder =
            serde_json::from_value(json!({"id": "abc", "dns": null})).unwrap();
        assert_eq!(order.id, "abc");
        assert!(order.dns.is_empty());
    }

    #[test]
    fn issued_certificate_null_optional_fields() {
        let cert: IssuedCertificate = serde_json::from_value(json!({
            "message": null,
            "domains": null,
            "certificate": "PEM",
            "privateKey": null
        }))
        .unwrap();
        assert_eq!(cert.certificate, "PEM");
        assert!(cert.message.is_empty());
        assert!(cert.domains.is_empty());
        assert!(cert.private_key.is_empty());
    }

    #[test]
    fn issued_certificate_reads_camel_case_key() {
        let cert: IssuedCertificate = serde_json::from_value(json!({
            "message": "ok",
            "domains": ["example.com"],
            "certificate": "PEM",
            "privateKey": "KEY"
        }))
        .unwrap();
        assert_eq!(cert.private_key, "KEY");
    }

    #[test]
    fn domain_list_serializes_as_array() {
        let list = DomainList::new(vec!["a.com".into(), "b.com".into()]);
        let body = serde_json::to_value(ChallengeRequest { domains: &list });
        assert_eq!(body.ok(), Some(json!({"domains": ["a.com", "b.com"]})));
    }
}
