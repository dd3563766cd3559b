//! Certificate chain rendering and inspection.
//!
//! Splitting is purely textual: fragments are not checked to be valid PEM.
//! Inspection is best effort and only feeds the display.

use chrono::{DateTime, Utc};
use log::trace;
use sha2::{Digest, Sha256};
use x509_parser::extensions::GeneralName;
use x509_parser::pem::parse_x509_pem;

use crate::types::{CertificateChain, CertificateSummary};

const END_MARKER: &str = "-----END CERTIFICATE-----";

/// Split concatenated PEM blocks into the leaf and the intermediate bundle.
///
/// Every fragment between END markers is trimmed, empty fragments are
/// discarded and the marker is re-appended on its own line. The first block
/// is the leaf, the rest joined by `\n` is the bundle.
pub fn split_certificate_chain(pem: &str) -> CertificateChain {
    let blocks: Vec<String> = pem
        .split(END_MARKER)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{fragment}\n{END_MARKER}"))
        .collect();

    let leaf = blocks.first().cloned().unwrap_or_default();
    let bundle = blocks.get(1..).map(|rest| rest.join("\n")).unwrap_or_default();

    trace!("[Cert] split into {} block(s)", blocks.len());

    CertificateChain {
        blocks,
        leaf,
        bundle,
    }
}

/// Parse one PEM block into a [`CertificateSummary`].
///
/// Returns `None` for anything that is not a readable X.509 certificate.
pub fn inspect_certificate(block: &str) -> Option<CertificateSummary> {
    let (_, pem) = parse_x509_pem(block.as_bytes())
        .map_err(|e| trace!("[Cert] PEM parse failed: {e}"))
        .ok()?;
    let cert = pem
        .parse_x509()
        .map_err(|e| trace!("[Cert] X.509 parse failed: {e}"))
        .ok()?;

    let validity = cert.validity();
    let not_before = DateTime::<Utc>::from_timestamp(validity.not_before.timestamp(), 0)?;
    let not_after = DateTime::<Utc>::from_timestamp(validity.not_after.timestamp(), 0)?;
    let days_remaining = (not_after - Utc::now()).num_days();

    let san: Vec<String> = cert
        .subject_alternative_name()
        .ok()
        .flatten()
        .map(|ext| {
            ext.value
                .general_names
                .iter()
                .filter_map(|name| match name {
                    GeneralName::DNSName(dns) => Some((*dns).to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    let common_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(String::from);

    Some(CertificateSummary {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        common_name,
        san,
        not_before: not_before.to_rfc3339(),
        not_after: not_after.to_rfc3339(),
        days_remaining,
        is_expired: days_remaining < 0,
        is_ca: cert.is_ca(),
        fingerprint_sha256: hex::encode_upper(Sha256::digest(&pem.contents)),
    })
}
