//! Client-side domain syntax check.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::error::{PortalError, PortalResult};
use crate::types::DomainList;

/// One or more labels (alphanumeric and hyphen, not starting with a hyphen,
/// at most 63 chars) followed by an alphabetic TLD of two or more letters.
static DOMAIN_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9][a-zA-Z0-9-]{0,62}\.)+[a-zA-Z]{2,}$").ok()
});

fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(domain))
}

/// Split a comma separated list, trim every entry and check its syntax.
///
/// Empty entries are dropped. Order and duplicates are preserved. All entries
/// failing the pattern are reported together.
pub fn validate_domains(raw: &str) -> PortalResult<DomainList> {
    let domains: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    if domains.is_empty() {
        return Err(PortalError::NoDomains);
    }

    let invalid: Vec<String> = domains
        .iter()
        .filter(|d| !is_valid_domain(d))
        .cloned()
        .collect();

    if !invalid.is_empty() {
        trace!("[Validate] rejected {} of {} entries", invalid.len(), domains.len());
        return Err(PortalError::InvalidDomains(invalid));
    }

    Ok(DomainList::new(domains))
}
