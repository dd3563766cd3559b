//! Log sanitization
//!
//! Issue responses carry the private key next to the certificate. Bodies are
//! only ever logged through [`truncate_for_log`], which blanks every
//! `PRIVATE KEY` PEM block before shortening the rest.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Bytes of the (redacted) body kept in the log line.
const LOG_BODY_LIMIT: usize = 256;

const REDACTED: &str = "[private key redacted]";

/// `-----BEGIN <anything> PRIVATE KEY-----` up to the matching END marker.
///
/// An unterminated block is redacted to the end of the text. Escaped
/// newlines inside a JSON string are covered as well, since `.` also spans them.
static PRIVATE_KEY_BLOCK: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?s)-----BEGIN [A-Z0-9 ]*PRIVATE KEY-----.*?(?:-----END [A-Z0-9 ]*PRIVATE KEY-----|\z)")
        .ok()
});

fn redact_private_keys(s: &str) -> Cow<'_, str> {
    match PRIVATE_KEY_BLOCK.as_ref() {
        Some(re) => re.replace_all(s, REDACTED),
        // 正则无法编译时宁可不记录内容
        None if s.contains("PRIVATE KEY") => Cow::Borrowed(REDACTED),
        None => Cow::Borrowed(s),
    }
}

/// Largest char boundary not after `index`.
fn char_boundary_before(s: &str, index: usize) -> usize {
    (0..=index.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}

/// Response body as it may appear in the log.
///
/// Private keys are replaced first; the result is then cut to
/// `LOG_BODY_LIMIT` bytes with the original length appended.
pub fn truncate_for_log(body: &str) -> String {
    let redacted = redact_private_keys(body);
    if redacted.len() <= LOG_BODY_LIMIT {
        return redacted.into_owned();
    }
    let cut = char_boundary_before(&redacted, LOG_BODY_LIMIT);
    format!(
        "{}... [{} of {} bytes]",
        &redacted[..cut],
        cut,
        body.len()
    )
}
