//! Record markers and sender platform detection

use crate::types::Platform;
use regex::Regex;

/// Substring marking the forwarded sender line of an email
pub const HEADER_MARKER: &str = "Correo: De:";

/// Line that terminates one email record in the inbox dump
pub const BOUNDARY_MARKER: &str = r#"Content-Type: text/html; charset="UTF-8""#;

static SENDER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"<([^@]+)@([a-zA-Z0-9.-]+)>").unwrap());

#[must_use]
pub fn is_header(line: &str) -> bool {
    line.contains(HEADER_MARKER)
}

#[must_use]
pub fn is_boundary(line: &str) -> bool {
    line.contains(BOUNDARY_MARKER)
}

/// Domain of the first bracketed `<local@domain>` address on the line
#[must_use]
pub fn sender_domain(line: &str) -> Option<&str> {
    SENDER_REGEX
        .captures(line)
        .and_then(|cap| cap.get(2))
        .map(|m| m.as_str())
}

/// Resolve the platform that sent the email announced by a header line
///
/// Returns `None` for unknown domains and for headers without a bracketed
/// address.
#[must_use]
pub fn detect_platform(line: &str) -> Option<Platform> {
    sender_domain(line).and_then(Platform::from_domain)
}
