//! Shaping of accepted candidates into the output schema

use crate::error::{InboxError, Result};
use crate::types::{Lead, LeadCandidate};
use regex::Regex;

static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

impl TryFrom<LeadCandidate> for Lead {
    type Error = InboxError;

    fn try_from(candidate: LeadCandidate) -> Result<Self> {
        let client = required("client", candidate.client().to_string())?;
        let company = required("company", candidate.platform_name().to_string())?;
        let estate_name = required("estateName", candidate.estate_name().to_string())?;

        let phone = optional(candidate.phone).map(check_phone).transpose()?;
        let email = optional(candidate.email).map(check_email).transpose()?;
        let estate_id = optional(candidate.estate_id);

        Ok(Self {
            client,
            company,
            estate_name,
            phone,
            email,
            estate_id,
        })
    }
}

fn required(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(InboxError::invalid(field, "must not be blank"));
    }
    Ok(value)
}

/// Blank optional values are treated as absent
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn check_email(value: String) -> Result<String> {
    let trimmed = value.trim();
    if EMAIL_REGEX.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(InboxError::invalid(
            "email",
            format!("not a single address: {value:?}"),
        ))
    }
}

fn check_phone(value: String) -> Result<String> {
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let well_formed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));

    if has_digit && well_formed {
        Ok(value)
    } else {
        Err(InboxError::invalid(
            "phone",
            format!("unexpected characters: {value:?}"),
        ))
    }
}
