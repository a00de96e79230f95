//! Fincaraiz lead notifications

use super::{FieldExtractor, capture, starred};
use crate::detector;
use crate::types::{ANONYMOUS_CLIENT, LeadCandidate, Platform, UNKNOWN};
use regex::Regex;

const INTEREST_PHRASE: &str = "un nuevo cliente se ha interesado en tu inmueble";
const REFERENCE_PHRASE: &str = "número de referencia";
const CALL_PHRASE: &str = "LLama al cliente";

static TRAILING_DIGITS_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(\d+)$").unwrap());

/// Everything after the first asterisk
static AFTER_STAR_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*(.*)$").unwrap());

/// Everything before the first asterisk
static BEFORE_STAR_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^(.*?)\*").unwrap());

static PHONE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(\+?\d{1,3})?(\d{10,15})").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct FincaRaizExtractor;

impl FieldExtractor for FincaRaizExtractor {
    fn platform(&self) -> Platform {
        Platform::FincaRaiz
    }

    fn extract(&self, line: &str, lead: &mut LeadCandidate) {
        if line.contains("Subject:") {
            let code = capture(&TRAILING_DIGITS_REGEX, line, 1).unwrap_or_default();
            lead.estate_id = Some(code.to_string());
        }

        // The client's address sits alone on its own line; the latest wins.
        if line.contains('@') && !detector::is_header(line) {
            lead.email = Some(line.to_string());
        }

        if line.contains("nombre") {
            lead.client = Some(starred(line).unwrap_or(ANONYMOUS_CLIENT).to_string());
        }

        if line.contains(INTEREST_PHRASE) {
            let name = capture(&AFTER_STAR_REGEX, line, 1).unwrap_or(UNKNOWN);
            lead.estate_name = Some(name.to_string());
        }

        // Listing titles wrap onto the reference line; the wrapped tail is
        // glued on as-is.
        if !lead.estate_name_unknown() && line.contains(REFERENCE_PHRASE) {
            let tail = capture(&BEFORE_STAR_REGEX, line, 1).unwrap_or_default();
            if let Some(ref mut name) = lead.estate_name {
                name.push_str(tail);
            }
        }

        if line.contains(CALL_PHRASE) {
            let phone = PHONE_REGEX.find(line).map_or("", |m| m.as_str());
            lead.phone = Some(phone.to_string());
        }
    }
}
