//! Proppit lead notifications
//!
//! Proppit has no labelled fields. The line `Propiedad de interés` is
//! followed by the listing title and then the listing reference, so the
//! rules below key off what the previous lines left in the candidate and
//! must run in this exact order.

use super::FieldExtractor;
use crate::detector;
use crate::types::{LeadCandidate, Platform};

/// Section heading preceding the listing title
pub const INTEREST_MARKER: &str = "Propiedad de interés";

const VERIFIED_PHONE: &str = "Teléfono verificado";

#[derive(Debug, Clone, Copy, Default)]
pub struct ProppitExtractor;

impl FieldExtractor for ProppitExtractor {
    fn platform(&self) -> Platform {
        Platform::Proppit
    }

    fn extract(&self, line: &str, lead: &mut LeadCandidate) {
        let titled = lead.estate_name() != INTEREST_MARKER && !lead.estate_name_unknown();
        if titled && lead.estate_id_missing() {
            lead.estate_id = Some(line.to_string());
        }

        if lead.estate_name() == INTEREST_MARKER {
            lead.estate_name = Some(line.to_string());
        }

        if line.contains('@') && !detector::is_header(line) && !line.contains("proppit") {
            lead.email = Some(first_token(line).to_string());
        }

        if line.contains(VERIFIED_PHONE) {
            lead.phone = Some(first_token(line).to_string());
        }

        if line.contains(INTEREST_MARKER) {
            lead.estate_name = Some(INTEREST_MARKER.to_string());
        }
    }
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or_default()
}
