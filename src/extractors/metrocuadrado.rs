//! Metrocuadrado lead notifications

use super::{FieldExtractor, starred};
use crate::types::{ANONYMOUS_CLIENT, LeadCandidate, Platform};

const LISTING_URL: &str = "https://www.metrocuadrado.com";

#[derive(Debug, Clone, Copy, Default)]
pub struct MetroCuadradoExtractor;

impl FieldExtractor for MetroCuadradoExtractor {
    fn platform(&self) -> Platform {
        Platform::MetroCuadrado
    }

    fn extract(&self, line: &str, lead: &mut LeadCandidate) {
        // First sale or rent line is the listing title.
        if lead.estate_name_unknown() && (line.contains("Venta") || line.contains("Arriendo")) {
            lead.estate_name = Some(line.to_string());
        }

        if line.contains("Nombre:") {
            lead.client = Some(starred(line).unwrap_or(ANONYMOUS_CLIENT).to_string());
        }

        if line.contains("Teléfono:") {
            lead.phone = Some(starred(line).unwrap_or_default().to_string());
        }

        if line.contains(LISTING_URL) {
            lead.estate_id = Some(line.to_string());
        }
    }
}
