//! Ciencuadras lead notifications
//!
//! Fields arrive as `*Label:* value` lines; the estate type is inferred from
//! the listing title.

use super::{FieldExtractor, capture};
use crate::types::{ANONYMOUS_CLIENT, LeadCandidate, Platform};
use regex::Regex;

static CODE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"-(\d+)").unwrap());

static NAME_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*Nombre:\*\s*(.*)").unwrap());

static CELLPHONE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*Celular:\*\s*(.*)").unwrap());

static EMAIL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*Email:\*\s*(.*)").unwrap());

/// Property types recognised in listing titles, first match wins
const ESTATE_TYPES: [&str; 14] = [
    "Apartamento",
    "Casa campestre",
    "Apartaestudio",
    "Edificio",
    "Oficina",
    "Local",
    "Consultorio",
    "Lote",
    "Bodega",
    "Finca",
    "Parqueadero",
    "Depósito",
    "Suite",
    "Casa",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CienCuadrasExtractor;

impl FieldExtractor for CienCuadrasExtractor {
    fn platform(&self) -> Platform {
        Platform::CienCuadras
    }

    fn extract(&self, line: &str, lead: &mut LeadCandidate) {
        if line.contains("Código:") {
            lead.estate_id = Some(capture(&CODE_REGEX, line, 1).unwrap_or_default().to_string());
        }

        if line.contains("Nombre:") {
            let name = capture(&NAME_REGEX, line, 1).unwrap_or(ANONYMOUS_CLIENT);
            lead.client = Some(name.to_string());
        }

        if line.contains("Celular:") {
            lead.phone = Some(capture(&CELLPHONE_REGEX, line, 1).unwrap_or_default().to_string());
        }

        if line.contains("Email:") {
            lead.email = Some(capture(&EMAIL_REGEX, line, 1).unwrap_or_default().to_string());
        }

        if (line.contains("Arriendo") || line.contains("Venta"))
            && lead.estate_name_unknown()
            && let Some(estate_type) = estate_type(line)
        {
            lead.estate_name = Some(estate_type.to_string());
        }
    }
}

fn estate_type(line: &str) -> Option<&'static str> {
    ESTATE_TYPES
        .iter()
        .copied()
        .find(|estate_type| line.contains(estate_type))
}
