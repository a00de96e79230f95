//! Core types for extracted leads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Client name used when no name was ever captured
pub const ANONYMOUS_CLIENT: &str = "Anonimo";

/// Platform and estate name used when nothing was ever captured
pub const UNKNOWN: &str = "Desconocido";

/// Listing platform that produced a forwarded email
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    #[serde(rename = "CIEN CUADRAS")]
    CienCuadras,
    #[serde(rename = "FINCARAIZ")]
    FincaRaiz,
    #[serde(rename = "PROPPIT")]
    Proppit,
    #[serde(rename = "METRO CUADRADO")]
    MetroCuadrado,
}

impl Platform {
    /// Every known platform, in detection-table order
    pub const ALL: [Self; 4] = [
        Self::CienCuadras,
        Self::FincaRaiz,
        Self::Proppit,
        Self::MetroCuadrado,
    ];

    /// Resolve a sender domain to its platform
    #[must_use]
    pub fn from_domain(domain: &str) -> Option<Self> {
        match domain {
            "ciencuadras.com" => Some(Self::CienCuadras),
            "fincaraiz.com.co" => Some(Self::FincaRaiz),
            "proppit.com" => Some(Self::Proppit),
            "metrocuadrado.com" => Some(Self::MetroCuadrado),
            _ => None,
        }
    }

    /// Identifier stored as the lead's company
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CienCuadras => "CIEN CUADRAS",
            Self::FincaRaiz => "FINCARAIZ",
            Self::Proppit => "PROPPIT",
            Self::MetroCuadrado => "METRO CUADRADO",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lead under construction from the lines of one email
///
/// `None` means the field was never populated. The sentinel accessors
/// (`client`, `platform_name`, `estate_name`) report the placeholder values
/// for unpopulated fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadCandidate {
    pub client: Option<String>,
    pub platform: Option<Platform>,
    pub estate_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub estate_id: Option<String>,
}

impl LeadCandidate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn client(&self) -> &str {
        self.client.as_deref().unwrap_or(ANONYMOUS_CLIENT)
    }

    #[must_use]
    pub fn platform_name(&self) -> &'static str {
        self.platform.map_or(UNKNOWN, Platform::as_str)
    }

    #[must_use]
    pub fn estate_name(&self) -> &str {
        self.estate_name.as_deref().unwrap_or(UNKNOWN)
    }

    /// True while the estate name still holds the placeholder
    #[must_use]
    pub fn estate_name_unknown(&self) -> bool {
        self.estate_name() == UNKNOWN
    }

    /// True when no estate id was captured, or an empty one was
    #[must_use]
    pub fn estate_id_missing(&self) -> bool {
        self.estate_id.as_deref().is_none_or(str::is_empty)
    }

    /// True when every sentinel field still reads as its placeholder
    #[must_use]
    pub fn is_empty_shell(&self) -> bool {
        self.client() == ANONYMOUS_CLIENT
            && self.platform_name() == UNKNOWN
            && self.estate_name() == UNKNOWN
    }
}

/// A lead shaped to the output schema consumed by persistence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub client: String,

    /// Platform identifier the lead came from
    pub company: String,

    pub estate_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estate_id: Option<String>,
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.client, self.company, self.estate_name)?;
        if let Some(ref id) = self.estate_id {
            write!(f, " [{id}]")?;
        }
        Ok(())
    }
}
