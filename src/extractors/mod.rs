//! Per-platform field extraction strategies
//!
//! Each platform formats its lead notifications differently. A
//! [`FieldExtractor`] knows one format: it receives lines one at a time and
//! fills in whatever fields of the [`LeadCandidate`] the line reveals.
//! Platforms without an extractor in the registry leave candidates untouched.

mod ciencuadras;
mod fincaraiz;
mod metrocuadrado;
mod proppit;

pub use ciencuadras::CienCuadrasExtractor;
pub use fincaraiz::FincaRaizExtractor;
pub use metrocuadrado::MetroCuadradoExtractor;
pub use proppit::ProppitExtractor;

use crate::types::{LeadCandidate, Platform};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Consume one line, mutate one record
pub trait FieldExtractor: Send + Sync {
    /// Platform whose format this extractor understands
    fn platform(&self) -> Platform;

    /// Apply this platform's rules for a single body line
    fn extract(&self, line: &str, lead: &mut LeadCandidate);
}

/// Lookup table from platform to its extraction strategy
pub struct ExtractorRegistry {
    extractors: HashMap<Platform, Box<dyn FieldExtractor>>,
}

impl ExtractorRegistry {
    /// Registry with no strategies; every platform behaves as unrecognized
    #[must_use]
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registry with the strategies for every known platform
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(CienCuadrasExtractor));
        registry.register(Box::new(FincaRaizExtractor));
        registry.register(Box::new(MetroCuadradoExtractor));
        registry.register(Box::new(ProppitExtractor));
        registry
    }

    /// Add or replace the strategy for the extractor's platform
    pub fn register(&mut self, extractor: Box<dyn FieldExtractor>) {
        self.extractors.insert(extractor.platform(), extractor);
    }

    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&dyn FieldExtractor> {
        self.extractors.get(&platform).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut platforms: Vec<_> = self.extractors.keys().map(|p| p.as_str()).collect();
        platforms.sort_unstable();
        f.debug_struct("ExtractorRegistry")
            .field("platforms", &platforms)
            .finish()
    }
}

/// Non-empty capture group `group` of the first match on `line`
fn capture<'a>(regex: &Regex, line: &'a str, group: usize) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|cap| cap.get(group))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// Text between the first pair of asterisks
static STARRED_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

fn starred(line: &str) -> Option<&str> {
    capture(&STARRED_REGEX, line, 1)
}
