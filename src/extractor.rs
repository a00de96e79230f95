//! Fold of a line sequence into committed leads

use crate::accumulator::RecordAccumulator;
use crate::extractors::ExtractorRegistry;
use crate::filter::{self, Verdict};
use crate::reporter::{ParseReport, StreamReporter};
use crate::types::Lead;
use serde::{Deserialize, Serialize};

/// Committed leads of one parse, in inbox order, with its report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseOutcome {
    pub leads: Vec<Lead>,
    pub report: ParseReport,
}

/// Lead extraction over in-memory or streamed inbox content
#[derive(Debug, Default)]
pub struct LeadExtractor {
    registry: ExtractorRegistry,
}

impl LeadExtractor {
    /// Extractor with every known platform strategy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_registry(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    /// Start an incremental parse fed one line at a time
    #[must_use]
    pub fn stream(&self) -> LeadStream<'_> {
        LeadStream {
            accumulator: RecordAccumulator::new(&self.registry),
            reporter: StreamReporter::new(),
            leads: Vec::new(),
        }
    }

    /// Parse a complete inbox dump held in memory
    #[must_use]
    pub fn extract_str(&self, content: &str) -> ParseOutcome {
        self.extract_lines(content.lines())
    }

    /// Parse an already materialised sequence of lines
    pub fn extract_lines<I, S>(&self, lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stream = self.stream();
        for line in lines {
            stream.push(line.as_ref());
        }
        stream.finish()
    }

    /// Parse fallible lines, stopping at the first error
    ///
    /// No leads are returned when any line fails to read.
    pub fn try_extract_lines<I, S, E>(&self, lines: I) -> Result<ParseOutcome, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut stream = self.stream();
        for line in lines {
            stream.push(line?.as_ref());
        }
        Ok(stream.finish())
    }
}

/// An in-progress parse
pub struct LeadStream<'r> {
    accumulator: RecordAccumulator<'r>,
    reporter: StreamReporter,
    leads: Vec<Lead>,
}

impl LeadStream<'_> {
    /// Feed the next line of the inbox
    pub fn push(&mut self, line: &str) {
        let Some(candidate) = self.accumulator.push(line) else {
            return;
        };

        let verdict = filter::evaluate(candidate);
        self.reporter.record(&verdict);
        if let Verdict::Accepted(lead) = verdict {
            self.leads.push(lead);
        }
    }

    /// Leads committed so far
    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// End of input; an unterminated trailing record is discarded
    #[must_use]
    pub fn finish(self) -> ParseOutcome {
        ParseOutcome {
            leads: self.leads,
            report: self.reporter.finish(),
        }
    }
}
