//! Line-by-line record assembly

use crate::detector;
use crate::extractors::{ExtractorRegistry, FieldExtractor};
use crate::types::LeadCandidate;
use tracing::debug;

/// Whether a strategy is currently consuming lines
#[derive(Clone, Copy)]
enum State<'r> {
    Idle,
    Active(&'r dyn FieldExtractor),
}

/// Holds the one in-flight candidate and the strategy feeding it
///
/// Lines are pushed in order with [`RecordAccumulator::push`]. A header line
/// arms the sender's strategy, body lines go to that strategy, and a boundary
/// line hands the finished candidate back to the caller and starts afresh.
pub struct RecordAccumulator<'r> {
    registry: &'r ExtractorRegistry,
    state: State<'r>,
    candidate: LeadCandidate,
    flushed: usize,
}

impl<'r> RecordAccumulator<'r> {
    #[must_use]
    pub fn new(registry: &'r ExtractorRegistry) -> Self {
        Self {
            registry,
            state: State::Idle,
            candidate: LeadCandidate::default(),
            flushed: 0,
        }
    }

    /// Feed the next line; returns the candidate closed by a boundary line
    pub fn push(&mut self, line: &str) -> Option<LeadCandidate> {
        if detector::is_boundary(line) {
            return Some(self.flush());
        }

        if detector::is_header(line) {
            self.arm(line);
        } else if let State::Active(extractor) = self.state {
            extractor.extract(line, &mut self.candidate);
        }

        None
    }

    /// Number of candidates closed so far
    #[must_use]
    pub const fn flushed(&self) -> usize {
        self.flushed
    }

    /// True while a recognised strategy is consuming lines
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    /// The candidate assembled since the last boundary
    #[must_use]
    pub const fn pending(&self) -> &LeadCandidate {
        &self.candidate
    }

    fn arm(&mut self, line: &str) {
        let registry = self.registry;
        let platform = detector::detect_platform(line);
        self.candidate.platform = platform;
        self.state = match platform.and_then(|p| registry.get(p)) {
            Some(extractor) => State::Active(extractor),
            None => {
                debug!("No strategy for header: {line}");
                State::Idle
            }
        };
    }

    fn flush(&mut self) -> LeadCandidate {
        self.flushed += 1;
        self.state = State::Idle;
        std::mem::take(&mut self.candidate)
    }
}
