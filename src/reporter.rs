//! Read and commit bookkeeping for one parse

use crate::filter::Verdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Final figures for one pass over the inbox
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseReport {
    /// Records closed by a boundary line
    pub read: usize,

    /// Records that became leads
    pub committed: usize,

    /// Records with signal that failed schema shaping
    pub rejected: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ParseReport {
    /// Records read but not committed
    #[must_use]
    pub const fn missing(&self) -> usize {
        self.read.saturating_sub(self.committed)
    }
}

/// Running counters, turned into a [`ParseReport`] at stream end
#[derive(Debug, Clone)]
pub struct StreamReporter {
    read: usize,
    committed: usize,
    rejected: usize,
    started_at: DateTime<Utc>,
}

impl StreamReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            read: 0,
            committed: 0,
            rejected: 0,
            started_at: Utc::now(),
        }
    }

    /// Count one closed record by its verdict
    pub const fn record(&mut self, verdict: &Verdict) {
        self.read += 1;
        match verdict {
            Verdict::Accepted(_) => self.committed += 1,
            Verdict::Rejected(_) => self.rejected += 1,
            Verdict::EmptyShell => {}
        }
    }

    #[must_use]
    pub const fn read(&self) -> usize {
        self.read
    }

    #[must_use]
    pub const fn committed(&self) -> usize {
        self.committed
    }

    /// Close the stream and log the summary
    #[must_use]
    pub fn finish(self) -> ParseReport {
        let report = ParseReport {
            read: self.read,
            committed: self.committed,
            rejected: self.rejected,
            started_at: self.started_at,
            finished_at: Utc::now(),
        };

        info!(
            read = report.read,
            committed = report.committed,
            missing = report.missing(),
            "Inbox fully read"
        );

        report
    }
}

impl Default for StreamReporter {
    fn default() -> Self {
        Self::new()
    }
}
