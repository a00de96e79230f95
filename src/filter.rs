//! Flush-time decision on accumulated candidates

use crate::error::InboxError;
use crate::types::{Lead, LeadCandidate};
use tracing::{debug, warn};

/// Outcome of closing one record
#[derive(Debug)]
pub enum Verdict {
    /// Shaped and ready to commit
    Accepted(Lead),

    /// Nothing was learned about the record
    EmptyShell,

    /// Carried signal but failed output schema shaping
    Rejected(InboxError),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Decide whether a flushed candidate becomes a lead
#[must_use]
pub fn evaluate(candidate: LeadCandidate) -> Verdict {
    if candidate.is_empty_shell() {
        debug!("Dropping empty record");
        return Verdict::EmptyShell;
    }

    let summary = format!("{candidate:?}");
    match Lead::try_from(candidate) {
        Ok(lead) => Verdict::Accepted(lead),
        Err(e) => {
            warn!("Rejected lead from inbox: {e}\n{summary}");
            Verdict::Rejected(e)
        }
    }
}
