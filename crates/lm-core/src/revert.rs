//! The single-slot revert state machine.
//!
//! After a link insertion the session holds exactly one [`PendingRevert`]:
//! the original URL and the span the link landed in. The next resolution
//! overwrites it (last writer wins), inserting plain text or firing the
//! revert clears it. The slot records intent only; the escape-revert command
//! re-validates the document content before mutating anything, because the
//! recorded span may have gone stale under user edits.

use serde::{Deserialize, Serialize};

use crate::document::LineSpan;

/// The one outstanding revertible substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRevert {
    /// The bare URL the inserted link replaces.
    pub original_url: String,
    /// Where the markdown link was inserted.
    pub inserted: LineSpan,
}

/// `Idle` ⇄ `Pending` slot holding at most one [`PendingRevert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RevertSlot {
    #[default]
    Idle,
    Pending(PendingRevert),
}

impl RevertSlot {
    /// Arm the slot, replacing any previous pending revert.
    pub fn arm(&mut self, pending: PendingRevert) {
        *self = RevertSlot::Pending(pending);
    }

    /// Return to `Idle`, discarding any pending revert.
    pub fn clear(&mut self) {
        *self = RevertSlot::Idle;
    }

    /// The pending revert, if armed.
    pub fn peek(&self) -> Option<&PendingRevert> {
        match self {
            RevertSlot::Idle => None,
            RevertSlot::Pending(pending) => Some(pending),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RevertSlot::Pending(_))
    }
}
