//! Review lifecycle shared by every reviewable resource
//!
//! Model accounts, profile updates, profile media and timesheets all carry a
//! `status_id` with the same three states. The backend owns the transitions;
//! the portal only relays them, but names them here for request payloads and
//! audit logs.

use std::fmt;

use thiserror::Error;

/// Tri-state review marker: pending (1), approved (2), rejected (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// A `status_id` outside the known lifecycle.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown review status id: {0}")]
pub struct UnknownStatus(pub i64);

impl ReviewStatus {
    /// The wire `status_id` for this state.
    pub fn id(self) -> i64 {
        match self {
            ReviewStatus::Pending => 1,
            ReviewStatus::Approved => 2,
            ReviewStatus::Rejected => 3,
        }
    }

    /// Resolve a wire `status_id`, if it names a known state.
    pub fn from_id(id: i64) -> Option<Self> {
        Self::try_from(id).ok()
    }

    /// Human-readable label, as shown in review logs and dashboards.
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

impl TryFrom<i64> for ReviewStatus {
    type Error = UnknownStatus;

    fn try_from(id: i64) -> Result<Self, UnknownStatus> {
        match id {
            1 => Ok(ReviewStatus::Pending),
            2 => Ok(ReviewStatus::Approved),
            3 => Ok(ReviewStatus::Rejected),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
