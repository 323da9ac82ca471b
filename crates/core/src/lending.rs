//! Lending request lifecycle rules.
//!
//! A request starts `pending`. The borrower accepts or rejects it, the lender
//! may cancel it while it is still pending, and an accepted loan ends when the
//! lender marks the book returned. `rejected`, `cancelled` and `returned` are
//! terminal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a lending request, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LendingStatus {
    Pending,
    Accepted,
    Rejected,
    Returned,
    Cancelled,
}

/// Every status, in lifecycle order.
pub const ALL_STATUSES: &[LendingStatus] = &[
    LendingStatus::Pending,
    LendingStatus::Accepted,
    LendingStatus::Rejected,
    LendingStatus::Returned,
    LendingStatus::Cancelled,
];

impl LendingStatus {
    /// The value stored in `lending_requests.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            LendingStatus::Pending => "pending",
            LendingStatus::Accepted => "accepted",
            LendingStatus::Rejected => "rejected",
            LendingStatus::Returned => "returned",
            LendingStatus::Cancelled => "cancelled",
        }
    }

    /// Terminal statuses accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            LendingStatus::Rejected | LendingStatus::Returned | LendingStatus::Cancelled
        )
    }

    /// Statuses reachable from `self` in one step.
    ///
    /// - `pending`  -> `accepted`, `rejected`, `cancelled`
    /// - `accepted` -> `returned`
    pub fn valid_transitions(self) -> &'static [LendingStatus] {
        match self {
            LendingStatus::Pending => &[
                LendingStatus::Accepted,
                LendingStatus::Rejected,
                LendingStatus::Cancelled,
            ],
            LendingStatus::Accepted => &[LendingStatus::Returned],
            LendingStatus::Rejected | LendingStatus::Returned | LendingStatus::Cancelled => &[],
        }
    }
}

impl fmt::Display for LendingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LendingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Internal(format!("Unknown lending status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Transition guards
// ---------------------------------------------------------------------------

/// Validate that moving from `current` to `next` is allowed.
pub fn validate_transition(current: LendingStatus, next: LendingStatus) -> Result<(), CoreError> {
    if current.valid_transitions().contains(&next) {
        Ok(())
    } else {
        Err(CoreError::InvalidState(format!(
            "Cannot move lending request from '{current}' to '{next}'"
        )))
    }
}

/// A record counts as an active loan while it is pending, or accepted and
/// not yet returned. At most one active loan may exist per (book, lender).
pub fn is_active_loan(status: LendingStatus, returned_at: Option<Timestamp>) -> bool {
    match status {
        LendingStatus::Pending => true,
        LendingStatus::Accepted => returned_at.is_none(),
        _ => false,
    }
}

/// Lenders cannot lend to themselves.
pub fn validate_parties(lender_id: DbId, borrower_id: DbId) -> Result<(), CoreError> {
    if lender_id == borrower_id {
        return Err(CoreError::Validation(
            "Lender and borrower must be different users".to_string(),
        ));
    }
    Ok(())
}

/// Only the lender may cancel or mark a request returned.
pub fn ensure_lender(actor_id: DbId, lender_id: DbId) -> Result<(), CoreError> {
    if actor_id != lender_id {
        return Err(CoreError::Forbidden(
            "Only the lender can perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Only the borrower may accept or reject a request.
pub fn ensure_borrower(actor_id: DbId, borrower_id: DbId) -> Result<(), CoreError> {
    if actor_id != borrower_id {
        return Err(CoreError::Forbidden(
            "Only the borrower can respond to this request".to_string(),
        ));
    }
    Ok(())
}

/// Cancellation is only possible while the request is pending.
pub fn ensure_cancellable(status: LendingStatus) -> Result<(), CoreError> {
    validate_transition(status, LendingStatus::Cancelled)
}

/// A loan can be marked returned only when accepted and not already returned.
pub fn ensure_returnable(
    status: LendingStatus,
    returned_at: Option<Timestamp>,
) -> Result<(), CoreError> {
    validate_transition(status, LendingStatus::Returned)?;
    if returned_at.is_some() {
        return Err(CoreError::InvalidState(
            "Lending request has already been returned".to_string(),
        ));
    }
    Ok(())
}

/// The status a borrower's answer moves a pending request to.
pub fn response_status(accept: bool) -> LendingStatus {
    if accept {
        LendingStatus::Accepted
    } else {
        LendingStatus::Rejected
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn status_round_trips_through_text() {
        for status in ALL_STATUSES {
            let parsed: LendingStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        assert!("PENDING".parse::<LendingStatus>().is_err());
        assert!("".parse::<LendingStatus>().is_err());
    }

    #[test]
    fn pending_can_be_accepted_rejected_or_cancelled() {
        assert!(validate_transition(LendingStatus::Pending, LendingStatus::Accepted).is_ok());
        assert!(validate_transition(LendingStatus::Pending, LendingStatus::Rejected).is_ok());
        assert!(validate_transition(LendingStatus::Pending, LendingStatus::Cancelled).is_ok());
        assert!(validate_transition(LendingStatus::Pending, LendingStatus::Returned).is_err());
    }

    #[test]
    fn accepted_can_only_be_returned() {
        assert!(validate_transition(LendingStatus::Accepted, LendingStatus::Returned).is_ok());
        assert!(validate_transition(LendingStatus::Accepted, LendingStatus::Cancelled).is_err());
        assert!(validate_transition(LendingStatus::Accepted, LendingStatus::Rejected).is_err());
    }

    #[test]
    fn terminal_statuses_have_no_transitions() {
        for status in ALL_STATUSES.iter().filter(|s| s.is_terminal()) {
            assert!(status.valid_transitions().is_empty(), "{status} should be terminal");
        }
        assert!(!LendingStatus::Pending.is_terminal());
        assert!(!LendingStatus::Accepted.is_terminal());
    }

    #[test]
    fn active_loan_covers_pending_and_unreturned_accepted() {
        assert!(is_active_loan(LendingStatus::Pending, None));
        assert!(is_active_loan(LendingStatus::Accepted, None));
        assert!(!is_active_loan(LendingStatus::Accepted, Some(Utc::now())));
        assert!(!is_active_loan(LendingStatus::Returned, Some(Utc::now())));
        assert!(!is_active_loan(LendingStatus::Rejected, None));
        assert!(!is_active_loan(LendingStatus::Cancelled, None));
    }

    #[test]
    fn cancel_requires_pending() {
        assert!(ensure_cancellable(LendingStatus::Pending).is_ok());
        for status in [
            LendingStatus::Accepted,
            LendingStatus::Rejected,
            LendingStatus::Returned,
        ] {
            assert!(matches!(
                ensure_cancellable(status),
                Err(CoreError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn return_requires_accepted_without_return_date() {
        assert!(ensure_returnable(LendingStatus::Accepted, None).is_ok());
        assert!(matches!(
            ensure_returnable(LendingStatus::Accepted, Some(Utc::now())),
            Err(CoreError::InvalidState(_))
        ));
        assert!(matches!(
            ensure_returnable(LendingStatus::Pending, None),
            Err(CoreError::InvalidState(_))
        ));
        assert!(matches!(
            ensure_returnable(LendingStatus::Returned, Some(Utc::now())),
            Err(CoreError::InvalidState(_))
        ));
    }

    #[test]
    fn actor_checks() {
        assert!(ensure_lender(1, 1).is_ok());
        assert!(matches!(ensure_lender(2, 1), Err(CoreError::Forbidden(_))));
        assert!(ensure_borrower(3, 3).is_ok());
        assert!(matches!(ensure_borrower(1, 3), Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn self_lending_is_invalid() {
        assert!(matches!(validate_parties(5, 5), Err(CoreError::Validation(_))));
        assert!(validate_parties(5, 6).is_ok());
    }

    #[test]
    fn response_maps_to_status() {
        assert_eq!(response_status(true), LendingStatus::Accepted);
        assert_eq!(response_status(false), LendingStatus::Rejected);
    }

    #[test]
    fn display_matches_stored_text() {
        assert_eq!(LendingStatus::Accepted.to_string(), "accepted");
        assert_eq!(LendingStatus::Cancelled.to_string(), "cancelled");
    }
}
