//! Subscription status state machine and transition validation.
//!
//! Kept in a separate module so PRs touching state transitions do not conflict
//! with PRs touching billing or plan registration.

use crate::types::{Error, SubscriptionStatus};

/// Validates if a status transition is allowed by the state machine.
///
/// # State Transition Rules
///
/// | From      | To        | Allowed | Trigger            |
/// |-----------|-----------|---------|--------------------|
/// | Active    | Cancelled | Yes     | `cancel_plan`      |
/// | Cancelled | Active    | Yes     | `subscribe_to_plan`|
/// | *any*     | Same      | No      |                    |
///
/// Enrollment from a missing record is not a transition; it always creates
/// an `Active` record.
pub fn validate_status_transition(
    from: &SubscriptionStatus,
    to: &SubscriptionStatus,
) -> Result<(), Error> {
    let valid = match from {
        SubscriptionStatus::Active => matches!(to, SubscriptionStatus::Cancelled),
        SubscriptionStatus::Cancelled => matches!(to, SubscriptionStatus::Active),
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidStatusTransition)
    }
}

/// Returns all valid target statuses for a given current status.
pub fn get_allowed_transitions(status: &SubscriptionStatus) -> &'static [SubscriptionStatus] {
    match status {
        SubscriptionStatus::Active => &[SubscriptionStatus::Cancelled],
        SubscriptionStatus::Cancelled => &[SubscriptionStatus::Active],
    }
}

/// Convenience wrapper around [`validate_status_transition`] for boolean checks.
pub fn can_transition(from: &SubscriptionStatus, to: &SubscriptionStatus) -> bool {
    validate_status_transition(from, to).is_ok()
}
